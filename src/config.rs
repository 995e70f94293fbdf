/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables endpoint (nested under a workspace)
    pub const VARS: &str = "vars";

    /// JSON:API media type sent with every request
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to Terraform credentials file (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"];
}

/// Workspace variable defaults
pub mod vars {
    /// Category written for every variable
    pub const CATEGORY: &str = "terraform";

    /// Error detail the API returns when a key already exists in a workspace
    pub const DUPLICATE_KEY_DETAIL: &str = "Key has already been taken";
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Pager used when $PAGER is not set
    pub const PAGER: &str = "less -R";
}
