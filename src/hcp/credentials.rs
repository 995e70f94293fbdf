//! TFE token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, TfeCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct TfeCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    /// Explicit credentials file (`--credentials`), replaces the default path
    credentials_file: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_file: None,
        }
    }

    /// Use a custom credentials file instead of the Terraform default
    pub fn with_credentials_file(mut self, path: Option<PathBuf>) -> Self {
        self.credentials_file = path;
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (HCP_TOKEN, TFC_TOKEN, TFE_TOKEN - in order)
    /// 3. Credentials file (custom path or ~/.terraform.d/credentials.tfrc.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        // An explicit credentials file wins over ambient env vars
        if self.credentials_file.is_none() {
            for env_var in credentials::TOKEN_ENV_VARS {
                if let Ok(token) = std::env::var(env_var) {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        self.read_from_credentials_file()
    }

    /// Read token from Terraform credentials file
    fn read_from_credentials_file(&self) -> Result<String> {
        let credentials_path = self
            .credentials_path()
            .ok_or_else(|| TfeError::TokenNotFound(self.token_not_found_message(None)))?;

        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = fs::read_to_string(&credentials_path).map_err(|_| {
            TfeError::TokenNotFound(self.token_not_found_message(Some(&credentials_path)))
        })?;

        let token = parse_credentials(&content, &self.host).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        token
            .inspect(|_| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                )
            })
            .ok_or_else(|| {
                TfeError::TokenNotFound(self.token_not_found_message(Some(&credentials_path)))
            })
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tfe-bulk --token <TOKEN>\n\
             2. Environment var:   export TFE_TOKEN=<TOKEN>  (also: HCP_TOKEN, TFC_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host, self.host, env_vars, creds_info
        )
    }

    /// Credentials file to read: explicit path, else ~/.terraform.d/credentials.tfrc.json
    fn credentials_path(&self) -> Option<PathBuf> {
        self.credentials_file
            .clone()
            .or_else(|| dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX)))
    }
}

/// Look up `credentials[host].token` in a credentials file body
fn parse_credentials(content: &str, host: &str) -> serde_json::Result<Option<String>> {
    let creds: TfeCredentials = serde_json::from_str(content)?;
    Ok(creds.credentials.get(host).map(|cred| cred.token.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::new("test.example.com");
        assert_eq!(resolver.resolve(Some("cli-token-123")).unwrap(), "cli-token-123");
    }

    #[test]
    fn test_token_not_found_message_format() {
        let resolver = TokenResolver::new("app.terraform.io");
        let msg = resolver.token_not_found_message(None);
        assert!(msg.contains("app.terraform.io"));
        assert!(msg.contains("tfe-bulk --token"));
        assert!(msg.contains("TFE_TOKEN"));
        assert!(msg.contains("terraform login"));
    }

    #[test]
    fn test_parse_credentials_picks_host() {
        let json = r#"{
            "credentials": {
                "app.terraform.io": { "token": "test-token-123" },
                "tfe.example.com": { "token": "custom-token-456" }
            }
        }"#;

        assert_eq!(
            parse_credentials(json, "tfe.example.com").unwrap(),
            Some("custom-token-456".to_string())
        );
        assert_eq!(parse_credentials(json, "other.host").unwrap(), None);
    }

    #[test]
    fn test_parse_credentials_invalid_json() {
        assert!(parse_credentials("{not json", "app.terraform.io").is_err());
    }

    #[test]
    fn test_custom_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"credentials": {{"tfe.internal": {{"token": "file-token"}}}}}}"#
        )
        .unwrap();

        let resolver = TokenResolver::new("tfe.internal")
            .with_credentials_file(Some(file.path().to_path_buf()));

        assert_eq!(resolver.resolve(None).unwrap(), "file-token");
    }

    #[test]
    fn test_custom_credentials_file_missing_host() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"credentials": {{}}}}"#).unwrap();

        let resolver = TokenResolver::new("tfe.internal")
            .with_credentials_file(Some(file.path().to_path_buf()));

        match resolver.resolve(None) {
            Err(TfeError::TokenNotFound(msg)) => assert!(msg.contains("tfe.internal")),
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_credentials_file_unreadable() {
        let resolver = TokenResolver::new("tfe.internal")
            .with_credentials_file(Some(PathBuf::from("/nonexistent/credentials.tfrc.json")));

        assert!(matches!(
            resolver.resolve(None),
            Err(TfeError::TokenNotFound(_))
        ));
    }
}
