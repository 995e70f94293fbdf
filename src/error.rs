use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error (missing or conflicting arguments)
    Config(String),
    /// Malformed user input (variable pairs, CSV lists)
    Input(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::Input(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<csv::Error> for TfeError {
    fn from(err: csv::Error) -> Self {
        TfeError::Input(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
