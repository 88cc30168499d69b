//! Error types covering the failure kinds surfaced by gitswift operations.
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for gitswift operations.
#[derive(Error, Debug)]
pub enum GitSwiftError {
    // Input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Filesystem errors
    #[error("Filesystem operation failed: {0}")]
    Io(#[from] std::io::Error),

    // Git errors
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    // Remote URL derivation errors
    #[error("Invalid git remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Git URL parse error: {0}")]
    GitUrl(#[from] git_url_parse::GitUrlParseError),

    // Configuration errors
    #[error("GitHub token not configured")]
    MissingToken,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // Remote service errors
    #[error("Forge operation failed: {0}")]
    Forge(String),

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("API authentication failed: {0}")]
    Authentication(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Prompt errors
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using GitSwiftError
pub type Result<T> = std::result::Result<T, GitSwiftError>;

impl GitSwiftError {
    /// Create an input validation error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::Forge(msg.into())
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for GitSwiftError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Network(err.to_string())
        } else if let Some(status) = err.status() {
            if status == StatusCode::UNAUTHORIZED
                || status == StatusCode::FORBIDDEN
            {
                Self::Authentication(err.to_string())
            } else if status == StatusCode::TOO_MANY_REQUESTS {
                Self::RateLimitExceeded
            } else {
                Self::Network(err.to_string())
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for GitSwiftError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            octocrab::Error::GitHub { source, .. }
                if source.status_code == StatusCode::UNAUTHORIZED
                    || source.status_code == StatusCode::FORBIDDEN =>
            {
                Self::Authentication(source.message.clone())
            }
            _ => Self::forge(format!("GitHub API error: {}", err)),
        }
    }
}
