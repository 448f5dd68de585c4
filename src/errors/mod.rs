use thiserror::Error;

#[derive(Error, Debug)]
pub enum TedditError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    Parse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TedditError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        TedditError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TedditError {
    fn from(err: serde_json::Error) -> Self {
        TedditError::Parse(err.to_string())
    }
}

pub type TedditResult<T> = Result<T, TedditError>;
