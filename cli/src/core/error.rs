use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ApiError {
    Io(io::Error),
    Serde(serde_json::Error),
    Validation(String),
    InvalidInput(String),
    Storage(String),
    Network(String),
    Config(String),
    Generic(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Io(err) => write!(f, "IO error: {err}"),
            ApiError::Serde(err) => write!(f, "Serialization error: {err}"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::InvalidInput(msg) => write!(f, "{msg}"),
            ApiError::Storage(msg) => write!(f, "{msg}"),
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ApiError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Io(err) => Some(err),
            ApiError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ApiError {
    fn from(err: io::Error) -> Self {
        ApiError::Io(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serde(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Network(format!("Request setup error: {err}"))
        } else {
            ApiError::Network(format!("No response received from server: {err}"))
        }
    }
}

impl From<String> for ApiError {
    fn from(msg: String) -> Self {
        ApiError::Generic(msg)
    }
}

impl From<&str> for ApiError {
    fn from(msg: &str) -> Self {
        ApiError::Generic(msg.to_string())
    }
}
