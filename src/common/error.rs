//! Error types for coordkv

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // === Construction ===
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Remote call outcomes ===
    #[error("Operation timeout: {0}")]
    Timeout(String),

    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Node already exists: {0}")]
    NodeExist(String),

    #[error("Not a file: {0}")]
    NotFile(String),

    #[error("Not a directory: {0}")]
    NotDir(String),

    #[error("Store error {code}: {message}")]
    Api { code: u64, message: String },

    // === Transport / response shape ===
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// Is this the "key does not exist" case?
    ///
    /// The one distinction the client relies on internally: an absent key is
    /// recoverable and expected, every other remote failure is not.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Is this an error a caller could reasonably retry?
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Http(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else if e.is_connect() {
            Error::Http(format!("connect: {}", e))
        } else {
            Error::Http(e.to_string())
        }
    }
}
