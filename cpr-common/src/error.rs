use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CprError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Directory Walk Error: {0}")]
    WalkDir(#[from] Arc<walkdir::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unable to find the '{0}' command")]
    CommandNotFound(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for CprError {
    fn from(err: std::io::Error) -> Self {
        CprError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for CprError {
    fn from(err: serde_json::Error) -> Self {
        CprError::Json(Arc::new(err))
    }
}

impl From<walkdir::Error> for CprError {
    fn from(err: walkdir::Error) -> Self {
        CprError::WalkDir(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, CprError>;
