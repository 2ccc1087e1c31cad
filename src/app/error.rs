use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RedlinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input at {source_name}:{line}: {message}")]
    Input {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RedlinkError>;
