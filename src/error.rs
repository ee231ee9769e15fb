use std::path::PathBuf;

use thiserror::Error;

use crate::models::Status;

#[derive(Debug, Error)]
pub enum ImagineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(
        "Parameter(s) {} cannot be null. Please make sure you are passing a valid value.",
        quoted(.0)
    )]
    MissingParameters(Vec<&'static str>),

    #[error("IO error on '{}': {}", .path.display(), .source)]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Multipart field '{0}' is used by both a form part and a file part")]
    PartCollision(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Response data is not available in the response object. Status response: {0}")]
    MissingData(Status),
}

impl ImagineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImagineError::IoError {
            path: path.into(),
            source,
        }
    }
}

fn quoted(names: &[&'static str]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ImagineError>;
