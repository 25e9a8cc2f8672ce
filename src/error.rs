// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("'{name}' is not a PDF (declared type: {content_type})")]
    InvalidFileType { name: String, content_type: String },

    #[error("no PDF has been uploaded yet")]
    NoDocument,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("malformed response from {endpoint}: {source}")]
    Body {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;
