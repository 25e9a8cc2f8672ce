// src/message.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the backend assigns to an uploaded PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub id: DocumentId,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub question: Option<String>,
}
