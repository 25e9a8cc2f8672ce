// src/services/backend/mod.rs
//! The remote document service the page talks to.
//!
//! [`HttpBackend`] is the real thing; [`mock::MockBackend`] stands in for it in tests.

pub mod http;
pub mod mock;

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::error::Result;
use crate::message::{AskResponse, DocumentId, UploadResponse};

pub use http::HttpBackend;

pub const PDF_MIME: &str = "application/pdf";
const OCTET_STREAM: &str = "application/octet-stream";

/// A file the user picked, as it will be sent to `upload-pdf`.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type.trim().eq_ignore_ascii_case(PDF_MIME)
    }
}

/// Content type a file picker would declare for `path`, judged by extension only.
pub fn declared_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME,
        _ => OCTET_STREAM,
    }
}

pub trait DocumentBackend: Send + Sync {
    /// `POST /upload-pdf/` with the file as multipart field `file`.
    fn upload_pdf(
        &self,
        file: SelectedFile,
    ) -> Pin<Box<dyn Future<Output = Result<UploadResponse>> + Send + '_>>;

    /// `POST /ask-question/{id}` with `{"question": ...}`.
    fn ask_question<'a>(
        &'a self,
        id: DocumentId,
        question: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AskResponse>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_from_extension() {
        assert_eq!(declared_content_type(Path::new("a/report.pdf")), PDF_MIME);
        assert_eq!(declared_content_type(Path::new("REPORT.PDF")), PDF_MIME);
        assert_eq!(declared_content_type(Path::new("notes.txt")), OCTET_STREAM);
        assert_eq!(declared_content_type(Path::new("pdf")), OCTET_STREAM);
    }

    #[test]
    fn pdf_check_ignores_case() {
        assert!(SelectedFile::new("a.pdf", "Application/PDF", vec![]).is_pdf());
        assert!(!SelectedFile::new("a.png", "image/png", vec![]).is_pdf());
    }
}
