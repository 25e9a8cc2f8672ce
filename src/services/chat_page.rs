// src/services/chat_page.rs
//! The chat page: upload a PDF, then ask questions about it.
//!
//! Every outcome, good or bad, ends up as a bot message in the conversation
//! plus a notification; the returned `Result` only tells the caller what
//! happened. Nothing here retries or times out.
//!
//! Each action is independent. Callers that spawn actions concurrently (the
//! terminal loop does) may see two questions in flight at once, and their
//! answers are appended in completion order, not send order.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error};

use super::backend::{DocumentBackend, SelectedFile, declared_content_type};
use super::conversation::MessageRole;
use super::notifications::Notifier;
use crate::error::{ChatError, Result};
use crate::message::DocumentId;
use crate::state::{AppState, SharedState};

pub const INVALID_FILE_MSG: &str = "Please upload a valid PDF file.";
pub const UPLOADING_MSG: &str = "Uploading PDF...";
pub const UPLOAD_FAILED_MSG: &str = "Sorry, there was an error uploading the PDF. Please try again.";
pub const UPLOAD_FAILED_TOAST: &str = "Error uploading PDF. Please try again.";
pub const NO_DOCUMENT_MSG: &str = "Please upload a PDF first before asking questions.";
pub const ASKING_MSG: &str = "Processing your question...";
pub const ANSWER_RECEIVED_MSG: &str = "Answer received!";
pub const ASK_FAILED_MSG: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";
pub const ASK_FAILED_TOAST: &str = "Error processing your question. Please try again.";

#[derive(Clone)]
pub struct ChatPage {
    state: SharedState,
    backend: Arc<dyn DocumentBackend>,
    notifier: Arc<Notifier>,
}

impl ChatPage {
    pub fn new(backend: Arc<dyn DocumentBackend>, notifier: Notifier) -> Self {
        Self {
            state: Arc::new(AppState::new()),
            backend,
            notifier: Arc::new(notifier),
        }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Upload a file from disk. Non-PDF paths are rejected without being read.
    pub async fn upload_path(&self, path: &Path) -> Result<DocumentId> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = declared_content_type(path);

        if !SelectedFile::new(&name, content_type, Vec::new()).is_pdf() {
            return self.reject(name, content_type.to_string()).await;
        }

        match tokio::fs::read(path).await {
            Ok(bytes) => self.upload(SelectedFile::new(name, content_type, bytes)).await,
            Err(e) => {
                error!(path = %path.display(), error = %e, "could not read PDF");
                self.push(MessageRole::Bot, UPLOAD_FAILED_MSG).await;
                self.notifier.error(UPLOAD_FAILED_TOAST);
                Err(e.into())
            }
        }
    }

    pub async fn upload(&self, file: SelectedFile) -> Result<DocumentId> {
        if !file.is_pdf() {
            return self.reject(file.name, file.content_type).await;
        }

        let name = file.name.clone();
        self.state.set_selected_file(&name).await;
        let toast = self.notifier.loading(UPLOADING_MSG);

        match self.backend.upload_pdf(file).await {
            Ok(response) => {
                self.state.set_document(response.id).await;
                debug!(id = %response.id, file = %name, "document ready");
                self.notifier.document_ready(response.id, &name);
                self.push(
                    MessageRole::Bot,
                    format!(
                        "PDF \"{}\" uploaded successfully! You can now ask questions about it.",
                        name
                    ),
                )
                .await;
                toast.success(format!("PDF \"{}\" uploaded successfully!", name));
                Ok(response.id)
            }
            Err(e) => {
                error!(file = %name, error = %e, "Error uploading file");
                self.push(MessageRole::Bot, UPLOAD_FAILED_MSG).await;
                toast.error(UPLOAD_FAILED_TOAST);
                Err(e)
            }
        }
    }

    /// Ask about the current document. Blank input is ignored and yields `Ok(None)`.
    pub async fn ask(&self, input: &str) -> Result<Option<String>> {
        let question = input.trim();
        if question.is_empty() {
            return Ok(None);
        }

        self.push(MessageRole::User, question).await;

        let Some(id) = self.state.document_id().await else {
            self.push(MessageRole::Bot, NO_DOCUMENT_MSG).await;
            self.notifier.error(NO_DOCUMENT_MSG);
            return Err(ChatError::NoDocument);
        };

        let toast = self.notifier.loading(ASKING_MSG);

        match self.backend.ask_question(id, question).await {
            Ok(response) => {
                self.push(MessageRole::Bot, response.answer.as_str()).await;
                toast.success(ANSWER_RECEIVED_MSG);
                Ok(Some(response.answer))
            }
            Err(e) => {
                error!(%id, error = %e, "Error getting answer");
                self.push(MessageRole::Bot, ASK_FAILED_MSG).await;
                toast.error(ASK_FAILED_TOAST);
                Err(e)
            }
        }
    }

    async fn reject(&self, name: String, content_type: String) -> Result<DocumentId> {
        debug!(file = %name, %content_type, "rejected non-PDF file");
        self.push(MessageRole::Bot, INVALID_FILE_MSG).await;
        self.notifier.error(INVALID_FILE_MSG);
        Err(ChatError::InvalidFileType { name, content_type })
    }

    async fn push(&self, role: MessageRole, content: impl Into<String>) {
        let message = self.state.conversation.append_message(role, content).await;
        self.notifier.message(message);
    }
}
