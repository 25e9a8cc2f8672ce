// src/services/backend/mock.rs
//! Mock document backend for testing.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use reqwest::StatusCode;

use super::{DocumentBackend, SelectedFile};
use crate::error::{ChatError, Result};
use crate::message::{AskResponse, DocumentId, UploadResponse};

/// What a mocked endpoint answers with.
#[derive(Clone, Debug)]
pub enum MockResponse<T> {
    Ok(T),
    /// Simulate a non-2xx HTTP status.
    Status(u16),
}

type Script<T> = Mutex<VecDeque<(Option<Duration>, MockResponse<T>)>>;

/// A hand-rolled mock implementing [`DocumentBackend`].
///
/// Both endpoints pop scripted responses in order (each with an optional
/// latency) and fall back to a fixed response once their script is exhausted.
/// Every call is counted and recorded.
pub struct MockBackend {
    uploads_script: Script<DocumentId>,
    fallback_upload: MockResponse<DocumentId>,
    answers: Script<String>,
    fallback_answer: MockResponse<String>,
    uploads: Mutex<Vec<String>>,
    questions: Mutex<Vec<(DocumentId, String)>>,
    upload_calls: AtomicUsize,
    ask_calls: AtomicUsize,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Accepts uploads as document 1 and answers every question with "mock answer".
    pub fn new() -> Self {
        Self {
            uploads_script: Mutex::new(VecDeque::new()),
            fallback_upload: MockResponse::Ok(DocumentId(1)),
            answers: Mutex::new(VecDeque::new()),
            fallback_answer: MockResponse::Ok("mock answer".to_string()),
            uploads: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
            upload_calls: AtomicUsize::new(0),
            ask_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_upload(mut self, response: MockResponse<DocumentId>) -> Self {
        self.fallback_upload = response;
        self
    }

    pub fn with_answer(mut self, response: MockResponse<String>) -> Self {
        self.fallback_answer = response;
        self
    }

    /// Queue one upload response, served after `delay` if given.
    pub fn push_upload(self, delay: Option<Duration>, response: MockResponse<DocumentId>) -> Self {
        lock(&self.uploads_script).push_back((delay, response));
        self
    }

    /// Queue one answer, served after `delay` if given.
    pub fn push_answer(self, delay: Option<Duration>, response: MockResponse<String>) -> Self {
        lock(&self.answers).push_back((delay, response));
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    /// Names of the files received, in call order.
    pub fn uploaded_files(&self) -> Vec<String> {
        lock(&self.uploads).clone()
    }

    /// `(document, question)` pairs received, in call order.
    pub fn questions(&self) -> Vec<(DocumentId, String)> {
        lock(&self.questions).clone()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn next<T: Clone>(script: &Script<T>, fallback: &MockResponse<T>) -> (Option<Duration>, MockResponse<T>) {
    let scripted = lock(script).pop_front();
    scripted.unwrap_or_else(|| (None, fallback.clone()))
}

fn status_error(endpoint: &'static str, code: u16) -> ChatError {
    ChatError::Status {
        endpoint,
        status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

impl DocumentBackend for MockBackend {
    fn upload_pdf(
        &self,
        file: SelectedFile,
    ) -> Pin<Box<dyn Future<Output = Result<UploadResponse>> + Send + '_>> {
        Box::pin(async move {
            self.upload_calls.fetch_add(1, Ordering::SeqCst);
            lock(&self.uploads).push(file.name.clone());

            let (delay, response) = next(&self.uploads_script, &self.fallback_upload);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            match response {
                MockResponse::Ok(id) => Ok(UploadResponse {
                    id,
                    filename: Some(file.name),
                }),
                MockResponse::Status(code) => Err(status_error("upload-pdf", code)),
            }
        })
    }

    fn ask_question<'a>(
        &'a self,
        id: DocumentId,
        question: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AskResponse>> + Send + 'a>> {
        Box::pin(async move {
            self.ask_calls.fetch_add(1, Ordering::SeqCst);
            lock(&self.questions).push((id, question.to_string()));

            let (delay, response) = next(&self.answers, &self.fallback_answer);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            match response {
                MockResponse::Ok(answer) => Ok(AskResponse {
                    answer,
                    question: Some(question.to_string()),
                }),
                MockResponse::Status(code) => Err(status_error("ask-question", code)),
            }
        })
    }
}
