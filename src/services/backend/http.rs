// src/services/backend/http.rs
//! reqwest implementation of [`DocumentBackend`].

use std::future::Future;
use std::pin::Pin;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{DocumentBackend, SelectedFile};
use crate::config::Config;
use crate::error::{ChatError, Result};
use crate::message::{AskRequest, AskResponse, DocumentId, UploadResponse};

const UPLOAD_ENDPOINT: &str = "upload-pdf";
const ASK_ENDPOINT: &str = "ask-question";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    /// No request timeout is configured; requests wait as long as reqwest does by default.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pdf-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    async fn upload(&self, file: SelectedFile) -> Result<UploadResponse> {
        let url = self.config.upload_url();
        info!(%url, file = %file.name, bytes = file.bytes.len(), "uploading PDF");

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let body: UploadResponse = decode(UPLOAD_ENDPOINT, response).await?;
        debug!(id = %body.id, filename = ?body.filename, "upload accepted");
        Ok(body)
    }

    async fn ask(&self, id: DocumentId, question: &str) -> Result<AskResponse> {
        let url = self.config.ask_url(id);
        info!(%url, %id, "asking question");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await?;
        decode(ASK_ENDPOINT, response).await
    }
}

/// Any non-2xx status is a failure; otherwise the body must be the expected JSON.
async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::Status { endpoint, status });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ChatError::Body { endpoint, source })
}

impl DocumentBackend for HttpBackend {
    fn upload_pdf(
        &self,
        file: SelectedFile,
    ) -> Pin<Box<dyn Future<Output = Result<UploadResponse>> + Send + '_>> {
        Box::pin(self.upload(file))
    }

    fn ask_question<'a>(
        &'a self,
        id: DocumentId,
        question: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AskResponse>> + Send + 'a>> {
        Box::pin(self.ask(id, question))
    }
}
