// src/state.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::message::DocumentId;
use crate::services::conversation::Conversation;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default)]
pub struct AppState {
    pub conversation: Conversation,
    page: RwLock<PageState>,
}

#[derive(Debug, Default, Clone)]
struct PageState {
    document: Option<DocumentId>,
    selected_file: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn document_id(&self) -> Option<DocumentId> {
        self.page.read().await.document
    }

    pub async fn set_document(&self, id: DocumentId) {
        self.page.write().await.document = Some(id);
    }

    pub async fn selected_file(&self) -> Option<String> {
        self.page.read().await.selected_file.clone()
    }

    pub async fn set_selected_file(&self, name: impl Into<String>) {
        self.page.write().await.selected_file = Some(name.into());
    }
}
