// src/services/notifications.rs
//! Transient notifications and the event feed the terminal renders.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

use super::conversation::Message;
use crate::message::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Loading,
    Success,
    Error,
}

/// A toast. A `Loading` toast is later resolved by another one with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub text: String,
}

/// Everything the page tells its view about.
#[derive(Debug, Clone)]
pub enum PageEvent {
    Message(Message),
    Notification(Notification),
    /// A new document is now the one questions go to.
    DocumentReady { id: DocumentId, file_name: String },
}

#[derive(Debug)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<PageEvent>,
    next_id: AtomicU64,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PageEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            tx,
            next_id: AtomicU64::new(1),
        };
        (notifier, rx)
    }

    pub fn message(&self, message: Message) {
        self.send(PageEvent::Message(message));
    }

    pub fn document_ready(&self, id: DocumentId, file_name: impl Into<String>) {
        self.send(PageEvent::DocumentReady {
            id,
            file_name: file_name.into(),
        });
    }

    /// Show a one-off error toast.
    pub fn error(&self, text: impl Into<String>) -> u64 {
        let id = self.next_id();
        self.notify(id, Level::Error, text.into());
        id
    }

    /// Show a loading toast that must be resolved through the returned handle.
    pub fn loading(&self, text: impl Into<String>) -> PendingToast<'_> {
        let id = self.next_id();
        self.notify(id, Level::Loading, text.into());
        PendingToast { notifier: self, id }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn notify(&self, id: u64, level: Level, text: String) {
        self.send(PageEvent::Notification(Notification { id, level, text }));
    }

    fn send(&self, event: PageEvent) {
        // Nobody listening (view closed) is not an error for the page.
        let _ = self.tx.send(event);
    }
}

#[must_use = "a loading toast stays up until it is resolved"]
pub struct PendingToast<'a> {
    notifier: &'a Notifier,
    id: u64,
}

impl PendingToast<'_> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn success(self, text: impl Into<String>) {
        self.notifier.notify(self.id, Level::Success, text.into());
    }

    pub fn error(self, text: impl Into<String>) {
        self.notifier.notify(self.id, Level::Error, text.into());
    }
}
