// src/services/conversation.rs
use std::{fmt::Debug, sync::Arc};

use tokio::sync::RwLock;

#[derive(Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Bot,
}

/// Append-only chat transcript, in display order.
#[derive(Clone, Default)]
pub struct Conversation {
    inner: Arc<RwLock<Vec<Message>>>,
}

impl Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation").finish_non_exhaustive()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    // Append a message and return a copy of it.
    pub async fn append_message(&self, role: MessageRole, content: impl Into<String>) -> Message {
        let msg = Message {
            role,
            content: content.into(),
        };
        let mut guard = self.inner.write().await;
        guard.push(msg.clone());
        msg
    }

    /// Get a copy of the transcript
    pub async fn history(&self) -> Vec<Message> {
        self.inner.read().await.clone()
    }

    /// Messages attributed to one side only
    pub async fn messages_from(&self, role: MessageRole) -> Vec<Message> {
        let guard = self.inner.read().await;
        guard.iter().filter(|m| m.role == role).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn basic_conversation_flow() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty().await);

        let msg = conversation.append_message(MessageRole::User, "hello").await;
        assert_eq!(msg.content, "hello");
        conversation.append_message(MessageRole::Bot, "hi").await;

        let history = conversation.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[1].role, MessageRole::Bot);
    }
}
