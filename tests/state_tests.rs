use pdf_chat::message::DocumentId;
use pdf_chat::services::conversation::{Conversation, MessageRole};
use pdf_chat::state::AppState;

#[tokio::test]
async fn conversation_keeps_display_order() {
    let conversation = Conversation::new();
    conversation.append_message(MessageRole::User, "one").await;
    conversation.append_message(MessageRole::Bot, "two").await;
    conversation.append_message(MessageRole::User, "three").await;

    let contents: Vec<String> = conversation
        .history()
        .await
        .into_iter()
        .map(|m| m.content)
        .collect();
    assert_eq!(contents, ["one", "two", "three"]);
    assert_eq!(conversation.messages_from(MessageRole::User).await.len(), 2);
}

#[tokio::test]
async fn clones_share_the_transcript() {
    let conversation = Conversation::new();
    let other = conversation.clone();
    other.append_message(MessageRole::Bot, "hi").await;
    assert_eq!(conversation.len().await, 1);
}

#[tokio::test]
async fn document_starts_unset_and_can_be_replaced() {
    let state = AppState::new();
    assert_eq!(state.document_id().await, None);
    assert_eq!(state.selected_file().await, None);

    state.set_document(DocumentId(1)).await;
    state.set_document(DocumentId(0)).await;
    // Zero is a real identifier, not "unset".
    assert_eq!(state.document_id().await, Some(DocumentId(0)));

    state.set_selected_file("report.pdf").await;
    assert_eq!(state.selected_file().await.as_deref(), Some("report.pdf"));
}
