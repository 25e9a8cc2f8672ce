// src/services/mod.rs
pub mod backend;
pub mod chat_page;
pub mod conversation;
pub mod notifications;
