// src/ui/mod.rs
pub mod input;
pub mod render;
pub mod session;
