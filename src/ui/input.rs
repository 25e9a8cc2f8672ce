// src/ui/input.rs
