// src/core/mod.rs
pub mod error;
pub mod generator;
pub mod keypad;
pub mod types;
