// File: crates/api/src/traits/mod.rs

//! Trait definitions shared by the cipher layers

pub mod symmetric;

pub use symmetric::StreamingOperation;
