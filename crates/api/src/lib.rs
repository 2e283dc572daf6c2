//! Public API types for the ciphra library
//!
//! This crate provides the shared surface of the ciphra ecosystem: the error
//! taxonomy every layer reports through, the small value types that describe
//! an operation (direction, padding), and the streaming trait implemented by
//! cipher streams.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::symmetric;
pub use traits::StreamingOperation;
