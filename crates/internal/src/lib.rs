//! Internal utilities for the ciphra library
//!
//! Nothing in this crate is part of the public API; it is shared plumbing
//! for the primitive and engine crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
