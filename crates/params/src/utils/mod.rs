//! Constants grouped by primitive family

pub mod symmetric;
