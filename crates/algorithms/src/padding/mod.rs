//! Padding schemes for block modes

pub mod pkcs7;
