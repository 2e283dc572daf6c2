//! Error handling for the cipher engine
//!
//! The engine reports through the API error system. Primitive errors convert
//! with `?`; this module adds the glue for `std::io`.

// Re-export the primary API error system
pub use ciphra_api::error::{validate, Error, Result};

/// Convert an engine error into an I/O error for `Read`/`Write` impls
#[cfg(feature = "std")]
pub fn to_io_error(err: Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, err)
}

/// Extension trait to make I/O conversions more ergonomic
#[cfg(feature = "std")]
pub trait SymmetricResultExt<T> {
    /// Convert a Result with an I/O error to a Result with API Error
    fn map_io_err(self, context: &'static str) -> Result<T>;
}

#[cfg(feature = "std")]
impl<T> SymmetricResultExt<T> for core::result::Result<T, std::io::Error> {
    fn map_io_err(self, context: &'static str) -> Result<T> {
        use alloc::string::ToString;

        self.map_err(|e| Error::Io {
            context,
            message: e.to_string(),
        })
    }
}

/// Validate stream state
pub fn validate_stream_state(
    condition: bool,
    operation: &'static str,
    state: &'static str,
) -> Result<()> {
    validate::state(condition, operation, state)
}
