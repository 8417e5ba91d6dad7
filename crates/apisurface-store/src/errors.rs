//! Error handling for apisurface-store
//!
//! Wraps apisurface-core ExError with store-specific helpers

use apisurface_core::errors::{ApiSurfaceError, ExError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &str) -> ExError {
    ExError::from(ApiSurfaceError::InvalidConfiguration {
        reason: reason.to_string(),
    })
    .with_op("snapshot_writer_new")
}

/// Create a cancellation error
pub fn cancelled(operation: &str) -> ExError {
    ApiSurfaceError::Cancelled {
        op: operation.to_string(),
    }
    .into()
}

/// Create an IO error
///
/// The `std::io::Error` is kept as the error source, so its kind survives.
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::from(ApiSurfaceError::Io {
        op: operation.to_string(),
        kind: err.kind(),
        message: err.to_string(),
    })
    .with_io_source(err)
}
