//! Error types for update-client loading.

use thiserror::Error;

/// Result type alias for shim operations.
pub type ShimResult<T> = Result<T, ShimError>;

/// Errors that can occur while loading the update-client library.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Failed to load the update-client library.
    #[error("failed to load update client: {0}")]
    LibraryLoad(String),

    /// Failed to find a required symbol in the library.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// Failed to convert a string across the FFI boundary.
    #[error("string conversion failed: {0}")]
    StringConversion(String),
}
