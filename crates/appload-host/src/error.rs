//! Error types for the host call surface.

use appload_locator::LocatorError;
use thiserror::Error;

/// Result type alias for host call operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors surfaced to the host runtime.
#[derive(Debug, Error)]
pub enum HostError {
    /// A platform environment query failed (package manager, storage
    /// lookup).
    #[error("environment query failed: {0}")]
    Environment(String),

    /// Payload location or extraction failed.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// A reply could not be serialized.
    #[error("reply serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
