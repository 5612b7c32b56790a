//! Symbol-resolution shim over the native update-client library.
//!
//! The update client is built and shipped separately from this workspace;
//! this crate only loads it and resolves its fixed export set into typed
//! function pointers, so the embedding can drive update checks without
//! linking against the client at build time. Call-signature generation is
//! out of scope: the signatures here are a fixed, hand-maintained set.

mod error;
mod loader;

pub use error::{ShimError, ShimResult};
pub use loader::UpdateClient;
