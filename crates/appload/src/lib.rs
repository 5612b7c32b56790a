//! # appload
//!
//! Native payload location and hot-load bridging for updatable app
//! runtimes.
//!
//! A host mobile runtime that supports dynamically-updatable application
//! code needs three things from its native side:
//!
//! - finding the architecture-specific payload the runtime boots from,
//!   whether it sits loose on disk or packed inside a package archive
//!   ([`PayloadLocator`])
//! - a typed call surface the embedding can route its method channel onto
//!   ([`CallRouter`] over [`PlatformEnv`])
//! - symbol resolution against the separately-built update-client library
//!   ([`UpdateClient`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use appload::prelude::*;
//!
//! struct AndroidEnv { /* package manager handles */ }
//!
//! impl PlatformEnv for AndroidEnv {
//!     // package_descriptor / app_info / device_architecture / storage_paths
//!     # fn package_descriptor(&self) -> appload::HostResult<appload::PackageDescriptor> { unimplemented!() }
//!     # fn app_info(&self) -> appload::HostResult<appload::AppInfo> { unimplemented!() }
//!     # fn device_architecture(&self) -> String { unimplemented!() }
//!     # fn storage_paths(&self) -> appload::StoragePaths { unimplemented!() }
//! }
//!
//! let router = CallRouter::new(env, code_cache_dir.join("appload"));
//! let reply = router.dispatch(HostCall::LibappPaths)?;
//! channel.respond(reply.to_json()?);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`appload_locator`] - payload resolution, extraction, and diagnostics
//! - [`appload_host`] - the host call surface and platform environment seam
//! - [`appload_shim`] - update-client symbol resolution

// Re-export locator types
pub use appload_locator::{
    ARCHIVE_LIB_DIR, Architecture, ArchiveExtractor, ArchiveProbe, ArchiveStatus, DebugReport,
    LocationStatus, LocatorError, LocatorResult, PAYLOAD_FILE, PackageDescriptor, PayloadLocator,
    ProbeOutcome, ResolutionCache, ResolutionSource, ResolvedPayload,
};

// Re-export host call surface
pub use appload_host::{
    AppInfo, CallReply, CallRouter, HostCall, HostError, HostResult, PlatformEnv, StoragePaths,
};

// Re-export update-client shim
pub use appload_shim::{ShimError, ShimResult, UpdateClient};

// Re-export common dependencies that embeddings need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use appload::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Architecture, CallReply, CallRouter, HostCall, HostError, HostResult, LocatorError,
        LocatorResult, PackageDescriptor, PayloadLocator, PlatformEnv, ResolutionSource,
        UpdateClient,
    };
}
