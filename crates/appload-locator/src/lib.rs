//! Payload location and extraction for updatable app runtimes.
//!
//! This crate locates the architecture-specific application payload
//! (`libapp.so`) that a host runtime loads at startup. The payload is either
//! already unpacked onto the filesystem by the platform installer (a "loose
//! file") or still packed inside one of the installed package archives, in
//! which case it is extracted to a writable cache directory.
//!
//! # Package layout
//!
//! ```text
//! base.apk
//! ├── lib/
//! │   ├── arm64-v8a/
//! │   │   └── libapp.so
//! │   └── armeabi-v7a/
//! │       └── libapp.so
//! └── ...
//! split_config.arm64_v8a.apk      # supplementary archive, probed after base
//! └── lib/
//!     └── arm64-v8a/
//!         └── libapp.so
//! ```
//!
//! # Example
//!
//! ```no_run
//! use appload_locator::{PackageDescriptor, PayloadLocator};
//!
//! let descriptor = PackageDescriptor::new(
//!     "/data/app/com.example/base.apk",
//!     "/data/app/com.example/lib/arm64",
//!     "arm64-v8a",
//! );
//!
//! let locator = PayloadLocator::new("/data/user/0/com.example/code_cache/appload");
//! let resolved = locator.resolve(&descriptor);
//! println!("payload at {} ({:?})", resolved.path.display(), resolved.source);
//! ```

mod architecture;
mod cache;
mod descriptor;
mod error;

pub mod diagnostics;
pub mod extract;
pub mod resolver;

pub use architecture::Architecture;
pub use cache::ResolutionCache;
pub use descriptor::PackageDescriptor;
pub use diagnostics::{ArchiveStatus, DebugReport, LocationStatus};
pub use error::{ArchiveProbe, LocatorError, ProbeOutcome};
pub use extract::ArchiveExtractor;
pub use resolver::{PayloadLocator, ResolutionSource, ResolvedPayload};

/// Result type for locator operations.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Fixed payload filename, both inside archives and on disk.
///
/// This doubles as the loader-search identifier handed to the dynamic
/// loader: passing the bare filename lets `dlopen` consult its own search
/// path when no absolute path is known.
pub const PAYLOAD_FILE: &str = "libapp.so";

/// Directory prefix for native library entries inside package archives.
pub const ARCHIVE_LIB_DIR: &str = "lib";
