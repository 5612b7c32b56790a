//! Platform environment abstraction and reply payload types.

use crate::HostResult;
use appload_locator::PackageDescriptor;
use serde::{Deserialize, Serialize};

/// Platform queries the router needs, implemented once per host platform.
///
/// Implementations wrap the platform's package-manager and filesystem APIs.
/// All methods are expected to be cheap; descriptors are constructed fresh
/// per call and not cached.
pub trait PlatformEnv {
    /// The installed package's archive/loose-file layout and target
    /// architecture.
    fn package_descriptor(&self) -> HostResult<PackageDescriptor>;

    /// Package metadata snapshot.
    fn app_info(&self) -> HostResult<AppInfo>;

    /// The device architecture tag (e.g. `arm64-v8a`).
    fn device_architecture(&self) -> String;

    /// Application-private storage directories.
    ///
    /// Exact parity required: these values must byte-for-byte match the
    /// paths the update-loading runtime computes on its own, because it
    /// uses them to locate downloaded update payloads.
    fn storage_paths(&self) -> StoragePaths;
}

/// Package metadata, serialized with the channel key names the host side
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Package identifier.
    pub package_name: String,
    /// Directory where the installer may have unpacked native payloads.
    pub native_library_dir: String,
    /// Path to the main package archive.
    pub source_dir: String,
    /// Additional split-package archive paths, in install order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub split_source_dirs: Vec<String>,
    /// Human-readable version.
    pub version_name: String,
    /// Monotonic version code, stringified.
    pub version_code: String,
    /// Device architecture tag.
    pub architecture: String,
}

/// The two fixed application-private directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoragePaths {
    /// Persistent application storage directory.
    pub app_storage_dir: String,
    /// Code cache directory.
    pub code_cache_dir: String,
}
