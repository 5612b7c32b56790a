//! The closed set of host operations.

use std::fmt;

/// Operations the host runtime can invoke.
///
/// This is the statically-typed form of the method-name surface; the set is
/// closed, so the router has no unknown-method path. [`HostCall::parse`]
/// maps an incoming method name to a call, and an unparseable name is the
/// transport's problem, not the router's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCall {
    /// Ordered payload search paths: loader-search identifier first, then
    /// the best resolved or fallback absolute path.
    LibappPaths,
    /// Package metadata snapshot.
    AppInfo,
    /// Device architecture tag.
    DeviceArchitecture,
    /// Application-private persistent and cache directories.
    StoragePaths,
    /// Extract the payload now; fallible.
    ExtractPayload,
    /// Full diagnostic snapshot of payload candidate locations.
    DebugPayloadLocations,
}

impl HostCall {
    /// The wire method name for this call.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LibappPaths => "getLibappPaths",
            Self::AppInfo => "getAppInfo",
            Self::DeviceArchitecture => "getDeviceArchitecture",
            Self::StoragePaths => "getStoragePaths",
            Self::ExtractPayload => "extractPayload",
            Self::DebugPayloadLocations => "debugPayloadLocations",
        }
    }

    /// Parse a wire method name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "getLibappPaths" => Some(Self::LibappPaths),
            "getAppInfo" => Some(Self::AppInfo),
            "getDeviceArchitecture" => Some(Self::DeviceArchitecture),
            "getStoragePaths" => Some(Self::StoragePaths),
            "extractPayload" => Some(Self::ExtractPayload),
            "debugPayloadLocations" => Some(Self::DebugPayloadLocations),
            _ => None,
        }
    }

    /// All operations in the surface.
    #[must_use]
    pub fn all() -> &'static [HostCall] {
        &[
            Self::LibappPaths,
            Self::AppInfo,
            Self::DeviceArchitecture,
            Self::StoragePaths,
            Self::ExtractPayload,
            Self::DebugPayloadLocations,
        ]
    }
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
