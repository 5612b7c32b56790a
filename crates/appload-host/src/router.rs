//! Dispatch of host calls to the payload locator and platform environment.

use crate::{AppInfo, HostCall, HostResult, PlatformEnv, StoragePaths};
use appload_locator::{DebugReport, PAYLOAD_FILE, PayloadLocator, ResolutionSource};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Routes each [`HostCall`] to its typed reply.
///
/// Owns the [`PayloadLocator`] (and with it the resolution cache) for the
/// process lifetime of the embedding. The candidate-paths call never fails
/// on resolution grounds: a total miss degrades to the constructed
/// loose-file fallback path, which is logged when served (a legacy behavior
/// deliberately preserved; callers wanting a hard failure use
/// [`HostCall::ExtractPayload`]).
pub struct CallRouter<E> {
    env: E,
    locator: PayloadLocator,
}

impl<E: PlatformEnv> CallRouter<E> {
    /// Create a router extracting into the given cache directory.
    pub fn new(env: E, extraction_dir: impl Into<PathBuf>) -> Self {
        Self {
            env,
            locator: PayloadLocator::new(extraction_dir),
        }
    }

    /// Create a router over an existing locator.
    pub fn with_locator(env: E, locator: PayloadLocator) -> Self {
        Self { env, locator }
    }

    /// The platform environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The owned locator.
    #[must_use]
    pub fn locator(&self) -> &PayloadLocator {
        &self.locator
    }

    /// Dispatch one host call.
    pub fn dispatch(&self, call: HostCall) -> HostResult<CallReply> {
        tracing::debug!(call = %call, "dispatching host call");
        match call {
            HostCall::LibappPaths => Ok(CallReply::Paths(self.libapp_paths()?)),
            HostCall::AppInfo => Ok(CallReply::AppInfo(self.env.app_info()?)),
            HostCall::DeviceArchitecture => {
                Ok(CallReply::Architecture(self.env.device_architecture()))
            }
            HostCall::StoragePaths => Ok(CallReply::StoragePaths(self.env.storage_paths())),
            HostCall::ExtractPayload => {
                let descriptor = self.env.package_descriptor()?;
                let path = self.locator.extract(&descriptor)?;
                Ok(CallReply::Extracted(path_string(&path)))
            }
            HostCall::DebugPayloadLocations => {
                let descriptor = self.env.package_descriptor()?;
                Ok(CallReply::Debug(self.locator.debug_report(&descriptor)))
            }
        }
    }

    fn libapp_paths(&self) -> HostResult<Vec<String>> {
        let descriptor = self.env.package_descriptor()?;
        let resolved = self.locator.resolve(&descriptor);
        if resolved.source == ResolutionSource::Fallback {
            tracing::warn!(
                path = %resolved.path.display(),
                "serving constructed fallback path; payload was not found"
            );
        }
        // Loader-search identifier first, then the best absolute path
        Ok(vec![
            PAYLOAD_FILE.to_string(),
            path_string(&resolved.path),
        ])
    }
}

/// Typed reply for each host call.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CallReply {
    /// Ordered payload search paths.
    Paths(Vec<String>),
    /// Package metadata.
    AppInfo(AppInfo),
    /// Device architecture tag.
    Architecture(String),
    /// Application-private directories.
    StoragePaths(StoragePaths),
    /// Absolute path of the freshly extracted payload.
    Extracted(String),
    /// Diagnostic snapshot.
    Debug(DebugReport),
}

impl CallReply {
    /// Serialize the reply to the JSON value handed to the transport.
    pub fn to_json(&self) -> HostResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
#[path = "router/router_tests.rs"]
mod router_tests;
