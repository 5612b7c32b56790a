//! Payload path resolution.
//!
//! The [`PayloadLocator`] ties together the loose-file probe, the
//! [`ArchiveExtractor`], and the [`ResolutionCache`] into the single
//! resolution sequence the host runtime drives.

use crate::diagnostics::DebugReport;
use crate::{ArchiveExtractor, LocatorResult, PackageDescriptor, ResolutionCache};
use std::path::PathBuf;

/// Which branch of the resolution sequence produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A previously resolved path, re-validated on disk.
    Cache,
    /// The payload was already unpacked by the platform installer.
    LooseFile,
    /// The payload was extracted from a package archive.
    Extracted,
    /// Nothing was found; this is the constructed loose-file path, known
    /// not to exist. Callers treat it as a last-resort input to a loading
    /// mechanism that may itself retry.
    Fallback,
}

/// A resolved payload location with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayload {
    /// Absolute payload path.
    pub path: PathBuf,
    /// Which resolution branch produced it.
    pub source: ResolutionSource,
}

/// Resolves the payload location for a package, with caching.
///
/// Resolution order, short-circuiting on first success:
///
/// 1. cached path, re-validated on disk
/// 2. loose file in the descriptor's loose-file directory
/// 3. extraction from the package archives
/// 4. the constructed loose-file path as a fallback (never fails)
///
/// Only the explicit [`extract`](PayloadLocator::extract) operation can
/// return an error; [`resolve`](PayloadLocator::resolve) always produces a
/// path.
#[derive(Debug)]
pub struct PayloadLocator {
    extractor: ArchiveExtractor,
    cache: ResolutionCache,
}

impl PayloadLocator {
    /// Create a locator extracting into the given cache directory.
    pub fn new(extraction_dir: impl Into<PathBuf>) -> Self {
        Self {
            extractor: ArchiveExtractor::new(extraction_dir),
            cache: ResolutionCache::new(),
        }
    }

    /// Resolve the payload path for the descriptor. Infallible: on total
    /// failure the constructed loose-file path is returned with
    /// [`ResolutionSource::Fallback`] provenance.
    pub fn resolve(&self, descriptor: &PackageDescriptor) -> ResolvedPayload {
        if let Some(path) = self.cache.get() {
            tracing::debug!(path = %path.display(), "resolved payload from cache");
            return ResolvedPayload {
                path,
                source: ResolutionSource::Cache,
            };
        }

        let loose = descriptor.loose_payload_path();
        if loose.is_file() {
            tracing::debug!(path = %loose.display(), "resolved loose payload");
            self.cache.set(loose.clone());
            return ResolvedPayload {
                path: loose,
                source: ResolutionSource::LooseFile,
            };
        }

        match self.extractor.extract(descriptor) {
            Ok(path) => {
                self.cache.set(path.clone());
                ResolvedPayload {
                    path,
                    source: ResolutionSource::Extracted,
                }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    fallback = %loose.display(),
                    "payload not resolvable; returning constructed loose path"
                );
                ResolvedPayload {
                    path: loose,
                    source: ResolutionSource::Fallback,
                }
            }
        }
    }

    /// Extract the payload now, bypassing the loose-file probe. Populates
    /// the cache on success so a following [`resolve`](Self::resolve) is a
    /// hit.
    pub fn extract(&self, descriptor: &PackageDescriptor) -> LocatorResult<PathBuf> {
        let path = self.extractor.extract(descriptor)?;
        self.cache.set(path.clone());
        Ok(path)
    }

    /// Assemble the operator-facing diagnostic snapshot. Read-only; has no
    /// effect on resolution.
    #[must_use]
    pub fn debug_report(&self, descriptor: &PackageDescriptor) -> DebugReport {
        DebugReport::capture(descriptor, &self.extractor)
    }

    /// The fixed extraction output location.
    #[must_use]
    pub fn extraction_output_path(&self) -> PathBuf {
        self.extractor.output_path()
    }
}
