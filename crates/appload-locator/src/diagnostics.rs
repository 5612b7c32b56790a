//! Operator-facing diagnostic snapshot of payload candidate locations.
//!
//! Assembled after a resolution failure to answer "where did it look, and
//! what was actually there". Read-only: capturing a report has no effect on
//! resolution, and per-location access failures are recorded inside the
//! report rather than aborting it.

use crate::extract::{open_archive, payload_members};
use crate::{ArchiveExtractor, PackageDescriptor};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::path::Path;

/// Structured snapshot of every known candidate location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    /// Architecture tag the resolution is looking for.
    pub architecture: String,
    /// The intra-archive entry name being probed.
    pub expected_entry: String,
    /// The loose-file candidate.
    pub loose_payload: LocationStatus,
    /// The extraction-cache output location.
    pub extraction_output: LocationStatus,
    /// `sha256:<hex>` fingerprint of the extracted payload, when present
    /// and readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fingerprint: Option<String>,
    /// One entry per probed archive, in probe order.
    pub archives: Vec<ArchiveStatus>,
}

/// Existence/readability/size of one filesystem candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStatus {
    pub path: String,
    pub exists: bool,
    pub readable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// What one archive contains, or why it could not be inspected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveStatus {
    pub path: String,
    pub openable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub contains_payload_entry: bool,
    /// Members matching the native payload directory/extension pattern.
    pub payload_members: Vec<String>,
}

impl LocationStatus {
    fn probe(path: &Path) -> Self {
        let metadata = fs::metadata(path).ok();
        Self {
            path: path.display().to_string(),
            exists: metadata.is_some(),
            readable: File::open(path).is_ok(),
            size_bytes: metadata.map(|m| m.len()),
        }
    }
}

impl DebugReport {
    /// Capture a snapshot for the descriptor against the extractor's cache
    /// directory.
    pub(crate) fn capture(descriptor: &PackageDescriptor, extractor: &ArchiveExtractor) -> Self {
        let entry_name = descriptor.entry_name();
        let output_path = extractor.output_path();

        let archives = descriptor
            .archive_paths()
            .map(|path| ArchiveStatus::probe(path, &entry_name))
            .collect();

        let extraction_fingerprint = fs::read(&output_path)
            .ok()
            .map(|contents| format!("sha256:{}", compute_sha256(&contents)));

        Self {
            architecture: descriptor.target_architecture.clone(),
            expected_entry: entry_name,
            loose_payload: LocationStatus::probe(&descriptor.loose_payload_path()),
            extraction_output: LocationStatus::probe(&output_path),
            extraction_fingerprint,
            archives,
        }
    }
}

impl ArchiveStatus {
    fn probe(path: &Path, entry_name: &str) -> Self {
        match open_archive(path) {
            Ok(archive) => Self {
                path: path.display().to_string(),
                openable: true,
                error: None,
                contains_payload_entry: archive.index_for_name(entry_name).is_some(),
                payload_members: payload_members(&archive),
            },
            Err(err) => Self {
                path: path.display().to_string(),
                openable: false,
                error: Some(err.to_string()),
                contains_payload_entry: false,
                payload_members: Vec::new(),
            },
        }
    }
}

fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
