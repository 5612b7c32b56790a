//! Error types for payload location and extraction.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while locating or extracting the payload.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// No probed archive contained the expected entry name. Carries the
    /// outcome of every individual probe for diagnostics.
    #[error("payload entry {entry_name} not found in {} probed archive(s)", .probed.len())]
    EntryNotFound {
        entry_name: String,
        probed: Vec<ArchiveProbe>,
    },

    /// An archive could not be opened or enumerated.
    #[error("unreadable archive {}: {cause}", .path.display())]
    ArchiveUnreadable { path: PathBuf, cause: String },

    /// Output directory creation or file write failed.
    #[error("write failed for {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem permissions denied access to a candidate location.
    #[error("permission denied for {}: {source}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocatorError {
    /// The archive paths probed before an [`LocatorError::EntryNotFound`]
    /// was raised, in probe order. Empty for other variants.
    #[must_use]
    pub fn probed_paths(&self) -> Vec<&Path> {
        match self {
            Self::EntryNotFound { probed, .. } => {
                probed.iter().map(|probe| probe.path.as_path()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Outcome of probing one archive for the payload entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveProbe {
    /// The probed archive path.
    pub path: PathBuf,
    /// What the probe found.
    pub outcome: ProbeOutcome,
}

/// What probing a single archive established.
///
/// Probe failures are swallowed locally so the next candidate can be tried;
/// they surface only inside the aggregate [`LocatorError::EntryNotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The archive opened but did not contain the entry.
    EntryMissing,
    /// The archive could not be opened or enumerated.
    Unreadable(String),
}

/// Classify a write-side I/O failure, surfacing permission problems
/// distinctly.
pub(crate) fn write_failure(path: &Path, source: std::io::Error) -> LocatorError {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
        LocatorError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        }
    } else {
        LocatorError::WriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Classify a read-side archive failure, surfacing permission problems
/// distinctly.
pub(crate) fn archive_unreadable(path: &Path, source: std::io::Error) -> LocatorError {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
        LocatorError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        }
    } else {
        LocatorError::ArchiveUnreadable {
            path: path.to_path_buf(),
            cause: source.to_string(),
        }
    }
}
