//! Package metadata supplied by the host platform at resolution time.

use crate::{ARCHIVE_LIB_DIR, Architecture, PAYLOAD_FILE};
use std::path::{Path, PathBuf};

/// Immutable description of the installed application package.
///
/// Constructed per-call from host platform queries; cheap enough that no
/// caching is warranted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Path to the main package archive.
    pub primary_archive_path: PathBuf,
    /// Additional archive paths (platform "split" packages), probed in
    /// listed order after the primary.
    pub supplementary_archive_paths: Vec<PathBuf>,
    /// Directory where the platform may have already unpacked native
    /// payloads.
    pub loose_file_directory: PathBuf,
    /// Architecture tag selecting the payload entry. Used verbatim as a
    /// path segment; never validated against a known set.
    pub target_architecture: String,
}

impl PackageDescriptor {
    /// Create a descriptor with no supplementary archives.
    pub fn new(
        primary_archive_path: impl Into<PathBuf>,
        loose_file_directory: impl Into<PathBuf>,
        target_architecture: impl Into<String>,
    ) -> Self {
        Self {
            primary_archive_path: primary_archive_path.into(),
            supplementary_archive_paths: Vec::new(),
            loose_file_directory: loose_file_directory.into(),
            target_architecture: target_architecture.into(),
        }
    }

    /// Create a descriptor for the detected device architecture.
    pub fn for_architecture(
        primary_archive_path: impl Into<PathBuf>,
        loose_file_directory: impl Into<PathBuf>,
        architecture: Architecture,
    ) -> Self {
        Self::new(
            primary_archive_path,
            loose_file_directory,
            architecture.as_str(),
        )
    }

    /// Set the supplementary archive paths.
    #[must_use]
    pub fn with_supplementary_archives(
        mut self,
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        self.supplementary_archive_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// The expected intra-archive entry name for the payload,
    /// e.g. `lib/arm64-v8a/libapp.so`.
    #[must_use]
    pub fn entry_name(&self) -> String {
        format!(
            "{ARCHIVE_LIB_DIR}/{}/{PAYLOAD_FILE}",
            self.target_architecture
        )
    }

    /// The loose-file location of the payload, whether or not it exists.
    #[must_use]
    pub fn loose_payload_path(&self) -> PathBuf {
        self.loose_file_directory.join(PAYLOAD_FILE)
    }

    /// All archive paths in probe order: primary first, then supplementary
    /// archives in listed order.
    pub fn archive_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.primary_archive_path.as_path())
            .chain(self.supplementary_archive_paths.iter().map(PathBuf::as_path))
    }
}
