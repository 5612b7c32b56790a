//! Archive probing and payload extraction.
//!
//! The [`ArchiveExtractor`] locates the payload entry inside one of possibly
//! several package archives and copies it out to a writable cache directory.

use crate::error::{ArchiveProbe, ProbeOutcome, archive_unreadable, write_failure};
use crate::{LocatorError, LocatorResult, PAYLOAD_FILE, PackageDescriptor};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extracts the payload entry from a package archive into a cache
/// directory.
#[derive(Debug, Clone)]
pub struct ArchiveExtractor {
    output_dir: PathBuf,
}

impl ArchiveExtractor {
    /// Create an extractor writing into the given cache directory.
    ///
    /// The directory is created lazily on the first extraction.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The fixed output location for the extracted payload, whether or not
    /// anything has been extracted yet.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(PAYLOAD_FILE)
    }

    /// Locate the payload entry and copy it out.
    ///
    /// Probes the primary archive, then each supplementary archive in
    /// listed order; the first exact-name match wins. A probe failure on an
    /// individual archive is swallowed and recorded so the next candidate
    /// can be tried; only exhaustion of all candidates surfaces an
    /// [`LocatorError::EntryNotFound`]. Extraction is fully re-run on every
    /// call; there is no partial-extraction resume.
    pub fn extract(&self, descriptor: &PackageDescriptor) -> LocatorResult<PathBuf> {
        let entry_name = descriptor.entry_name();
        let mut probed = Vec::new();

        for archive_path in descriptor.archive_paths() {
            match open_archive(archive_path) {
                Ok(mut archive) => {
                    if archive.index_for_name(&entry_name).is_some() {
                        tracing::debug!(
                            archive = %archive_path.display(),
                            entry = %entry_name,
                            "payload entry found"
                        );
                        return self.extract_entry(&mut archive, archive_path, &entry_name);
                    }
                    probed.push(ArchiveProbe {
                        path: archive_path.to_path_buf(),
                        outcome: ProbeOutcome::EntryMissing,
                    });
                }
                Err(err) => {
                    tracing::debug!(
                        archive = %archive_path.display(),
                        error = %err,
                        "skipping unreadable archive"
                    );
                    probed.push(ArchiveProbe {
                        path: archive_path.to_path_buf(),
                        outcome: ProbeOutcome::Unreadable(err.to_string()),
                    });
                }
            }
        }

        self.log_payload_members(descriptor);
        Err(LocatorError::EntryNotFound { entry_name, probed })
    }

    /// Copy the matched entry byte-for-byte to the fixed output filename,
    /// overwriting any existing file, and mark it executable.
    fn extract_entry(
        &self,
        archive: &mut ZipArchive<File>,
        archive_path: &Path,
        entry_name: &str,
    ) -> LocatorResult<PathBuf> {
        let contents = {
            let mut entry =
                archive
                    .by_name(entry_name)
                    .map_err(|e| LocatorError::ArchiveUnreadable {
                        path: archive_path.to_path_buf(),
                        cause: e.to_string(),
                    })?;

            let mut contents = Vec::new();
            entry
                .read_to_end(&mut contents)
                .map_err(|e| archive_unreadable(archive_path, e))?;
            contents
        };

        fs::create_dir_all(&self.output_dir).map_err(|e| write_failure(&self.output_dir, e))?;

        let output_path = self.output_path();
        fs::write(&output_path, &contents).map_err(|e| write_failure(&output_path, e))?;

        // The payload is mapped and executed by the host runtime's loader
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&output_path)
                .map_err(|e| write_failure(&output_path, e))?
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&output_path, perms)
                .map_err(|e| write_failure(&output_path, e))?;
        }

        tracing::info!(
            archive = %archive_path.display(),
            output = %output_path.display(),
            bytes = contents.len(),
            "payload extracted"
        );

        Ok(output_path)
    }

    /// Operator aid on exhaustion: list every member across the probed
    /// archives that looks like a native payload, so a tag mismatch is
    /// visible in the logs.
    fn log_payload_members(&self, descriptor: &PackageDescriptor) {
        for archive_path in descriptor.archive_paths() {
            let Ok(archive) = open_archive(archive_path) else {
                continue;
            };
            let members = payload_members(&archive);
            if !members.is_empty() {
                tracing::warn!(
                    archive = %archive_path.display(),
                    members = ?members,
                    "archive carries native payload members under other names"
                );
            }
        }
    }
}

/// Open a package archive, classifying open failures.
pub(crate) fn open_archive(path: &Path) -> LocatorResult<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| archive_unreadable(path, e))?;
    ZipArchive::new(file).map_err(|e| LocatorError::ArchiveUnreadable {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}

/// Member names matching the native payload directory/extension pattern.
pub(crate) fn payload_members(archive: &ZipArchive<File>) -> Vec<String> {
    (0..archive.len())
        .filter_map(|i| archive.name_for_index(i))
        .filter(|name| name.starts_with("lib/") && name.ends_with(".so"))
        .map(String::from)
        .collect()
}
