//! Install sequence: download → verify checksum → extract → place.
//!
//! Nothing touches `dest_dir` until the checksum has passed. Extraction
//! happens in a staging directory inside `dest_dir` so the final step is a
//! same-filesystem rename. Any error drops the staging directory and leaves
//! `dest_dir` as it was, including removing it if this install created it.

pub mod download;
pub mod extract;
pub mod verify;

pub use download::{Fetcher, HttpFetcher};
pub use verify::{smoke_test, verify};

use crate::error::{InstallerError, Result};
use crate::formula::checksum::{self, Sha256Digest};
use crate::formula::ArtifactEntry;
use crate::project_identity;
use crate::ui as output;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const ARCHIVE_FILE_NAME: &str = "artifact.zip";
const UNPACK_DIR_NAME: &str = "unpacked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledBinary {
    pub path: PathBuf,
    /// Digest of the archive the binary came from
    pub sha256: Sha256Digest,
}

pub struct Installer<F: Fetcher> {
    fetcher: F,
    binary: String,
}

impl<F: Fetcher> Installer<F> {
    pub fn new(fetcher: F, binary: impl Into<String>) -> Self {
        Self {
            fetcher,
            binary: binary.into(),
        }
    }

    pub fn binary_path(&self, dest_dir: &Path) -> PathBuf {
        dest_dir.join(&self.binary)
    }

    pub fn install(&self, entry: &ArtifactEntry, dest_dir: &Path) -> Result<InstalledBinary> {
        output::verbose(&format!("Fetching {}", entry.url));
        let bytes = self.fetcher.fetch(&entry.url)?;
        check_interrupted()?;

        output::verbose(&format!("Downloaded {} bytes", bytes.len()));
        let sha256 = checksum::verify_bytes(&entry.url, &bytes, &entry.sha256)?;
        output::verbose(&format!("Checksum OK ({})", sha256));

        // Topmost directory this call creates; removed again on failure.
        let created_root = dest_dir
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
            .last()
            .map(Path::to_path_buf);
        fs::create_dir_all(dest_dir).map_err(|e| InstallerError::io(dest_dir, e))?;

        let placed = self.stage_and_place(&entry.url, &bytes, dest_dir);
        if placed.is_err()
            && let Some(root) = created_root
        {
            let _ = fs::remove_dir_all(&root);
        }

        Ok(InstalledBinary {
            path: placed?,
            sha256,
        })
    }

    /// Extract into a staging directory inside `dest_dir` and rename the
    /// executable into place.
    fn stage_and_place(&self, url: &str, bytes: &[u8], dest_dir: &Path) -> Result<PathBuf> {
        let staging = tempfile::Builder::new()
            .prefix(&project_identity::staging_prefix())
            .tempdir_in(dest_dir)
            .map_err(|e| InstallerError::io(dest_dir, e))?;

        let archive_path = staging.path().join(ARCHIVE_FILE_NAME);
        fs::write(&archive_path, bytes).map_err(|e| InstallerError::io(&archive_path, e))?;

        let unpack_dir = staging.path().join(UNPACK_DIR_NAME);
        let files = extract::extract_zip(&archive_path, &unpack_dir)?;
        output::verbose(&format!("Extracted {} files from {}", files.len(), url));
        let staged = extract::find_executable(&files, &self.binary)?;
        check_interrupted()?;

        make_executable(&staged.absolute_path)?;
        let target = self.binary_path(dest_dir);
        fs::rename(&staged.absolute_path, &target).map_err(|e| InstallerError::io(&target, e))?;
        output::verbose(&format!("Placed {}", target.display()));

        let staging_path = staging.path().to_path_buf();
        staging
            .close()
            .map_err(|e| InstallerError::io(staging_path, e))?;

        Ok(target)
    }

    pub fn verify(&self, dest_dir: &Path) -> bool {
        verify::verify(dest_dir, &self.binary)
    }
}

fn check_interrupted() -> Result<()> {
    if output::is_interrupted() {
        return Err(InstallerError::Interrupted);
    }
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| InstallerError::io(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests;
