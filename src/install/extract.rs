//! Zip extraction into the staging directory.

use crate::error::{InstallerError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

#[derive(Debug, Clone)]
pub struct ExtractedFile {
    /// Path relative to extraction root
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
}

/// Extract every regular file. Entries escaping `dest_dir` are skipped.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<Vec<ExtractedFile>> {
    let file = File::open(archive_path).map_err(|e| InstallerError::io(archive_path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| InstallerError::Extraction(e.to_string()))?;

    fs::create_dir_all(dest_dir).map_err(|e| InstallerError::io(dest_dir, e))?;
    let mut extracted = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| InstallerError::Extraction(e.to_string()))?;
        let relative_path = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => continue,
        };

        let absolute_path = dest_dir.join(&relative_path);
        if entry.is_dir() {
            fs::create_dir_all(&absolute_path)
                .map_err(|e| InstallerError::io(&absolute_path, e))?;
            continue;
        }

        if let Some(parent) = absolute_path.parent() {
            fs::create_dir_all(parent).map_err(|e| InstallerError::io(parent, e))?;
        }

        let mut out =
            File::create(&absolute_path).map_err(|e| InstallerError::io(&absolute_path, e))?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| InstallerError::Extraction(format!("{}: {}", relative_path.display(), e)))?;

        extracted.push(ExtractedFile {
            relative_path,
            absolute_path,
        });
    }

    Ok(extracted)
}

/// Locate `name` among the extracted files. A match at the archive root
/// wins; otherwise the shallowest nested match is used. Two matches at the
/// shallowest depth are an error.
pub fn find_executable<'a>(files: &'a [ExtractedFile], name: &str) -> Result<&'a ExtractedFile> {
    let depth = |f: &ExtractedFile| f.relative_path.components().count();
    let matches: Vec<&ExtractedFile> = files
        .iter()
        .filter(|f| f.relative_path.file_name().and_then(|n| n.to_str()) == Some(name))
        .collect();

    let Some(shallowest) = matches.iter().map(|f| depth(*f)).min() else {
        return Err(InstallerError::Extraction(format!(
            "Archive does not contain executable '{}'",
            name
        )));
    };

    let mut candidates = matches.into_iter().filter(|f| depth(*f) == shallowest);
    match (candidates.next(), candidates.next()) {
        (Some(found), None) => Ok(found),
        (Some(first), Some(second)) => Err(InstallerError::Extraction(format!(
            "Archive contains more than one '{}': {} and {}",
            name,
            first.relative_path.display(),
            second.relative_path.display()
        ))),
        (None, _) => Err(InstallerError::Extraction(format!(
            "Archive does not contain executable '{}'",
            name
        ))),
    }
}
