use crate::error::{InstallerError, Result};
use std::path::Path;
use std::process::Command;

pub const VERSION_FLAG: &str = "--version";

/// Run `<dest_dir>/<binary> --version`; true iff it spawns and exits 0.
pub fn verify(dest_dir: &Path, binary: &str) -> bool {
    smoke_test(dest_dir, binary).is_ok()
}

/// Like [`verify`], but returns the first line of output or the reason it
/// failed.
pub fn smoke_test(dest_dir: &Path, binary: &str) -> Result<String> {
    let path = dest_dir.join(binary);
    let output = Command::new(&path)
        .arg(VERSION_FLAG)
        .output()
        .map_err(|e| {
            InstallerError::Verification(format!(
                "could not run {} {}: {}",
                path.display(),
                VERSION_FLAG,
                e
            ))
        })?;

    if !output.status.success() {
        return Err(InstallerError::Verification(format!(
            "{} {} exited with {}",
            path.display(),
            VERSION_FLAG,
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
}
