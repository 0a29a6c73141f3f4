//! Artifact table
//!
//! Data-driven dispatch from `(os, arch)` to a download URL and pinned
//! checksum. Adding a platform means adding a row, never a code path.

use super::checksum::Sha256Digest;
use crate::error::{InstallerError, Result};
use crate::platform::{Arch, Os, PlatformTarget};
use serde::Serialize;
use std::collections::HashSet;

/// Unvalidated table row, as written in source or in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub os: String,
    pub arch: String,
    /// May contain `{version}`
    pub url: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    pub target: PlatformTarget,
    pub url: String,
    pub sha256: Sha256Digest,
}

#[derive(Debug, Clone, Default)]
pub struct ArtifactTable {
    entries: Vec<ArtifactEntry>,
}

impl ArtifactTable {
    /// Validate every row up front. Malformed checksums, unknown
    /// identifiers and duplicate targets all fail the whole table.
    pub fn build(specs: &[ArtifactSpec], version: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(specs.len());

        for spec in specs {
            let target = PlatformTarget::new(Os::parse(&spec.os), Arch::parse(&spec.arch));
            if !target.os.is_known() || !target.arch.is_known() {
                return Err(InstallerError::Config(format!(
                    "Artifact row uses unknown platform '{}'",
                    target
                )));
            }

            if !seen.insert(target.clone()) {
                return Err(InstallerError::Config(format!(
                    "Duplicate artifact row for {}",
                    target
                )));
            }

            let url = spec.url.replace("{version}", version);
            validate_url(&url)?;

            let sha256 = Sha256Digest::parse(&spec.sha256)?;

            entries.push(ArtifactEntry {
                target,
                url,
                sha256,
            });
        }

        Ok(Self { entries })
    }

    /// Pure lookup, no fallback between architectures.
    pub fn resolve(&self, target: &PlatformTarget) -> Result<&ArtifactEntry> {
        self.entries
            .iter()
            .find(|entry| &entry.target == target)
            .ok_or_else(|| InstallerError::UnsupportedPlatform {
                os: target.os.as_str().to_string(),
                arch: target.arch.as_str().to_string(),
            })
    }

    pub fn supports(&self, target: &PlatformTarget) -> bool {
        self.resolve(target).is_ok()
    }

    pub fn entries(&self) -> &[ArtifactEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        return Ok(());
    }
    Err(InstallerError::Config(format!(
        "Artifact URL must be http(s): '{}'",
        url
    )))
}
