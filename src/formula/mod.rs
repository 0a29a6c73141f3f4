//! Formula: package metadata plus its artifact table.

pub mod checksum;
pub mod table;

pub use checksum::Sha256Digest;
pub use table::{ArtifactEntry, ArtifactSpec, ArtifactTable};

use crate::error::{InstallerError, Result};
use crate::platform::PlatformTarget;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:[-+][0-9A-Za-z.+-]+)?$").expect("semver pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub version: String,
    /// Executable name inside the archive
    pub binary: String,
}

impl PackageDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        homepage: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let version = version.into();

        if name.trim().is_empty() {
            return Err(InstallerError::Config(
                "Package name cannot be empty".to_string(),
            ));
        }
        validate_version(&version)?;

        Ok(Self {
            binary: name.clone(),
            name,
            description: description.into(),
            homepage: homepage.into(),
            version,
        })
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Result<Self> {
        let binary = binary.into();
        if binary.is_empty() || binary.contains(['/', '\\']) {
            return Err(InstallerError::Config(format!(
                "Invalid binary name '{}'",
                binary
            )));
        }
        self.binary = binary;
        Ok(self)
    }
}

pub fn validate_version(version: &str) -> Result<()> {
    if SEMVER.is_match(version) {
        return Ok(());
    }
    Err(InstallerError::Config(format!(
        "Invalid version '{}'. Use semantic version like 1.2.0",
        version
    )))
}

#[derive(Debug, Clone)]
pub struct Formula {
    pub package: PackageDescriptor,
    pub table: ArtifactTable,
}

impl Formula {
    pub fn new(package: PackageDescriptor, specs: &[ArtifactSpec]) -> Result<Self> {
        let table = ArtifactTable::build(specs, &package.version)?;
        Ok(Self { package, table })
    }

    /// The pinned askllm release this installer ships with.
    pub fn builtin() -> Result<Self> {
        let package = PackageDescriptor::new(
            "askllm",
            "Ask an LLM from the terminal and stream the answer",
            "https://github.com/askllm/askllm",
            "1.0.0",
        )?;

        // Linux rows are added once release archives exist.
        let specs: Vec<ArtifactSpec> = BUILTIN_ARTIFACTS
            .iter()
            .map(|(os, arch, url, sha256)| ArtifactSpec {
                os: os.to_string(),
                arch: arch.to_string(),
                url: url.to_string(),
                sha256: sha256.to_string(),
            })
            .collect();

        Self::new(package, &specs)
    }

    pub fn resolve(&self, target: &PlatformTarget) -> Result<&ArtifactEntry> {
        self.table.resolve(target)
    }
}

// Placeholder rows: no askllm releases are published at these URLs yet and the
// digests are not of real archives. Use `--manifest` for a working install.
const BUILTIN_ARTIFACTS: &[(&str, &str, &str, &str)] = &[
    (
        "macos",
        "intel",
        "https://github.com/askllm/askllm/releases/download/v{version}/askllm-macos-intel.zip",
        "fa8c6ea4da98eac989610497482cfb3faa681e644c5a75401053fae8186a72de",
    ),
    (
        "macos",
        "arm",
        "https://github.com/askllm/askllm/releases/download/v{version}/askllm-macos-arm.zip",
        "ccc20d5a5dc3e3cef5f5663cdf2a6fa33d2d3a42b26971dbf89920d0a549237e",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    #[test]
    fn builtin_covers_both_macos_arches() {
        let formula = Formula::builtin().unwrap();
        for arch in [Arch::X86_64, Arch::Aarch64] {
            let entry = formula
                .resolve(&PlatformTarget::new(Os::MacOs, arch))
                .unwrap();
            assert!(!entry.url.is_empty());
            assert!(entry.url.contains("v1.0.0"));
            assert_eq!(entry.sha256.as_str().len(), 64);
        }
    }

    #[test]
    fn builtin_has_no_linux_rows() {
        let formula = Formula::builtin().unwrap();
        let err = formula
            .resolve(&PlatformTarget::parse("linux", "x86_64"))
            .unwrap_err();
        assert!(matches!(err, InstallerError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn builtin_rejects_32_bit_mac() {
        let formula = Formula::builtin().unwrap();
        assert!(formula.resolve(&PlatformTarget::parse("macos", "i386")).is_err());
    }

    #[test]
    fn version_must_be_semantic() {
        assert!(validate_version("1.0.0").is_ok());
        assert!(validate_version("2.1.0-rc.1").is_ok());
        assert!(validate_version("1.0").is_err());
        assert!(validate_version("latest").is_err());
    }

    #[test]
    fn binary_defaults_to_name_and_rejects_paths() {
        let pkg = PackageDescriptor::new("tool", "d", "h", "0.1.0").unwrap();
        assert_eq!(pkg.binary, "tool");
        assert!(pkg.clone().with_binary("bin/tool").is_err());
        assert_eq!(pkg.with_binary("tool-cli").unwrap().binary, "tool-cli");
    }
}
