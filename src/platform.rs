//! Platform identifiers
//!
//! A [`PlatformTarget`] is the `(os, arch)` pair used as the artifact table
//! key. Unknown identifiers are kept verbatim so lookups can report exactly
//! what was asked for.

use serde::Serialize;
use std::env;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
    MacOs,
    Linux,
    Other(String),
}

impl Os {
    /// Parse an OS identifier. Accepts Rust (`macos`), Go (`darwin`) and
    /// Homebrew spellings.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" | "mac" | "osx" => Os::MacOs,
            "linux" => Os::Linux,
            other => Os::Other(other.to_string()),
        }
    }

    pub fn current() -> Self {
        Self::parse(env::consts::OS)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Os::MacOs => "macos",
            Os::Linux => "linux",
            Os::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Os::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 64-bit Intel/AMD ("intel")
    X86_64,
    /// 64-bit ARM ("arm")
    Aarch64,
    Other(String),
}

impl Arch {
    /// Parse user or manifest input. Accepts the `intel`/`arm` labels.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "x86-64" | "amd64" | "x64" | "intel" => Arch::X86_64,
            "aarch64" | "arm64" | "arm" => Arch::Aarch64,
            other => Arch::Other(other.to_string()),
        }
    }

    pub fn current() -> Self {
        Self::from_host(env::consts::ARCH)
    }

    /// Map a `std::env::consts::ARCH` value. Exact names only: `"arm"` there
    /// means 32-bit ARM, not the `arm` label.
    pub fn from_host(value: &str) -> Self {
        match value {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            other => Arch::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
            Arch::Other(name) => name,
        }
    }

    /// Short label used in release asset names.
    pub fn label(&self) -> &str {
        match self {
            Arch::X86_64 => "intel",
            Arch::Aarch64 => "arm",
            Arch::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Arch::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformTarget {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformTarget {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    pub fn parse(os: &str, arch: &str) -> Self {
        Self::new(Os::parse(os), Arch::parse(arch))
    }

    /// The host this process runs on.
    pub fn current() -> Self {
        Self::new(Os::current(), Arch::current())
    }

    /// Host target with optional per-field overrides.
    pub fn detect_with(os: Option<&str>, arch: Option<&str>) -> Self {
        Self::new(
            os.map(Os::parse).unwrap_or_else(Os::current),
            arch.map(Arch::parse).unwrap_or_else(Arch::current),
        )
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os.as_str(), self.arch.as_str())
    }
}

impl Serialize for PlatformTarget {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
