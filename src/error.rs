use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Unsupported platform: no artifact for {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Checksum mismatch for {url} (expected {expected}, got {actual})")]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// Table or manifest entry carries a digest that is not 64 hex digits
    #[error("Malformed checksum '{value}': {reason}")]
    MalformedChecksum { value: String, reason: String },

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Post-install verification failed: {0}")]
    Verification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl InstallerError {
    /// Attach the offending path to an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstallerError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Process exit code reported to the invoking host.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallerError::UnsupportedPlatform { .. } => 2,
            InstallerError::Download(_) => 3,
            InstallerError::ChecksumMismatch { .. } => 4,
            InstallerError::Extraction(_) => 5,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallerError>;
