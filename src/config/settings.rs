//! Settings Module
//!
//! Reads `settings.kdl` from the config directory:
//!
//! ```kdl
//! bin-dir "~/.local/bin"
//! timeout-secs 30
//! color "auto"
//! manifest "~/.config/askllm-installer/askllm.kdl"
//! ```

use super::get_first_string;
use crate::error::{InstallerError, Result};
use crate::install::download::DEFAULT_TIMEOUT_SECS;
use crate::project_identity;
use crate::ui::ColorMode;
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const VALID_KEYS: &[&str] = &["bin-dir", "timeout-secs", "color", "manifest"];

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bin_dir: Option<PathBuf>,
    pub timeout_secs: u64,
    pub color: ColorMode,
    pub manifest: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bin_dir: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            color: ColorMode::Auto,
            manifest: None,
        }
    }
}

impl Settings {
    /// Load settings from file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let settings_file = paths::settings_file()?;
        if !settings_file.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&settings_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| InstallerError::io(path, e))?;
        Self::parse(&content).map_err(|e| match e {
            InstallerError::Config(msg) => {
                InstallerError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
            InstallerError::Config(format!("KDL parsing error: {}", e))
        })?;

        let mut settings = Self::default();
        for node in doc.nodes() {
            let key = node.name().value();
            match key {
                "bin-dir" => settings.bin_dir = Some(PathBuf::from(require_string(node)?)),
                "manifest" => settings.manifest = Some(PathBuf::from(require_string(node)?)),
                "timeout-secs" => settings.timeout_secs = parse_timeout(node)?,
                "color" => {
                    let value = require_string(node)?;
                    settings.color = ColorMode::parse(&value).ok_or_else(|| {
                        InstallerError::Config(format!(
                            "Invalid value for 'color': '{}'. Valid: auto, always, never",
                            value
                        ))
                    })?;
                }
                _ => {
                    return Err(InstallerError::Config(format!(
                        "Unknown setting: '{}'. Valid settings: {}",
                        key,
                        VALID_KEYS.join(", ")
                    )));
                }
            }
        }

        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Flag, then `ASKLLM_INSTALLER_BIN_DIR`, then the `bin-dir` setting.
    pub fn resolve_bin_dir(&self, flag: Option<&Path>) -> Result<PathBuf> {
        let env_value = env::var_os(project_identity::env_key("BIN_DIR")).map(PathBuf::from);
        let chosen = flag
            .map(Path::to_path_buf)
            .or(env_value)
            .or_else(|| self.bin_dir.clone())
            .ok_or_else(|| {
                InstallerError::Config(format!(
                    "No binary directory given. Pass --bin-dir, set {} or add `bin-dir` to {}",
                    project_identity::env_key("BIN_DIR"),
                    project_identity::SETTINGS_FILE_NAME
                ))
            })?;
        paths::expand_home(&chosen)
    }

    pub fn resolve_manifest(&self, flag: Option<&Path>) -> Result<Option<PathBuf>> {
        match flag.map(Path::to_path_buf).or_else(|| self.manifest.clone()) {
            Some(path) => Ok(Some(paths::expand_home(&path)?)),
            None => Ok(None),
        }
    }
}

fn require_string(node: &KdlNode) -> Result<String> {
    get_first_string(node).ok_or_else(|| {
        InstallerError::Config(format!(
            "Setting '{}' expects a string value",
            node.name().value()
        ))
    })
}

fn parse_timeout(node: &KdlNode) -> Result<u64> {
    let invalid = || {
        InstallerError::Config(
            "Invalid value for 'timeout-secs': expected a positive integer".to_string(),
        )
    };

    let entry = node.entries().first().ok_or_else(invalid)?;
    let secs = match entry.value().as_integer() {
        Some(n) => u64::try_from(n).map_err(|_| invalid())?,
        None => entry
            .value()
            .as_string()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .ok_or_else(invalid)?,
    };

    if secs == 0 {
        return Err(invalid());
    }
    Ok(secs)
}
