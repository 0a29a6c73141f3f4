use crate::error::{InstallerError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::env;
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new().ok_or_else(|| {
        InstallerError::Config("Could not determine user home directory".to_string())
    })?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| InstallerError::Config(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

/// Config directory. `ASKLLM_INSTALLER_CONFIG_DIR` overrides the platform
/// default.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(project_identity::env_key("CONFIG_DIR")) {
        return Ok(PathBuf::from(dir));
    }

    let proj = ProjectDirs::from(
        project_identity::PROJECT_QUALIFIER,
        project_identity::PROJECT_ORG,
        project_identity::STABLE_PROJECT_ID,
    )
    .ok_or_else(|| InstallerError::Config("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_NAME))
}
