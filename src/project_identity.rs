//! Central project identity contract.
//!
//! Runtime identity values live here so renames touch one file.

pub const DISPLAY_NAME: &str = "askllm installer";
pub const BINARY_NAME: &str = "askllm-installer";
pub const STABLE_PROJECT_ID: &str = "askllm-installer";
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORG: &str = "askllm";
pub const ENV_PREFIX: &str = "ASKLLM_INSTALLER";
pub const SETTINGS_FILE_NAME: &str = "settings.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn user_agent() -> String {
    format!("{}/{}", BINARY_NAME, env!("CARGO_PKG_VERSION"))
}

/// Prefix of the staging directory created next to the installed binary.
pub fn staging_prefix() -> String {
    format!(".{}-staging-", STABLE_PROJECT_ID)
}
