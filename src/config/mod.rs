pub mod manifest;
pub mod settings;

pub use settings::Settings;

use crate::error::Result;
use crate::formula::Formula;
use crate::ui as output;
use kdl::KdlNode;
use std::path::Path;

/// Manifest formula when one is configured, otherwise the built-in one.
pub fn load_formula(manifest: Option<&Path>) -> Result<Formula> {
    match manifest {
        Some(path) => {
            output::verbose(&format!("Loading manifest {}", path.display()));
            manifest::load(path)
        }
        None => Formula::builtin(),
    }
}

/// Get first string value from a KDL node
pub(crate) fn get_first_string(node: &KdlNode) -> Option<String> {
    if let Some(entry) = node.entries().first()
        && let Some(val) = entry.value().as_string()
    {
        return Some(val.to_string());
    }
    None
}
