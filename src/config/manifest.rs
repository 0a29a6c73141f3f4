//! Formula manifests
//!
//! A manifest replaces the built-in formula:
//!
//! ```kdl
//! package "askllm" {
//!     description "Ask an LLM from the terminal"
//!     homepage "https://github.com/askllm/askllm"
//!     version "1.0.0"
//!     binary "askllm"
//! }
//! artifact os="macos" arch="arm" url="https://.../askllm-{version}.zip" sha256="..."
//! ```

use super::get_first_string;
use crate::error::{InstallerError, Result};
use crate::formula::{ArtifactSpec, Formula, PackageDescriptor};
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<Formula> {
    let content = fs::read_to_string(path).map_err(|e| InstallerError::io(path, e))?;
    parse(&content).map_err(|e| match e {
        InstallerError::Config(msg) => {
            InstallerError::Config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

pub fn parse(content: &str) -> Result<Formula> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        InstallerError::Config(format!("KDL parsing error: {}", e))
    })?;

    let mut package = None;
    let mut artifacts = Vec::new();

    for node in doc.nodes() {
        match node.name().value() {
            "package" => {
                if package.is_some() {
                    return Err(InstallerError::Config(
                        "Manifest declares more than one package".to_string(),
                    ));
                }
                package = Some(parse_package(node)?);
            }
            "artifact" => artifacts.push(parse_artifact(node)?),
            other => {
                return Err(InstallerError::Config(format!(
                    "Unknown manifest node '{}'",
                    other
                )));
            }
        }
    }

    let package = package
        .ok_or_else(|| InstallerError::Config("Manifest has no package node".to_string()))?;
    if artifacts.is_empty() {
        return Err(InstallerError::Config(
            "Manifest has no artifact rows".to_string(),
        ));
    }

    Formula::new(package, &artifacts)
}

fn parse_package(node: &KdlNode) -> Result<PackageDescriptor> {
    let name = get_first_string(node)
        .ok_or_else(|| InstallerError::Config("package node needs a name".to_string()))?;

    let mut description = String::new();
    let mut homepage = String::new();
    let mut version = None;
    let mut binary = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            let value = get_first_string(child);
            match child.name().value() {
                "description" => description = value.unwrap_or_default(),
                "homepage" => homepage = value.unwrap_or_default(),
                "version" => version = value,
                "binary" => binary = value,
                other => {
                    return Err(InstallerError::Config(format!(
                        "Unknown package field '{}'. Valid: description, homepage, version, binary",
                        other
                    )));
                }
            }
        }
    }

    let version = version
        .ok_or_else(|| InstallerError::Config(format!("package '{}' has no version", name)))?;

    let descriptor = PackageDescriptor::new(name, description, homepage, version)?;
    match binary {
        Some(binary) => descriptor.with_binary(binary),
        None => Ok(descriptor),
    }
}

fn parse_artifact(node: &KdlNode) -> Result<ArtifactSpec> {
    let mut os = None;
    let mut arch = None;
    let mut url = None;
    let mut sha256 = None;

    for entry in node.entries() {
        let Some(key) = entry.name() else {
            return Err(InstallerError::Config(format!(
                "artifact row takes only key=value properties, got '{}'",
                entry.value()
            )));
        };
        let value = entry.value().as_string().map(str::to_string);
        match key.value() {
            "os" => os = value,
            "arch" => arch = value,
            "url" => url = value,
            "sha256" => sha256 = value,
            other => {
                return Err(InstallerError::Config(format!(
                    "Unknown artifact property '{}'. Valid: os, arch, url, sha256",
                    other
                )));
            }
        }
    }

    let missing = |field: &str| {
        InstallerError::Config(format!("artifact row is missing '{}'", field))
    };

    Ok(ArtifactSpec {
        os: os.ok_or_else(|| missing("os"))?,
        arch: arch.ok_or_else(|| missing("arch"))?,
        url: url.ok_or_else(|| missing("url"))?,
        sha256: sha256.ok_or_else(|| missing("sha256"))?,
    })
}
