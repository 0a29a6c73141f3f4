#![allow(dead_code)]

use askllm_installer::formula::Sha256Digest;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

pub const VERSION_SCRIPT: &str = "#!/bin/sh\necho \"askllm 1.0.0\"\n";

pub fn zip_with(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default().unix_permissions(0o755);
    for (name, body) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn sha256_of(bytes: &[u8]) -> String {
    Sha256Digest::of_bytes(bytes).to_string()
}

/// Manifest with a single macos/arm row.
pub fn manifest_text(url: &str, sha256: &str) -> String {
    format!(
        r#"package "askllm" {{
    description "Ask an LLM from the terminal"
    homepage "https://github.com/askllm/askllm"
    version "1.0.0"
}}
artifact os="macos" arch="arm" url="{}" sha256="{}"
"#,
        url, sha256
    )
}

pub fn write_manifest(dir: &Path, url: &str, sha256: &str) -> PathBuf {
    let path = dir.join("askllm.kdl");
    fs::write(&path, manifest_text(url, sha256)).unwrap();
    path
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return vec![];
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
