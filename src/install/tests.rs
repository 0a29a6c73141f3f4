use super::*;
use crate::platform::PlatformTarget;
use std::io::{Cursor, Write};

const SCRIPT: &str = "#!/bin/sh\necho \"askllm 1.0.0\"\n";

struct StaticFetcher(Vec<u8>);

impl Fetcher for StaticFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

struct FailingFetcher;

impl Fetcher for FailingFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(InstallerError::Download(format!("HTTP 503 for {}", url)))
    }
}

fn zip_with(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default().unix_permissions(0o644);
    for (name, body) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn entry_for(bytes: &[u8]) -> ArtifactEntry {
    ArtifactEntry {
        target: PlatformTarget::parse("macos", "arm"),
        url: "https://example.com/askllm-macos-arm.zip".to_string(),
        sha256: Sha256Digest::of_bytes(bytes),
    }
}

fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn install_places_only_the_binary() {
    let archive = zip_with(&[("askllm", SCRIPT), ("LICENSE", "MIT")]);
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bin");

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    let installed = installer.install(&entry_for(&archive), &dest).unwrap();

    assert_eq!(installed.path, dest.join("askllm"));
    assert_eq!(installed.sha256, Sha256Digest::of_bytes(&archive));
    assert_eq!(dir_listing(&dest), vec!["askllm".to_string()]);
    assert_eq!(fs::read_to_string(dest.join("askllm")).unwrap(), SCRIPT);
}

#[cfg(unix)]
#[test]
fn installed_binary_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let archive = zip_with(&[("askllm", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    let installed = installer.install(&entry_for(&archive), tmp.path()).unwrap();

    let mode = fs::metadata(&installed.path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn checksum_mismatch_writes_nothing() {
    let archive = zip_with(&[("askllm", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bin");

    let mut entry = entry_for(&archive);
    entry.sha256 = Sha256Digest::of_bytes(b"something else");

    let installer = Installer::new(StaticFetcher(archive), "askllm");
    let err = installer.install(&entry, &dest).unwrap_err();

    assert!(matches!(err, InstallerError::ChecksumMismatch { .. }));
    assert!(!dest.exists());
}

#[test]
fn checksum_comparison_ignores_case() {
    let archive = zip_with(&[("askllm", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();

    let mut entry = entry_for(&archive);
    entry.sha256 = Sha256Digest::parse(&entry.sha256.as_str().to_uppercase()).unwrap();

    let installer = Installer::new(StaticFetcher(archive), "askllm");
    assert!(installer.install(&entry, tmp.path()).is_ok());
}

#[test]
fn missing_executable_is_extraction_error_and_cleans_staging() {
    let archive = zip_with(&[("other-tool", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bin");

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    let err = installer.install(&entry_for(&archive), &dest).unwrap_err();

    assert!(matches!(err, InstallerError::Extraction(_)));
    assert!(!dest.exists());
    assert!(dir_listing(tmp.path()).is_empty());
}

#[test]
fn corrupt_archive_with_matching_checksum_is_extraction_error() {
    let bytes = b"PK but not really".to_vec();
    let tmp = tempfile::tempdir().unwrap();

    let installer = Installer::new(StaticFetcher(bytes.clone()), "askllm");
    let err = installer.install(&entry_for(&bytes), tmp.path()).unwrap_err();

    assert!(matches!(err, InstallerError::Extraction(_)));
    assert!(dir_listing(tmp.path()).is_empty());
}

#[test]
fn failed_install_keeps_existing_dest_dir() {
    let archive = zip_with(&[("other-tool", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("keep.txt"), "x").unwrap();

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    let err = installer.install(&entry_for(&archive), tmp.path()).unwrap_err();

    assert!(matches!(err, InstallerError::Extraction(_)));
    assert_eq!(dir_listing(tmp.path()), vec!["keep.txt".to_string()]);
}

#[test]
fn failed_install_removes_created_parents() {
    let archive = zip_with(&[("other-tool", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("opt").join("bin");

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    assert!(installer.install(&entry_for(&archive), &dest).is_err());

    assert!(!tmp.path().join("opt").exists());
}

#[test]
fn download_failure_aborts_before_any_write() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bin");

    let installer = Installer::new(FailingFetcher, "askllm");
    let err = installer.install(&entry_for(b""), &dest).unwrap_err();

    assert!(matches!(err, InstallerError::Download(_)));
    assert!(!dest.exists());
}

#[test]
fn install_twice_matches_install_once() {
    let archive = zip_with(&[("askllm", SCRIPT)]);
    let entry = entry_for(&archive);
    let once = tempfile::tempdir().unwrap();
    let twice = tempfile::tempdir().unwrap();

    let installer = Installer::new(StaticFetcher(archive), "askllm");
    installer.install(&entry, once.path()).unwrap();
    installer.install(&entry, twice.path()).unwrap();
    installer.install(&entry, twice.path()).unwrap();

    assert_eq!(dir_listing(once.path()), dir_listing(twice.path()));
    assert_eq!(
        fs::read(once.path().join("askllm")).unwrap(),
        fs::read(twice.path().join("askllm")).unwrap()
    );
}

#[test]
fn reinstall_overwrites_existing_binary() {
    let archive = zip_with(&[("askllm", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("askllm"), "stale").unwrap();

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    installer.install(&entry_for(&archive), tmp.path()).unwrap();

    assert_eq!(fs::read_to_string(tmp.path().join("askllm")).unwrap(), SCRIPT);
}

#[test]
fn nested_binary_is_found() {
    let archive = zip_with(&[("askllm-1.0.0/bin/askllm", SCRIPT)]);
    let tmp = tempfile::tempdir().unwrap();

    let installer = Installer::new(StaticFetcher(archive.clone()), "askllm");
    installer.install(&entry_for(&archive), tmp.path()).unwrap();

    assert_eq!(dir_listing(tmp.path()), vec!["askllm".to_string()]);
}
