use crate::error::Result;
use crate::formula::{Formula, Sha256Digest};
use crate::install::{self, Fetcher, HttpFetcher, Installer};
use crate::platform::PlatformTarget;
use crate::ui as output;
use crate::utils::machine_output::{self, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub struct InstallOptions {
    pub target: PlatformTarget,
    pub bin_dir: PathBuf,
    pub skip_verify: bool,
    pub timeout: Duration,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct InstallReport {
    package: String,
    version: String,
    target: PlatformTarget,
    path: PathBuf,
    sha256: Sha256Digest,
    verified: Option<bool>,
}

pub fn run(formula: &Formula, options: InstallOptions) -> Result<()> {
    let fetcher = HttpFetcher::new(options.timeout)?;
    run_with(formula, options, fetcher)
}

/// resolve → install → verify. A failed smoke test is only a warning.
pub fn run_with<F: Fetcher>(formula: &Formula, options: InstallOptions, fetcher: F) -> Result<()> {
    let pkg = &formula.package;
    let entry = formula.resolve(&options.target)?;

    output::info(&format!(
        "Installing {} {} for {}",
        pkg.name, pkg.version, entry.target
    ));

    let installer = Installer::new(fetcher, pkg.binary.clone());
    let installed = installer.install(entry, &options.bin_dir)?;
    output::success(&format!("Installed {}", installed.path.display()));

    let mut warnings = Vec::new();
    let verified = if options.skip_verify {
        None
    } else {
        match install::smoke_test(&options.bin_dir, &pkg.binary) {
            Ok(version) => {
                output::success(&format!("Verified: {}", version));
                Some(true)
            }
            Err(e) => {
                output::warning(&format!("{} (install kept)", e));
                warnings.push(e.to_string());
                Some(false)
            }
        }
    };

    if options.format.is_machine() {
        let report = InstallReport {
            package: pkg.name.clone(),
            version: pkg.version.clone(),
            target: entry.target.clone(),
            path: installed.path,
            sha256: installed.sha256,
            verified,
        };
        return machine_output::emit_v1("install", report, warnings, options.format);
    }

    Ok(())
}
