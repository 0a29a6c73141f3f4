use crate::error::Result;
use crate::formula::Formula;
use crate::install;
use crate::ui as output;
use crate::utils::machine_output::{self, OutputFormat};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct VerifyReport {
    binary: String,
    version: String,
}

/// Unlike `install`, a failed smoke test here is an error.
pub fn run(formula: &Formula, bin_dir: &Path, format: OutputFormat) -> Result<()> {
    let binary = &formula.package.binary;
    let version = install::smoke_test(bin_dir, binary)?;

    if format.is_machine() {
        let report = VerifyReport {
            binary: bin_dir.join(binary).display().to_string(),
            version,
        };
        return machine_output::emit_v1("verify", report, vec![], format);
    }

    output::success(&format!("{} responds to --version: {}", binary, version));
    Ok(())
}
