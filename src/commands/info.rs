use crate::error::Result;
use crate::formula::{Formula, PackageDescriptor};
use crate::platform::PlatformTarget;
use crate::ui as output;
use crate::utils::machine_output::{self, OutputFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    package: &'a PackageDescriptor,
    platforms: Vec<String>,
    host: String,
    host_supported: bool,
}

pub fn run(formula: &Formula, format: OutputFormat) -> Result<()> {
    let host = PlatformTarget::current();
    let report = InfoReport {
        package: &formula.package,
        platforms: formula
            .table
            .entries()
            .iter()
            .map(|entry| entry.target.to_string())
            .collect(),
        host_supported: formula.table.supports(&host),
        host: host.to_string(),
    };

    if format.is_machine() {
        return machine_output::emit_v1("info", report, vec![], format);
    }

    let pkg = report.package;
    output::header(&format!("{} {}", pkg.name, pkg.version));
    if !pkg.description.is_empty() {
        output::indent(&pkg.description, 1);
    }
    if !pkg.homepage.is_empty() {
        output::keyval("Homepage", &pkg.homepage);
    }
    output::keyval("Binary", &pkg.binary);
    output::keyval("Platforms", &report.platforms.join(", "));

    if report.host_supported {
        output::success(&format!("This host ({}) is supported", report.host));
    } else {
        output::warning(&format!("This host ({}) has no artifact", report.host));
    }

    Ok(())
}
