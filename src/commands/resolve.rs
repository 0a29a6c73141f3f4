use crate::error::Result;
use crate::formula::{ArtifactEntry, Formula};
use crate::platform::PlatformTarget;
use crate::ui as output;
use crate::utils::machine_output::{self, OutputFormat};

pub fn run(formula: &Formula, target: &PlatformTarget, format: OutputFormat) -> Result<()> {
    let entry = formula.resolve(target)?;

    if format.is_machine() {
        return machine_output::emit_v1("resolve", entry, vec![], format);
    }

    print_entry(formula, entry);
    Ok(())
}

fn print_entry(formula: &Formula, entry: &ArtifactEntry) {
    output::header(&format!(
        "{} {}",
        formula.package.name, formula.package.version
    ));
    output::keyval("Target", &entry.target.to_string());
    output::keyval("URL", &entry.url);
    output::keyval("SHA-256", entry.sha256.as_str());
}
