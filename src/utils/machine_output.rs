use crate::error::Result;
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_machine(self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
    pub installer_version: String,
}

pub fn envelope<T>(command: &str, data: T, warnings: Vec<String>) -> MachineEnvelope<T>
where
    T: Serialize,
{
    MachineEnvelope {
        version: "v1".to_string(),
        command: command.to_string(),
        ok: true,
        data,
        warnings,
        meta: MachineMeta {
            generated_at: Utc::now().to_rfc3339(),
            installer_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

/// Print a v1 envelope. Text format prints nothing.
pub fn emit_v1<T>(command: &str, data: T, warnings: Vec<String>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
{
    let envelope = envelope(command, data, warnings);

    match format {
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&envelope)?;
            println!("{}", out);
        }
        OutputFormat::Yaml => {
            let out = serde_yml::to_string(&envelope)?;
            println!("{}", out);
        }
        OutputFormat::Text => {}
    }

    Ok(())
}
