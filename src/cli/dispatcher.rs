//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command, PlatformArgs};
use crate::commands;
use crate::config::{self, Settings};
use crate::error::Result;
use crate::formula::Formula;
use crate::platform::PlatformTarget;
use crate::ui as output;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &args.command {
        return commands::completions::run(*shell);
    }

    let settings = Settings::load()?;
    output::init_colors(settings.color);
    let format = args.global.format;

    match &args.command {
        Command::Resolve { platform } => {
            let formula = load_formula(args, &settings)?;
            commands::resolve::run(&formula, &target_of(platform), format)
        }

        Command::Install {
            bin_dir,
            platform,
            skip_verify,
        } => {
            let formula = load_formula(args, &settings)?;
            commands::install::run(
                &formula,
                commands::install::InstallOptions {
                    target: target_of(platform),
                    bin_dir: settings.resolve_bin_dir(bin_dir.as_deref())?,
                    skip_verify: *skip_verify,
                    timeout: settings.timeout(),
                    format,
                },
            )
        }

        Command::Verify { bin_dir } => {
            let formula = load_formula(args, &settings)?;
            let bin_dir = settings.resolve_bin_dir(bin_dir.as_deref())?;
            commands::verify::run(&formula, &bin_dir, format)
        }

        Command::Info => {
            let formula = load_formula(args, &settings)?;
            commands::info::run(&formula, format)
        }

        Command::Completions { .. } => Ok(()),
    }
}

fn load_formula(args: &Cli, settings: &Settings) -> Result<Formula> {
    let manifest = settings.resolve_manifest(args.global.manifest.as_deref())?;
    config::load_formula(manifest.as_deref())
}

fn target_of(platform: &PlatformArgs) -> PlatformTarget {
    PlatformTarget::detect_with(platform.os.as_deref(), platform.arch.as_deref())
}
