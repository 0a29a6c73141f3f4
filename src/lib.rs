pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formula;
pub mod install;
pub mod platform;
pub mod project_identity;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run askllm-installer CLI entrypoint.
pub fn run_cli() {
    // 0. Colours default to auto until settings are read
    ui::init_colors(ui::ColorMode::Auto);

    // 1. Signal handling: the install sequence checks the flag between steps
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet || args.global.format.is_machine());
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(e.exit_code());
    }
}
