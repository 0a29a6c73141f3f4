use crate::utils::machine_output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "askllm-installer",
    about = "Install prebuilt askllm binaries",
    long_about = "Platform-aware installer for prebuilt askllm binaries: resolve the artifact for this OS and CPU, download it, verify its pinned SHA-256, and place the executable",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Use a KDL manifest instead of the built-in formula
    #[arg(long, value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the artifact URL and checksum for a platform
    Resolve {
        #[command(flatten)]
        platform: PlatformArgs,
    },

    /// Download, verify and install the binary
    Install {
        /// Directory that receives the executable
        #[arg(long, value_name = "DIR")]
        bin_dir: Option<PathBuf>,

        #[command(flatten)]
        platform: PlatformArgs,

        /// Skip the `--version` smoke test after installing
        #[arg(long)]
        skip_verify: bool,
    },

    /// Run the installed binary with --version
    Verify {
        /// Directory holding the executable
        #[arg(long, value_name = "DIR")]
        bin_dir: Option<PathBuf>,
    },

    /// Show package metadata and supported platforms
    Info,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PlatformArgs {
    /// Operating system (defaults to the running host)
    #[arg(long, value_name = "OS", help_heading = "Targeting")]
    pub os: Option<String>,

    /// CPU architecture (defaults to the running host)
    #[arg(long, value_name = "ARCH", help_heading = "Targeting")]
    pub arch: Option<String>,
}
