//! ocisweep - bulk-stop running OCI resources across regions and compartments

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod observer;
mod output;

use commands::*;

/// Exit codes for the CLI
#[derive(Debug, Clone, Copy)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    OciUnavailable = 20,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Stop every running OCI resource of a type across all subscribed regions
#[derive(Parser)]
#[command(name = "ocisweep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Stop all running resources of one type in the listed compartments,
    /// in every subscribed region
    Stop {
        /// Resource type to stop (see `ocisweep types`)
        resource_type: String,

        /// File with compartment OCIDs, one per row in the first column
        compartments_file: PathBuf,

        /// OCI config profile to authenticate with
        #[arg(short, long, env = "OCISWEEP_PROFILE")]
        profile: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        assume_yes: bool,
    },

    /// List supported resource types
    Types,

    /// Check system requirements
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Set up output formatting
    let ctx = output::OutputContext::new(cli.json, cli.no_color, cli.quiet);

    let result = run_command(cli.command, &ctx);

    match result {
        Ok(code) => std::process::exit(code.into()),
        Err(e) => {
            ctx.error(&format!("{:#}", e));
            std::process::exit(ExitCode::GeneralError.into());
        }
    }
}

fn run_command(command: Commands, ctx: &output::OutputContext) -> Result<ExitCode> {
    match command {
        Commands::Stop {
            resource_type,
            compartments_file,
            profile,
            assume_yes,
        } => stop::run(&resource_type, &compartments_file, profile, assume_yes, ctx),

        Commands::Types => types::run(ctx),

        Commands::Doctor => doctor::run(ctx),

        Commands::Completions { shell } => {
            completions::run(shell);
            Ok(ExitCode::Success)
        }
    }
}
