//! Step input checker CLI
//!
//! Compares the `env` struct tags in a step's main.go with the inputs
//! declared in its step.yml and fails on any drift.
//!
//! # Usage
//!
//! ```bash
//! # Check the step in the current directory
//! stepcheck
//!
//! # Check a step elsewhere
//! stepcheck path/to/step
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stepcheck::config::CheckPaths;
use stepcheck::pipeline;
use stepcheck::report::TerminalReporter;

#[derive(Parser)]
#[command(name = "stepcheck")]
#[command(about = "Checks that a step's Go inputs and step.yml stay in sync", long_about = None)]
struct Cli {
    /// Directory holding main.go and step.yml (default: current directory)
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let paths = CheckPaths::resolve(cli.root.as_deref());

    let verdict = match pipeline::run_check(&paths) {
        Ok(verdict) => verdict,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!("result");
    TerminalReporter::print(&verdict, &paths.go_file, &paths.step_yml);

    if verdict.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
