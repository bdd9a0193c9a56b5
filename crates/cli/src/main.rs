//! biome - activate named environment profiles.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install logging on stderr.
//! - Run the selected command and turn its outcome into an exit code.
//!
//! Does NOT handle:
//! - Profile resolution or activation (see `crates/config` and `crates/engine`).
//! - AWS access (see `crates/client`).
//!
//! Invariants:
//! - Logs and diagnostics go to stderr; stdout belongs to the command's output
//!   or the program started by `biome run`.
//! - `biome run` exits with the program's own exit code.

mod args;
mod commands;
mod dispatch;
mod error;

use args::{Cli, log_directive_from_env};
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let filter = match log_directive_from_env() {
        Some(directive) => EnvFilter::new(directive),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
