//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Produce the process exit code for successful runs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping failures to exit codes (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their handlers; returns the exit code on success.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Run {
            selection,
            activation,
            command,
        } => commands::run::run(&selection, activation.options(), &command),
        Commands::Save {
            selection,
            activation,
            output,
        } => {
            commands::save::run(&selection, activation.options(), &output)?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Show { selection } => {
            commands::show::run(&selection)?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Encrypt { target } => {
            commands::encrypt::run(&target)?;
            Ok(ExitCode::Success.as_i32())
        }
    }
}
