//! Setup command execution.
//!
//! Responsibilities:
//! - Split each command line on whitespace into a program and arguments.
//! - Run commands one after another with inherited stdio and environment.
//!
//! Does NOT handle:
//! - Shell syntax: no quoting, pipes, globbing or variable expansion.
//!
//! Invariants:
//! - The first spawn failure or non-zero exit stops the sequence.
//! - Commands run in declaration order.

use std::process::Command;

use crate::error::CommandError;

/// Run every command in order; returns how many ran.
pub fn run_setup_commands(commands: &[String]) -> Result<usize, CommandError> {
    for (index, line) in commands.iter().enumerate() {
        run_command(index, line)?;
    }
    Ok(commands.len())
}

fn run_command(index: usize, line: &str) -> Result<(), CommandError> {
    let mut parts = line.split_whitespace();
    let program = parts.next().ok_or(CommandError::Empty { index })?;

    tracing::debug!(command = %line, "Running setup command");
    let status = Command::new(program)
        .args(parts)
        .status()
        .map_err(|source| CommandError::Spawn {
            command: line.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(CommandError::Failed {
            command: line.to_string(),
            code: status.code(),
        });
    }
    Ok(())
}
