//! Run command implementation.

use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use biome_engine::ActivationOptions;

use crate::args::BiomeSelection;
use crate::error::ExitCode;

/// Activate the biome, then run `command` in it and return its exit code.
pub fn run(
    selection: &BiomeSelection,
    options: ActivationOptions,
    command: &[String],
) -> Result<i32> {
    let environment = super::activate(selection, options)?;

    let (program, args) = command.split_first().context("No command given")?;
    tracing::debug!(
        command = %program,
        variables = environment.len(),
        "Starting program"
    );

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to start '{}'", program))?;

    Ok(exit_code_of(status))
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}
