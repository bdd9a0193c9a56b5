//! CLI command implementations.

pub mod encrypt;
pub mod run;
pub mod save;
pub mod show;

use anyhow::{Context, Result};
use biome_config::{ConfiguredEnvironment, ResolvedProfile};
use biome_engine::{ActivationOptions, Collaborators, Orchestrator};

use crate::args::BiomeSelection;

/// Resolve the selected biome from its file or the default search path.
pub(crate) fn resolve(selection: &BiomeSelection) -> Result<ResolvedProfile> {
    let profile = match selection.file() {
        Some(path) => biome_config::load_from_file(&selection.biome, path)?,
        None => biome_config::load_from_defaults(&selection.biome)?,
    };
    Ok(profile)
}

/// Load and activate the selected biome with AWS-backed collaborators.
pub(crate) fn activate(
    selection: &BiomeSelection,
    options: ActivationOptions,
) -> Result<ConfiguredEnvironment> {
    let collaborators = Collaborators::aws().context("Failed to initialize AWS clients")?;
    let mut orchestrator = Orchestrator::new(collaborators, options);
    match selection.file() {
        Some(path) => orchestrator.load_from_file(&selection.biome, path)?,
        None => orchestrator.load_from_defaults(&selection.biome)?,
    };

    Ok(orchestrator.activate()?)
}
