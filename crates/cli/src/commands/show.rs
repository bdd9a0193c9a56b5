//! Show command implementation.

use anyhow::{Context, Result};

use crate::args::BiomeSelection;

/// Print the merged biome as YAML. Nothing is activated or fetched.
pub fn run(selection: &BiomeSelection) -> Result<()> {
    let profile = super::resolve(selection)?;
    tracing::debug!(path = %profile.source_location.display(), "Resolved biome");

    let yaml = serde_yaml::to_string(&profile).context("Failed to render biome as YAML")?;
    print!("{}", yaml);

    Ok(())
}
