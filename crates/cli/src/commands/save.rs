//! Save command implementation.

use std::path::Path;

use anyhow::Result;
use biome_config::write_dotenv;
use biome_engine::ActivationOptions;

use crate::args::BiomeSelection;

pub fn run(selection: &BiomeSelection, options: ActivationOptions, output: &Path) -> Result<()> {
    let environment = super::activate(selection, options)?;

    write_dotenv(&environment, output)?;
    eprintln!(
        "Wrote {} variable(s) for biome '{}' to {}",
        environment.len(),
        selection.biome,
        output.display()
    );

    Ok(())
}
