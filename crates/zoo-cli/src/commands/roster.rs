use anyhow::{Context, Result};

use zoo_core::RunConfig;
use zoo_intake::RosterLoader;

use crate::output::format::format_roster;
use crate::output::OutputFormat;

pub fn run(config: &RunConfig, format: OutputFormat) -> Result<()> {
    let roster = RosterLoader::load(&config.names_path).context("Failed to load name roster")?;
    print!("{}", format_roster(&roster, format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}
