use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use zoo_core::{IntakeContext, RunConfig};
use zoo_intake::{ArrivalReader, RosterLoader};

use crate::output::format::format_habitats;
use crate::output::OutputFormat;

#[derive(Args, Default)]
pub struct ReportArgs {
    /// Print the report instead of writing the report file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: &ReportArgs, config: &RunConfig, format: OutputFormat) -> Result<()> {
    let roster = RosterLoader::load(&config.names_path).context("Failed to load name roster")?;
    let arrivals = ArrivalReader::load(&config.arrivals_path, config.arrival_date)
        .context("Failed to read arriving animals")?;

    let mut intake = IntakeContext::new(roster, config.run_year());
    let habitats = intake.admit_all(arrivals);
    let report = format_habitats(&habitats, format);

    if args.stdout {
        print!("{report}");
        return Ok(());
    }

    std::fs::write(&config.report_path, &report)
        .with_context(|| format!("Failed to write {}", config.report_path.display()))?;
    info!(path = %config.report_path.display(), animals = habitats.len(), "wrote report");

    println!(
        "Wrote {} animal(s) to {}",
        habitats.len(),
        config.report_path.display()
    );
    for (species, animals) in habitats.iter() {
        println!("  {}: {}", species.display_name(), animals.len());
    }

    Ok(())
}
