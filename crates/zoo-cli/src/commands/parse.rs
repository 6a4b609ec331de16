use anyhow::{Context, Result};
use clap::Args;

use zoo_core::RunConfig;
use zoo_intake::parse_arrival;

use crate::output::format::format_arrival;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ParseArgs {
    /// One arrival description, e.g. "4 year old female tiger, born in spring, ..."
    pub line: String,
}

pub fn run(args: &ParseArgs, config: &RunConfig, format: OutputFormat) -> Result<()> {
    let arrival = parse_arrival(&args.line, config.arrival_date)
        .with_context(|| format!("Failed to parse {:?}", args.line))?;
    print!("{}", format_arrival(&arrival, format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}
