pub mod parse;
pub mod report;
pub mod roster;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the population report from the roster and arrivals files
    Report(report::ReportArgs),
    /// Parse a single arrival line and show the extracted fields
    Parse(parse::ParseArgs),
    /// Show the names available per species
    Roster,
}
