use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use zoo_core::config::settings::{
    DEFAULT_ARRIVALS_PATH, DEFAULT_ARRIVAL_DATE, DEFAULT_NAMES_PATH, DEFAULT_REPORT_PATH,
};
use zoo_core::RunConfig;

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "zookeeper",
    version,
    about = "Turn free-text animal arrival notes into a grouped zoo population report"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Name roster file
    #[arg(long, global = true, env = "ZOO_NAMES", default_value = DEFAULT_NAMES_PATH)]
    names: PathBuf,

    /// Arriving animals file, one animal per line
    #[arg(long, global = true, env = "ZOO_ARRIVALS", default_value = DEFAULT_ARRIVALS_PATH)]
    arrivals: PathBuf,

    /// Where the population report is written
    #[arg(long, global = true, env = "ZOO_REPORT", default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Arrival date stamped on every animal (YYYY-MM-DD)
    #[arg(
        long,
        global = true,
        env = "ZOO_ARRIVAL_DATE",
        default_value = DEFAULT_ARRIVAL_DATE,
        value_parser = RunConfig::parse_arrival_date
    )]
    arrival_date: NaiveDate,

    /// Defaults to `report` when omitted
    #[command(subcommand)]
    command: Option<commands::Commands>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            names_path: self.names.clone(),
            arrivals_path: self.arrivals.clone(),
            report_path: self.report.clone(),
            arrival_date: self.arrival_date,
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.run_config();

    match &cli.command {
        None => commands::report::run(&commands::report::ReportArgs::default(), &config, cli.format),
        Some(commands::Commands::Report(args)) => commands::report::run(args, &config, cli.format),
        Some(commands::Commands::Parse(args)) => commands::parse::run(args, &config, cli.format),
        Some(commands::Commands::Roster) => commands::roster::run(&config, cli.format),
    }
}
