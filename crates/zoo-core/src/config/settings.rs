use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

pub const DEFAULT_NAMES_PATH: &str = "animalNames.txt";
pub const DEFAULT_ARRIVALS_PATH: &str = "arrivingAnimals.txt";
pub const DEFAULT_REPORT_PATH: &str = "zooPopulation.txt";
pub const DEFAULT_ARRIVAL_DATE: &str = "2024-03-26";

/// Settings for a single intake run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub names_path: PathBuf,
    pub arrivals_path: PathBuf,
    pub report_path: PathBuf,
    /// Shared by every animal in the run; its year anchors birth dates.
    pub arrival_date: NaiveDate,
}

impl RunConfig {
    /// Parse an arrival date in `YYYY-MM-DD` form.
    pub fn parse_arrival_date(s: &str) -> Result<NaiveDate, CoreError> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// The year birth dates are counted back from.
    pub fn run_year(&self) -> i32 {
        self.arrival_date.year()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            names_path: PathBuf::from(DEFAULT_NAMES_PATH),
            arrivals_path: PathBuf::from(DEFAULT_ARRIVALS_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            arrival_date: NaiveDate::from_ymd_opt(2024, 3, 26).unwrap_or_default(),
        }
    }
}
