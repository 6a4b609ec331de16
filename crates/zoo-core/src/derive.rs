//! Derived fields: birth dates and species-scoped IDs.

use std::collections::BTreeMap;

use crate::model::{AnimalId, Season, Species};

/// Month-day used when the birth season is unknown or unrecognized.
pub const DEFAULT_MONTH_DAY: &str = "-06-01";

/// Birth date as `YYYY-MM-DD`, counted back `age` years from `run_year`.
pub fn birth_date(age: u32, season: Option<Season>, run_year: i32) -> String {
    let year = i64::from(run_year) - i64::from(age);
    let month_day = season.map_or(DEFAULT_MONTH_DAY, |s| s.month_day());
    format!("{year}{month_day}")
}

/// Per-species sequence counters, all starting at zero.
#[derive(Debug, Clone)]
pub struct IdCounters {
    counters: BTreeMap<Species, u32>,
}

impl IdCounters {
    pub fn new() -> Self {
        Self {
            counters: Species::ALL.iter().map(|s| (*s, 0)).collect(),
        }
    }

    /// Advance the species' counter and return the new ID.
    /// Every call yields a fresh ID, so call it once per animal.
    pub fn next_id(&mut self, species: Species) -> AnimalId {
        let counter = self.counters.entry(species).or_insert(0);
        *counter += 1;
        AnimalId::new(species, *counter)
    }

    /// Number of IDs issued so far for the species.
    pub fn current(&self, species: Species) -> u32 {
        self.counters.get(&species).copied().unwrap_or(0)
    }
}

impl Default for IdCounters {
    fn default() -> Self {
        Self::new()
    }
}
