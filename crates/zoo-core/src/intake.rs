//! The per-run intake pipeline: derivation, ID issue and naming.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::derive::{birth_date, IdCounters};
use crate::model::{Animal, Arrival, Species};
use crate::roster::Roster;

/// Owns the mutable state of a run: ID counters and the name roster.
#[derive(Debug)]
pub struct IntakeContext {
    roster: Roster,
    ids: IdCounters,
    run_year: i32,
}

impl IntakeContext {
    pub fn new(roster: Roster, run_year: i32) -> Self {
        Self {
            roster,
            ids: IdCounters::new(),
            run_year,
        }
    }

    /// Turn a parsed arrival into a fully populated animal.
    ///
    /// Order matters: the ID is issued before the name is assigned, because
    /// fallback names read the species counter the ID just advanced.
    pub fn admit(&mut self, arrival: Arrival) -> Animal {
        let birth_date = birth_date(arrival.age, arrival.season(), self.run_year);
        let id = self.ids.next_id(arrival.species);
        let name = self
            .roster
            .assign_name(arrival.species, self.ids.current(arrival.species));

        debug!(%id, %name, %birth_date, "admitted animal");

        Animal {
            id,
            name,
            birth_date,
            arrival,
        }
    }

    /// Admit every arrival in order and group the results by species.
    pub fn admit_all(&mut self, arrivals: impl IntoIterator<Item = Arrival>) -> Habitats {
        let mut habitats = Habitats::new();
        for arrival in arrivals {
            habitats.push(self.admit(arrival));
        }
        habitats
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ids(&self) -> &IdCounters {
        &self.ids
    }
}

/// Admitted animals grouped by species, each group in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Habitats {
    groups: BTreeMap<Species, Vec<Animal>>,
}

impl Habitats {
    /// Empty habitats with every species present.
    pub fn new() -> Self {
        Self {
            groups: Species::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, animal: Animal) {
        self.groups
            .entry(animal.arrival.species)
            .or_default()
            .push(animal);
    }

    pub fn get(&self, species: Species) -> &[Animal] {
        self.groups.get(&species).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups in habitat order: hyena, lion, tiger, bear.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &[Animal])> {
        Species::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Total number of animals across all habitats.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Habitats {
    fn default() -> Self {
        Self::new()
    }
}
