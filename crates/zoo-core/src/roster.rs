use std::collections::{BTreeMap, VecDeque};

use crate::model::Species;

/// Candidate names per species, handed out front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    names: BTreeMap<Species, VecDeque<String>>,
}

impl Roster {
    /// A roster with every species present and no names.
    pub fn new() -> Self {
        Self {
            names: Species::ALL.iter().map(|s| (*s, VecDeque::new())).collect(),
        }
    }

    /// Replace the species' names with the given ordered list.
    pub fn set_names(&mut self, species: Species, names: impl IntoIterator<Item = String>) {
        self.names.insert(species, names.into_iter().collect());
    }

    /// Names still available for the species, in the order they will be used.
    pub fn names(&self, species: Species) -> impl Iterator<Item = &str> {
        self.names
            .get(&species)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    pub fn remaining(&self, species: Species) -> usize {
        self.names.get(&species).map_or(0, VecDeque::len)
    }

    /// Take the next name for the species.
    ///
    /// Once the species runs dry, the name is synthesized from
    /// `current_counter`, the species' ID counter after this animal's ID
    /// was issued.
    pub fn assign_name(&mut self, species: Species, current_counter: u32) -> String {
        match self.names.get_mut(&species).and_then(VecDeque::pop_front) {
            Some(name) => name,
            None => {
                tracing::warn!(%species, "name roster exhausted, synthesizing name");
                format!("NoName{current_counter:02}")
            }
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
