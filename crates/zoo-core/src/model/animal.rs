use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::season::Season;
use super::species::Species;

/// A species-scoped animal identifier such as `Ti03`.
/// Species code followed by the sequence number, zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub String);

impl AnimalId {
    pub fn new(species: Species, sequence: u32) -> Self {
        Self(format!("{}{sequence:02}", species.code()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything extracted from one line of arrival notes, before derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    pub age: u32,
    pub sex: String,
    pub species: Species,
    /// Lowercased birth season text. Empty when unknown; may hold text that
    /// is not a recognized season.
    #[serde(default)]
    pub birth_season: String,
    #[serde(default)]
    pub color: String,
    /// Weight in pounds, when stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default)]
    pub origin: String,
    pub arrival_date: NaiveDate,
}

impl Arrival {
    /// The birth season, if the text names one.
    pub fn season(&self) -> Option<Season> {
        Season::recognize(&self.birth_season)
    }
}

/// A fully processed animal: birth date, ID and name are all set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub birth_date: String,
    #[serde(flatten)]
    pub arrival: Arrival,
}
