use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of species the zoo accepts.
///
/// Variant order is the habitat order used by the population report, so
/// `Ord` and `ALL` both iterate hyena, lion, tiger, bear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Hyena,
    Lion,
    Tiger,
    Bear,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Hyena, Species::Lion, Species::Tiger, Species::Bear];

    /// Lowercase key as it appears in free text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyena => "hyena",
            Self::Lion => "lion",
            Self::Tiger => "tiger",
            Self::Bear => "bear",
        }
    }

    /// Two-letter prefix used for animal IDs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hyena => "Hy",
            Self::Lion => "Li",
            Self::Tiger => "Ti",
            Self::Bear => "Be",
        }
    }

    /// Capitalized name used in habitat headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hyena => "Hyena",
            Self::Lion => "Lion",
            Self::Tiger => "Tiger",
            Self::Bear => "Bear",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hyena" => Ok(Self::Hyena),
            "lion" => Ok(Self::Lion),
            "tiger" => Ok(Self::Tiger),
            "bear" => Ok(Self::Bear),
            other => Err(CoreError::UnknownSpecies(other.to_string())),
        }
    }
}
