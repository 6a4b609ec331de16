use serde::{Deserialize, Serialize};

/// A recognized birth season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Recognize a lowercased season word. Anything else is `None`.
    pub fn recognize(s: &str) -> Option<Self> {
        match s {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// The `-MM-DD` suffix appended to the birth year.
    pub fn month_day(&self) -> &'static str {
        match self {
            Self::Spring => "-03-21",
            Self::Summer => "-06-21",
            Self::Fall => "-09-21",
            Self::Winter => "-12-21",
        }
    }
}
