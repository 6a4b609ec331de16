use std::path::Path;

use tracing::debug;

use zoo_core::model::Species;
use zoo_core::Roster;

use crate::error::IntakeError;

/// Order in which header lines are checked against species names.
const HEADER_ORDER: [Species; 4] = [Species::Hyena, Species::Lion, Species::Bear, Species::Tiger];

/// Load a name roster file.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> Result<Roster, IntakeError> {
        let content = std::fs::read_to_string(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_roster(&content))
    }
}

/// Parse roster text made of species header lines ("Lion Names:") each
/// followed by a comma-separated list of names.
///
/// A header without a following list leaves that species empty. Lines that
/// are neither are ignored.
pub fn parse_roster(content: &str) -> Roster {
    let mut roster = Roster::new();
    let mut pending: Option<Species> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(species) = header_species(line) {
            debug!(%species, "roster header");
            pending = Some(species);
            continue;
        }

        if line.contains(',') {
            if let Some(species) = pending.take() {
                let names: Vec<String> = line.split(',').map(|n| n.trim().to_string()).collect();
                debug!(%species, count = names.len(), "roster names");
                roster.set_names(species, names);
            }
        }
    }

    roster
}

fn header_species(line: &str) -> Option<Species> {
    let lower = line.to_lowercase();
    if !lower.contains("name") {
        return None;
    }
    HEADER_ORDER
        .into_iter()
        .find(|species| lower.contains(species.as_str()))
}
