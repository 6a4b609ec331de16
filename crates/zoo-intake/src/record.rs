//! Parser for free-text arrival notes such as
//! `4 year old female tiger, born in spring, tan color, 270 pounds, from Dhaka, Bangladesh`.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use zoo_core::model::{Arrival, Species};

use crate::error::IntakeError;

/// Read every non-blank line of an arrivals file.
pub struct ArrivalReader;

impl ArrivalReader {
    pub fn load(path: &Path, arrival_date: NaiveDate) -> Result<Vec<Arrival>, IntakeError> {
        let content = std::fs::read_to_string(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let arrivals = parse_arrivals(&content, arrival_date)?;
        info!(path = %path.display(), count = arrivals.len(), "read arrivals");
        Ok(arrivals)
    }
}

/// Parse each non-blank line. Errors carry the 1-based line number.
pub fn parse_arrivals(content: &str, arrival_date: NaiveDate) -> Result<Vec<Arrival>, IntakeError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_arrival(line, arrival_date).map_err(|e| IntakeError::AtLine {
                line: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Parse one arrival line into an [`Arrival`].
///
/// Clause 0 is the descriptor (`<age>-year-old <sex> <species>`), clause 1
/// the birth information. Color, weight and origin may appear in any clause.
pub fn parse_arrival(line: &str, arrival_date: NaiveDate) -> Result<Arrival, IntakeError> {
    let clauses: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if clauses.len() < 2 {
        return Err(IntakeError::Malformed(format!(
            "expected at least 2 comma-separated clauses, got {}",
            clauses.len()
        )));
    }

    let (age, sex, species) = parse_descriptor(clauses[0])?;
    let birth_season = parse_birth_season(clauses[1]);

    let mut extras = Extras::default();
    for clause in &clauses {
        for rule in ClauseRule::ALL {
            if !rule.is_filled(&extras) && rule.matches(clause) {
                rule.extract(clause, &mut extras)?;
            }
        }
    }

    debug!(%species, age, %sex, "parsed arrival");

    Ok(Arrival {
        age,
        sex,
        species,
        birth_season,
        color: extras.color.unwrap_or_default(),
        weight: extras.weight,
        origin: extras.origin.unwrap_or_default(),
        arrival_date,
    })
}

fn parse_descriptor(clause: &str) -> Result<(u32, String, Species), IntakeError> {
    let tokens: Vec<&str> = clause.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(IntakeError::Malformed(format!(
            "descriptor needs at least age and species: {clause:?}"
        )));
    }

    let digits: String = tokens[0].chars().take_while(char::is_ascii_digit).collect();
    let age = digits
        .parse::<u32>()
        .map_err(|_| IntakeError::Malformed(format!("age is not a number: {:?}", tokens[0])))?;

    let sex = tokens[tokens.len() - 2].to_string();
    let species: Species = tokens[tokens.len() - 1].to_lowercase().parse()?;

    Ok((age, sex, species))
}

/// Only the exact-case phrase "born in" is removed, so "Born in spring"
/// keeps its prefix and is later treated as an unrecognized season.
fn parse_birth_season(clause: &str) -> String {
    if clause.to_lowercase().contains("unknown") {
        return String::new();
    }
    clause.replace("born in", "").trim().to_lowercase()
}

/// Optional fields found by [`ClauseRule`]s. `None` means no clause matched yet.
#[derive(Debug, Default)]
struct Extras {
    color: Option<String>,
    weight: Option<u32>,
    origin: Option<String>,
}

/// A clause classification rule. Each rule fills one field from the first
/// clause it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseRule {
    /// Clause mentions "color" anywhere.
    Color,
    /// Clause mentions "pound" anywhere.
    Weight,
    /// Clause starts with "from".
    Origin,
}

impl ClauseRule {
    pub const ALL: [ClauseRule; 3] = [ClauseRule::Color, ClauseRule::Weight, ClauseRule::Origin];

    /// Case-insensitive test of whether the clause belongs to this rule.
    pub fn matches(&self, clause: &str) -> bool {
        let lower = clause.to_lowercase();
        match self {
            Self::Color => lower.contains("color"),
            Self::Weight => lower.contains("pound"),
            Self::Origin => lower.starts_with("from"),
        }
    }

    fn is_filled(&self, extras: &Extras) -> bool {
        match self {
            Self::Color => extras.color.is_some(),
            Self::Weight => extras.weight.is_some(),
            Self::Origin => extras.origin.is_some(),
        }
    }

    fn extract(&self, clause: &str, extras: &mut Extras) -> Result<(), IntakeError> {
        match self {
            Self::Color => extras.color = Some(extract_color(clause)),
            Self::Weight => extras.weight = Some(extract_weight(clause)?),
            Self::Origin => extras.origin = Some(extract_origin(clause)),
        }
        Ok(())
    }
}

fn extract_color(clause: &str) -> String {
    clause
        .to_lowercase()
        .replace("color", "")
        .trim_matches(|c: char| c.is_whitespace() || c == ':')
        .to_string()
}

/// Every digit in the clause, concatenated: "1 2 0 pounds" reads as 120.
fn extract_weight(clause: &str) -> Result<u32, IntakeError> {
    let digits: String = clause.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<u32>()
        .map_err(|_| IntakeError::Malformed(format!("weight has no usable number: {clause:?}")))
}

fn extract_origin(clause: &str) -> String {
    clause.get("from".len()..).unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 26).unwrap()
    }

    #[test]
    fn test_parse_full_line() {
        let a = parse_arrival(
            "3-year-old male lion, born in Spring, Color: Golden, 420 pounds, from Kenya",
            date(),
        )
        .unwrap();
        assert_eq!(a.age, 3);
        assert_eq!(a.sex, "male");
        assert_eq!(a.species, Species::Lion);
        assert_eq!(a.birth_season, "spring");
        assert_eq!(a.color, "golden");
        assert_eq!(a.weight, Some(420));
        assert_eq!(a.origin, "Kenya");
        assert_eq!(a.arrival_date, date());
    }

    #[test]
    fn test_parse_spaced_descriptor() {
        let a = parse_arrival(
            "4 year old female hyena, born in spring, tan color, 70 pounds, from Friguia Park, Tunisia",
            date(),
        )
        .unwrap();
        assert_eq!(a.age, 4);
        assert_eq!(a.sex, "female");
        assert_eq!(a.species, Species::Hyena);
        assert_eq!(a.color, "tan");
        assert_eq!(a.weight, Some(70));
        // The country is its own clause; only the clause starting with "from" counts.
        assert_eq!(a.origin, "Friguia Park");
    }

    #[test]
    fn test_species_is_case_folded() {
        let a = parse_arrival("12-year-old female TIGER, birth season unknown", date()).unwrap();
        assert_eq!(a.species, Species::Tiger);
        assert_eq!(a.age, 12);
    }

    #[test]
    fn test_unknown_birth_season() {
        let a = parse_arrival("2-year-old male bear, Unknown birth season", date()).unwrap();
        assert_eq!(a.birth_season, "");
        assert_eq!(a.season(), None);
    }

    #[test]
    fn test_born_in_is_stripped_only_in_exact_case() {
        let a = parse_arrival("5-year-old male bear, born in fall", date()).unwrap();
        assert_eq!(a.birth_season, "fall");

        // Known quirk: a capitalized prefix survives and the season goes unrecognized.
        let a = parse_arrival("5-year-old male bear, Born In fall", date()).unwrap();
        assert_eq!(a.birth_season, "born in fall");
        assert_eq!(a.season(), None);
    }

    #[test]
    fn test_missing_optional_fields() {
        let a = parse_arrival("1-year-old female lion, born in winter", date()).unwrap();
        assert_eq!(a.color, "");
        assert_eq!(a.weight, None);
        assert_eq!(a.origin, "");
    }

    #[test]
    fn test_first_matching_clause_wins() {
        let a = parse_arrival(
            "6-year-old male tiger, born in summer, orange color, 300 pounds, 310 pounds, from India, from Nepal, black color",
            date(),
        )
        .unwrap();
        assert_eq!(a.color, "orange");
        assert_eq!(a.weight, Some(300));
        assert_eq!(a.origin, "India");
    }

    #[test]
    fn test_weight_concatenates_all_digits() {
        assert_eq!(extract_weight("about 1 2 0 pounds").unwrap(), 120);
        assert!(matches!(
            extract_weight("a few pounds"),
            Err(IntakeError::Malformed(_))
        ));
    }

    #[test]
    fn test_rule_matching() {
        assert!(ClauseRule::Color.matches("Brown COLOR"));
        assert!(ClauseRule::Weight.matches("300 Pounds"));
        assert!(ClauseRule::Origin.matches("From Alaska Zoo"));
        assert!(!ClauseRule::Origin.matches("shipped from Alaska"));
        assert!(!ClauseRule::Weight.matches("born in spring"));
    }

    #[test]
    fn test_origin_keeps_case() {
        assert_eq!(extract_origin("FROM San Diego Zoo"), "San Diego Zoo");
    }

    #[test]
    fn test_single_clause_is_malformed() {
        let err = parse_arrival("3-year-old male lion", date()).unwrap_err();
        assert!(matches!(err, IntakeError::Malformed(_)));
    }

    #[test]
    fn test_non_numeric_age_is_malformed() {
        let err = parse_arrival("old male lion, born in spring", date()).unwrap_err();
        assert!(matches!(err, IntakeError::Malformed(_)));
    }

    #[test]
    fn test_unknown_species_is_an_error() {
        let err = parse_arrival("3-year-old male zebra, born in spring", date()).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Core(zoo_core::CoreError::UnknownSpecies(s)) if s == "zebra"
        ));
    }

    #[test]
    fn test_parse_arrivals_reports_line_number() {
        let content = "3-year-old male lion, born in spring\n\n7-year-old female emu, born in fall\n";
        let err = parse_arrivals(content, date()).unwrap_err();
        assert!(matches!(err, IntakeError::AtLine { line: 3, .. }));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arrivingAnimals.txt");
        std::fs::write(
            &path,
            "3-year-old male lion, born in spring\n\n2-year-old female bear, born in winter\n\n",
        )
        .unwrap();
        let arrivals = ArrivalReader::load(&path, date()).unwrap();
        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[1].species, Species::Bear);
    }
}
