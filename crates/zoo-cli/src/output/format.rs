use zoo_core::model::{Animal, Arrival, Species};
use zoo_core::{Habitats, Roster};

use super::OutputFormat;

pub fn format_habitats(habitats: &Habitats, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(habitats).unwrap_or_default(),
        OutputFormat::Text => format_habitats_text(habitats),
    }
}

/// One block per species in habitat order, each ending in a blank line.
fn format_habitats_text(habitats: &Habitats) -> String {
    let mut out = String::new();
    for (species, animals) in habitats.iter() {
        out.push_str(&format!("{} Habitat:\n", species.display_name()));
        for animal in animals {
            out.push_str(&format_animal_line(animal));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn format_animal_line(animal: &Animal) -> String {
    let a = &animal.arrival;
    format!(
        "{}; {}; birth date: {}; {} color; {}; {} pounds; from {}; arrived {}",
        animal.id,
        animal.name,
        animal.birth_date,
        a.color,
        a.sex,
        format_weight(a.weight),
        a.origin,
        a.arrival_date.format("%Y-%m-%d"),
    )
}

/// Absent weights render as `None`.
fn format_weight(weight: Option<u32>) -> String {
    weight.map_or_else(|| "None".to_string(), |w| w.to_string())
}

pub fn format_arrival(arrival: &Arrival, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(arrival).unwrap_or_default(),
        OutputFormat::Text => format_arrival_text(arrival),
    }
}

fn format_arrival_text(a: &Arrival) -> String {
    let mut out = String::new();
    out.push_str(&format!("Species:      {}\n", a.species));
    out.push_str(&format!("Age:          {}\n", a.age));
    out.push_str(&format!("Sex:          {}\n", a.sex));
    let season = match (a.birth_season.as_str(), a.season()) {
        ("", _) => "(unknown)".to_string(),
        (s, Some(_)) => s.to_string(),
        (s, None) => format!("{s} (unrecognized)"),
    };
    out.push_str(&format!("Birth season: {season}\n"));
    out.push_str(&format!("Color:        {}\n", a.color));
    out.push_str(&format!("Weight:       {}\n", format_weight(a.weight)));
    out.push_str(&format!("Origin:       {}\n", a.origin));
    out.push_str(&format!("Arrived:      {}\n", a.arrival_date.format("%Y-%m-%d")));
    out
}

pub fn format_roster(roster: &Roster, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = Species::ALL
                .iter()
                .map(|s| {
                    let names: Vec<&str> = roster.names(*s).collect();
                    (s.as_str().to_string(), serde_json::json!(names))
                })
                .collect();
            serde_json::to_string_pretty(&map).unwrap_or_default()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for species in Species::ALL {
                let names: Vec<&str> = roster.names(species).collect();
                if names.is_empty() {
                    out.push_str(&format!("{}: (none)\n", species.display_name()));
                } else {
                    out.push_str(&format!(
                        "{} ({}): {}\n",
                        species.display_name(),
                        names.len(),
                        names.join(", ")
                    ));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use zoo_core::model::AnimalId;

    use super::*;

    fn animal(species: Species, seq: u32, name: &str, weight: Option<u32>) -> Animal {
        Animal {
            id: AnimalId::new(species, seq),
            name: name.into(),
            birth_date: "2021-03-21".into(),
            arrival: Arrival {
                age: 3,
                sex: "male".into(),
                species,
                birth_season: "spring".into(),
                color: "golden".into(),
                weight,
                origin: "Kenya".into(),
                arrival_date: NaiveDate::from_ymd_opt(2024, 3, 26).unwrap(),
            },
        }
    }

    #[test]
    fn test_animal_line() {
        let line = format_animal_line(&animal(Species::Lion, 1, "Leo", Some(420)));
        assert_eq!(
            line,
            "Li01; Leo; birth date: 2021-03-21; golden color; male; 420 pounds; from Kenya; arrived 2024-03-26"
        );
    }

    #[test]
    fn test_missing_weight_renders_none() {
        let line = format_animal_line(&animal(Species::Bear, 2, "NoName02", None));
        assert!(line.contains("; None pounds;"));
    }

    #[test]
    fn test_text_report_layout() {
        let mut habitats = Habitats::new();
        habitats.push(animal(Species::Tiger, 1, "Tony", Some(270)));
        habitats.push(animal(Species::Hyena, 1, "Shenzi", Some(70)));

        let text = format_habitats(&habitats, OutputFormat::Text);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "Hyena Habitat:");
        assert!(lines[1].starts_with("Hy01; Shenzi;"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Lion Habitat:");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Tiger Habitat:");
        assert!(lines[6].starts_with("Ti01; Tony;"));
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Bear Habitat:");
        assert_eq!(lines[9], "");
        assert!(text.ends_with("Bear Habitat:\n\n"));
    }

    #[test]
    fn test_json_report_keys_in_habitat_order() {
        let mut habitats = Habitats::new();
        habitats.push(animal(Species::Lion, 1, "Leo", Some(420)));
        let json = format_habitats(&habitats, OutputFormat::Json);
        let hyena = json.find("\"hyena\"").unwrap();
        let lion = json.find("\"lion\"").unwrap();
        let bear = json.find("\"bear\"").unwrap();
        assert!(hyena < lion && lion < bear);
        assert!(json.contains("\"name\": \"Leo\""));
    }

    #[test]
    fn test_roster_text() {
        let mut roster = Roster::new();
        roster.set_names(Species::Lion, vec!["Leo".to_string(), "Nala".to_string()]);
        let text = format_roster(&roster, OutputFormat::Text);
        assert!(text.contains("Lion (2): Leo, Nala\n"));
        assert!(text.contains("Hyena: (none)\n"));
    }
}
