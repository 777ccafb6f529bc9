//! The Schengen country roster and derived visited-country data.
//!
//! The roster is the 27 member states as of the 2023 Croatia accession,
//! keyed by ISO 3166-1 alpha-3 code. The visited set is what the map
//! collaborator consumes for membership checks; it never calls the
//! forecast functions.

use std::collections::BTreeSet;

use crate::records::Trip;

/// One roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// The Schengen member states, by ISO 3166-1 alpha-3 code.
pub const SCHENGEN_COUNTRIES: [Country; 27] = [
    Country { code: "AUT", name: "Austria" },
    Country { code: "BEL", name: "Belgium" },
    Country { code: "HRV", name: "Croatia" },
    Country { code: "CZE", name: "Czech Republic" },
    Country { code: "DNK", name: "Denmark" },
    Country { code: "EST", name: "Estonia" },
    Country { code: "FIN", name: "Finland" },
    Country { code: "FRA", name: "France" },
    Country { code: "DEU", name: "Germany" },
    Country { code: "GRC", name: "Greece" },
    Country { code: "HUN", name: "Hungary" },
    Country { code: "ISL", name: "Iceland" },
    Country { code: "ITA", name: "Italy" },
    Country { code: "LVA", name: "Latvia" },
    Country { code: "LIE", name: "Liechtenstein" },
    Country { code: "LTU", name: "Lithuania" },
    Country { code: "LUX", name: "Luxembourg" },
    Country { code: "MLT", name: "Malta" },
    Country { code: "NLD", name: "Netherlands" },
    Country { code: "NOR", name: "Norway" },
    Country { code: "POL", name: "Poland" },
    Country { code: "PRT", name: "Portugal" },
    Country { code: "SVK", name: "Slovakia" },
    Country { code: "SVN", name: "Slovenia" },
    Country { code: "ESP", name: "Spain" },
    Country { code: "SWE", name: "Sweden" },
    Country { code: "CHE", name: "Switzerland" },
];

/// Whether `code` is a Schengen member's alpha-3 code.
pub fn is_schengen_code(code: &str) -> bool {
    SCHENGEN_COUNTRIES.iter().any(|c| c.code == code)
}

/// Display name for a roster code.
pub fn country_name(code: &str) -> Option<&'static str> {
    SCHENGEN_COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.name)
}

/// The distinct roster countries appearing in any trip.
///
/// Codes outside the roster are ignored; under the lenient contract they
/// can only come from hand-edited storage.
pub fn visited_countries(trips: &[Trip]) -> BTreeSet<&str> {
    trips
        .iter()
        .flat_map(|t| t.countries.iter())
        .map(String::as_str)
        .filter(|code| is_schengen_code(code))
        .collect()
}

/// Percentage of the roster visited, rounded to the nearest whole percent
/// and clamped to 100.
pub fn roster_progress(trips: &[Trip]) -> u32 {
    let visited = visited_countries(trips).len() as f64;
    let total = SCHENGEN_COUNTRIES.len() as f64;
    ((visited / total * 100.0).round() as u32).min(100)
}

// ── Tests ───────────────────────────────────────────────────────────────────
