//! # Regulation Target Resolution
//!
//! The single decision table that turns a regulation's jurisdiction and
//! country text into a [`RegulationTarget`]. Both the map and the search
//! filter go through [`LocationEngine::resolve_target`].
//!
//! ## Decision order
//!
//! First match wins. Inputs are trimmed; region labels are matched
//! exactly, place names through alias resolution.
//!
//! | # | Condition | Target |
//! |---|-----------|--------|
//! | 1 | jurisdiction or country is `Global` | `Global` |
//! | 2 | jurisdiction `EU`, country empty or `European Union` | `Region(EU)` |
//! | 2 | jurisdiction `EU`, country pinnable | `Location(country)` |
//! | 3 | jurisdiction `Asia-Pacific` / `Asia Pacific`, country pinnable in Asia-Pacific | `Location(country)` |
//! | 3 | ... country pinnable in Oceania | `Location(country)` |
//! | 3 | ... otherwise | `Region(Asia-Pacific)` |
//! | 4 | jurisdiction `South America` | `Location(country)` if pinnable, else `Region(South America)` |
//! | 5 | jurisdiction `North America` | `Location` for country exactly `Canada` / `United States`, else `Region(North America)` |
//! | 6 | jurisdiction is a pinnable state-level place | `Location(jurisdiction)` |
//! | 7 | jurisdiction `US` / `UK` | `Location(United States / United Kingdom)` |
//! | 8 | jurisdiction, else country, is pinnable | `Location(that place)` |
//! | 9 | otherwise | `Global` |
//!
//! Rule 9 is permissive: a regulation that cannot be placed is shown
//! everywhere rather than nowhere.
//!
//! "Pinnable" means the text resolves to a place that has map
//! coordinates.

use regmap_core::{PlaceId, PlaceLevel, Region, Regulation, RegulationTarget};

use crate::LocationEngine;

const GLOBAL: &str = "Global";
const EU: &str = "EU";
const EUROPEAN_UNION: &str = "European Union";
const ASIA_PACIFIC_LABELS: [&str; 2] = ["Asia-Pacific", "Asia Pacific"];
const SOUTH_AMERICA: &str = "South America";
const NORTH_AMERICA: &str = "North America";
const LEGACY_US: &str = "US";
const LEGACY_UK: &str = "UK";

impl LocationEngine<'_> {
    /// Resolve the applicability target of a regulation.
    pub fn resolve_target(&self, regulation: &Regulation) -> RegulationTarget {
        self.resolve_target_parts(&regulation.jurisdiction, &regulation.country)
    }

    /// Resolve the applicability target from raw jurisdiction and
    /// country text.
    pub fn resolve_target_parts(&self, jurisdiction: &str, country: &str) -> RegulationTarget {
        let jurisdiction = jurisdiction.trim();
        let country = country.trim();

        if jurisdiction == GLOBAL || country == GLOBAL {
            return RegulationTarget::Global;
        }

        if jurisdiction == EU {
            if country.is_empty() || country == EUROPEAN_UNION {
                return RegulationTarget::Region(Region::Eu);
            }
            if let Some(place) = self.pinnable(country) {
                return RegulationTarget::Location(place);
            }
        }

        if ASIA_PACIFIC_LABELS.contains(&jurisdiction) {
            return self.resolve_asia_pacific(country);
        }

        if jurisdiction == SOUTH_AMERICA {
            return match self.pinnable(country) {
                Some(place) => RegulationTarget::Location(place),
                None => RegulationTarget::Region(Region::SouthAmerica),
            };
        }

        if jurisdiction == NORTH_AMERICA {
            // Exact country text only; aliases and other casings stay regional.
            return [PlaceId::Canada, PlaceId::UnitedStates]
                .into_iter()
                .find(|place| country == place.as_str())
                .map_or(RegulationTarget::Region(Region::NorthAmerica), RegulationTarget::Location);
        }

        if let Some(place) = self.pinnable(jurisdiction) {
            if self.level_of(place) == PlaceLevel::State {
                return RegulationTarget::Location(place);
            }
        }

        match jurisdiction {
            LEGACY_US => return RegulationTarget::Location(PlaceId::UnitedStates),
            LEGACY_UK => return RegulationTarget::Location(PlaceId::UnitedKingdom),
            _ => {}
        }

        if let Some(place) = self.pinnable(jurisdiction).or_else(|| self.pinnable(country)) {
            return RegulationTarget::Location(place);
        }

        tracing::debug!(
            jurisdiction,
            country,
            "regulation target unresolvable; treating as global"
        );
        RegulationTarget::Global
    }

    /// Rule 3. A country in Asia-Pacific, or in Oceania, is targeted
    /// directly; anything else is the whole Asia-Pacific bucket.
    fn resolve_asia_pacific(&self, country: &str) -> RegulationTarget {
        if let Some(place) = self.pinnable(country) {
            if self.hierarchy.is_in_region(place, Region::AsiaPacific)
                || self.hierarchy.is_in_region(place, Region::Oceania)
            {
                return RegulationTarget::Location(place);
            }
        }
        RegulationTarget::Region(Region::AsiaPacific)
    }

    /// Resolve text to a place with coordinates.
    fn pinnable(&self, text: &str) -> Option<PlaceId> {
        self.coordinates.resolve_pinnable(text)
    }

    /// Level of a place: the hierarchy's answer, else the pin's, else country.
    pub fn level_of(&self, place: PlaceId) -> PlaceLevel {
        if let Some(p) = self.hierarchy.lookup(place) {
            return p.level;
        }
        self.coordinates
            .coordinates_of(place)
            .map(|entry| entry.level)
            .unwrap_or(PlaceLevel::Country)
    }
}
