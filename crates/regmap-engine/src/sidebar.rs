//! # Filter Sidebar
//!
//! Groups the countries that have regulations under their region
//! heading, and counts regulations per facet value.
//!
//! EU member states are listed under `EU`, other European countries
//! under `Europe`.

use std::collections::{BTreeMap, BTreeSet};

use regmap_core::{PlaceId, Region, Regulation, RegulationTarget, ScopeLevel};
use serde::Serialize;

use crate::LocationEngine;

/// Number of regulations per scope level and per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub by_scope: BTreeMap<ScopeLevel, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl LocationEngine<'_> {
    /// Countries with at least one location-targeted regulation, by
    /// region. A state-level target lists its parent country.
    pub fn sidebar_groups(&self, regulations: &[Regulation]) -> BTreeMap<Region, Vec<PlaceId>> {
        let mut groups: BTreeMap<Region, BTreeSet<PlaceId>> = BTreeMap::new();
        for regulation in regulations {
            let RegulationTarget::Location(place) = self.resolve_target(regulation) else {
                continue;
            };
            let Some(entry) = self.hierarchy.lookup(place) else {
                tracing::debug!(place = %place, "targeted place has no hierarchy entry; not grouped");
                continue;
            };
            let country = entry.parent_country.unwrap_or(entry.id);
            groups.entry(entry.region).or_default().insert(country);
        }
        groups
            .into_iter()
            .map(|(region, countries)| (region, countries.into_iter().collect()))
            .collect()
    }

    /// Every scope level is present, possibly with a zero count.
    /// Regulations without a category are not counted by category.
    pub fn facet_counts(&self, regulations: &[Regulation]) -> FacetCounts {
        let mut counts = FacetCounts {
            by_scope: ScopeLevel::all().iter().map(|level| (*level, 0)).collect(),
            by_category: BTreeMap::new(),
        };
        for regulation in regulations {
            *counts
                .by_scope
                .entry(self.classify_scope(regulation))
                .or_default() += 1;
            if let Some(category) = regulation.category.as_deref().map(str::trim) {
                if !category.is_empty() {
                    *counts.by_category.entry(category.to_string()).or_default() += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(id: &str, jurisdiction: &str, country: &str) -> Regulation {
        Regulation::new(id, jurisdiction, country).unwrap()
    }

    #[test]
    fn groups_by_region_with_eu_split() {
        let regs = vec![
            reg("a", "France", ""),
            reg("b", "UK", ""),
            reg("c", "California", "United States"),
            reg("d", "Texas", "United States"),
            reg("e", "EU", ""),
            reg("f", "Global", ""),
            reg("g", "Bayern", "Germany"),
        ];
        let groups = LocationEngine::global().sidebar_groups(&regs);
        assert_eq!(groups[&Region::Eu], [PlaceId::France, PlaceId::Germany]);
        assert_eq!(groups[&Region::Europe], [PlaceId::UnitedKingdom]);
        assert_eq!(groups[&Region::NorthAmerica], [PlaceId::UnitedStates]);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn places_without_hierarchy_entry_are_skipped() {
        let regs = vec![reg("gl", "Greenland", "")];
        assert!(LocationEngine::global().sidebar_groups(&regs).is_empty());
    }

    #[test]
    fn facet_counts_cover_every_scope() {
        let regs = vec![
            reg("a", "Global", "").with_category("Standard"),
            reg("b", "EU", "").with_category("Disclosure"),
            reg("c", "France", "").with_category(" Disclosure "),
            reg("d", "Texas", ""),
        ];
        let counts = LocationEngine::global().facet_counts(&regs);
        assert_eq!(counts.by_scope[&ScopeLevel::Global], 1);
        assert_eq!(counts.by_scope[&ScopeLevel::Regional], 1);
        assert_eq!(counts.by_scope[&ScopeLevel::Country], 1);
        assert_eq!(counts.by_scope[&ScopeLevel::State], 1);
        assert_eq!(counts.by_category["Disclosure"], 2);
        assert_eq!(counts.by_category.len(), 2);

        let empty = LocationEngine::global().facet_counts(&[]);
        assert_eq!(empty.by_scope.len(), 4);
        assert!(empty.by_scope.values().all(|n| *n == 0));
    }

    #[test]
    fn facet_counts_serialize_with_string_keys() {
        let counts = LocationEngine::global().facet_counts(&[reg("a", "Global", "")]);
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["by_scope"]["global"], 1);
        assert_eq!(json["by_scope"]["state"], 0);
    }
}
