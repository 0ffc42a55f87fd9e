//! # Map Pins
//!
//! Where the map draws a pin, and which regulations the pin lists.
//!
//! ## Pin placement
//!
//! Each regulation proposes pin places:
//!
//! 1. its primary location, when it has one ([`LocationEngine::primary_location`]);
//! 2. otherwise the scope expansion of
//!    [`CoordinateTable::countries_for_regulation_scope`], so that EU-wide
//!    and global regulations still appear on the map.
//!
//! A country is then *absorbed* (dropped as a pin) whenever one of its
//! sub-national units is also proposed: a map with a California pin does
//! not also draw a United States pin.
//!
//! ## Pin contents
//!
//! A pin lists every regulation that applies to its place, ancestors
//! included, plus every regulation that proposed the place. Input order
//! is preserved and ids are de-duplicated.
//!
//! The two sets can disagree. An "Asia-Pacific" regulation expands to a
//! pin list that includes Australia, yet Australia sits in Oceania, so
//! [`LocationEngine::applies_to_place`] answers `false` for it. The
//! Australia pin still lists the regulation because it proposed the pin.
//!
//! [`CoordinateTable::countries_for_regulation_scope`]: regmap_geo::CoordinateTable::countries_for_regulation_scope

use std::collections::{BTreeMap, BTreeSet, HashSet};

use regmap_core::{Coordinate, PlaceId, PlaceLevel, Regulation, RegulationId};
use serde::Serialize;

use crate::LocationEngine;

/// A rendered map pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    pub place: PlaceId,
    pub display_name: &'static str,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub level: PlaceLevel,
    pub regulation_ids: Vec<RegulationId>,
}

impl LocationEngine<'_> {
    /// The single place a regulation's pin is drawn at: the jurisdiction
    /// if it names a pinnable place, else the country. Scope sentinels
    /// ("Global", "European Union", "Unknown") never count.
    pub fn primary_location(&self, regulation: &Regulation) -> Option<PlaceId> {
        self.coordinates
            .specific_place(&regulation.jurisdiction)
            .or_else(|| self.coordinates.specific_place(&regulation.country))
    }

    /// Places a regulation proposes as pins, before absorption.
    pub fn proposed_pins(&self, regulation: &Regulation) -> BTreeSet<PlaceId> {
        match self.primary_location(regulation) {
            Some(place) => BTreeSet::from([place]),
            None => self
                .coordinates
                .countries_for_regulation_scope(&regulation.jurisdiction, &regulation.country),
        }
    }

    /// Pin places mapped to the regulations each pin lists.
    pub fn pinnable_locations<'a>(
        &self,
        regulations: &'a [Regulation],
    ) -> BTreeMap<PlaceId, Vec<&'a Regulation>> {
        let proposals: Vec<BTreeSet<PlaceId>> = regulations
            .iter()
            .map(|r| self.proposed_pins(r))
            .collect();

        let mut places: BTreeSet<PlaceId> = proposals
            .iter()
            .flatten()
            .copied()
            .filter(|p| self.coordinates.has_coordinates(*p))
            .collect();

        let absorbed: Vec<PlaceId> = places
            .iter()
            .copied()
            .filter(|p| {
                self.hierarchy
                    .states_of(*p)
                    .iter()
                    .any(|state| places.contains(state))
            })
            .collect();
        for country in absorbed {
            places.remove(&country);
            tracing::debug!(place = %country, "country pin absorbed by sub-national pins");
        }

        places
            .into_iter()
            .map(|place| {
                let mut seen = HashSet::new();
                let listed: Vec<&Regulation> = regulations
                    .iter()
                    .zip(&proposals)
                    .filter(|(r, proposed)| proposed.contains(&place) || self.applies_to(r, place))
                    .map(|(r, _)| r)
                    .filter(|r| seen.insert(r.id.as_str()))
                    .collect();
                (place, listed)
            })
            .collect()
    }

    /// [`pinnable_locations`](Self::pinnable_locations) decorated for
    /// rendering, in `PlaceId` order.
    pub fn pins(&self, regulations: &[Regulation]) -> Vec<Pin> {
        self.pinnable_locations(regulations)
            .into_iter()
            .filter_map(|(place, listed)| {
                let entry = self.coordinates.coordinates_of(place)?;
                Some(Pin {
                    place,
                    display_name: entry.display_name,
                    coordinate: entry.coordinate,
                    level: entry.level,
                    regulation_ids: listed.into_iter().map(|r| r.id.clone()).collect(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_geo::policy::GLOBAL_PIN_COUNTRIES;

    fn reg(id: &str, jurisdiction: &str, country: &str) -> Regulation {
        Regulation::new(id, jurisdiction, country).unwrap()
    }

    fn ids(listed: &[&Regulation]) -> Vec<String> {
        listed.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn primary_location_prefers_jurisdiction() {
        let engine = LocationEngine::global();
        assert_eq!(
            engine.primary_location(&reg("a", "California", "United States")),
            Some(PlaceId::California)
        );
        assert_eq!(
            engine.primary_location(&reg("b", "EU", "France")),
            Some(PlaceId::France)
        );
        assert_eq!(engine.primary_location(&reg("c", "Global", "Global")), None);
        assert_eq!(engine.primary_location(&reg("d", "EU", "European Union")), None);
    }

    #[test]
    fn state_pin_absorbs_country_pin() {
        let regs = vec![
            reg("ca-sb-253", "California", "United States"),
            reg("sec-climate", "US", "United States"),
        ];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        assert!(!pins.contains_key(&PlaceId::UnitedStates));
        assert_eq!(
            ids(&pins[&PlaceId::California]),
            ["ca-sb-253", "sec-climate"]
        );
        assert_eq!(pins.len(), 1);
    }

    #[test]
    fn country_pin_kept_without_states() {
        let regs = vec![reg("sec-climate", "US", "United States")];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        assert_eq!(ids(&pins[&PlaceId::UnitedStates]), ["sec-climate"]);
    }

    #[test]
    fn eu_regulation_pins_every_member() {
        let regs = vec![reg("csrd", "EU", "European Union"), reg("fr", "France", "France")];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        assert_eq!(pins.len(), 27);
        assert_eq!(ids(&pins[&PlaceId::France]), ["csrd", "fr"]);
        assert_eq!(ids(&pins[&PlaceId::Malta]), ["csrd"]);
    }

    #[test]
    fn global_regulation_uses_stand_in_pins() {
        let regs = vec![reg("issb", "Global", "")];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        let places: BTreeSet<_> = pins.keys().copied().collect();
        assert_eq!(places, GLOBAL_PIN_COUNTRIES.iter().copied().collect());
    }

    #[test]
    fn proposed_pin_lists_its_regulation_even_outside_target_region() {
        // The Asia-Pacific expansion includes Australia, which is Oceania.
        let regs = vec![reg("asean", "Asia-Pacific", "")];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        assert_eq!(ids(&pins[&PlaceId::Australia]), ["asean"]);
    }

    #[test]
    fn listed_on_pin_does_not_imply_applicability() {
        let engine = LocationEngine::global();
        let asean = reg("asean", "Asia-Pacific", "");
        let pins = engine.pinnable_locations(std::slice::from_ref(&asean));
        assert_eq!(ids(&pins[&PlaceId::Australia]), ["asean"]);
        assert!(!engine.applies_to_place(&asean, "Australia"));
    }

    #[test]
    fn absorption_only_drops_the_parent_country() {
        let regs = vec![
            reg("ca-sb-253", "California", "United States"),
            reg("osfi", "Canada", "Canada"),
        ];
        let pins = LocationEngine::global().pinnable_locations(&regs);
        assert!(pins.contains_key(&PlaceId::Canada));
        assert!(pins.contains_key(&PlaceId::California));
        assert!(!pins.contains_key(&PlaceId::UnitedStates));
    }

    #[test]
    fn unplaceable_regulation_has_no_pin() {
        let regs = vec![reg("x", "Africa", "")];
        assert!(LocationEngine::global().pinnable_locations(&regs).is_empty());
    }

    #[test]
    fn pins_carry_display_names() {
        let regs = vec![reg("qc", "Quebec", "Canada"), reg("tr", "Turkey", "")];
        let pins = LocationEngine::global().pins(&regs);
        let names: Vec<_> = pins.iter().map(|p| p.display_name).collect();
        assert_eq!(names, ["Türkiye", "Québec"]);
        assert_eq!(pins[1].level, PlaceLevel::State);
    }
}
