//! # Regulation Scope to Pins
//!
//! Decides under which map pins a regulation appears, from its
//! jurisdiction and country text alone.
//!
//! Priority order:
//!
//! 1. The jurisdiction names a specific pinnable place (and is not a
//!    sentinel such as "Global") → that place only.
//! 2. The country does → that place only.
//! 3. The jurisdiction is a macro-region keyword (`eu`, `nafta`,
//!    `asia pacific`, `global`, ...) → the keyword's pin list.
//! 4. The jurisdiction alone resolves to a pinnable place → that place.
//!
//! Anything else yields no pins.

use std::collections::BTreeSet;

use regmap_core::PlaceId;

use crate::coordinates::CoordinateTable;
use crate::policy::{is_scope_sentinel, macro_region_countries};

impl CoordinateTable {
    /// Resolve text to a single pinnable place, ignoring scope sentinels.
    pub fn specific_place(&self, text: &str) -> Option<PlaceId> {
        if is_scope_sentinel(text) {
            return None;
        }
        self.resolve_pinnable(text)
    }

    /// The set of places whose pins should list a regulation with this
    /// jurisdiction and country.
    pub fn countries_for_regulation_scope(
        &self,
        jurisdiction: &str,
        country: &str,
    ) -> BTreeSet<PlaceId> {
        if let Some(place) = self.specific_place(jurisdiction) {
            return BTreeSet::from([place]);
        }
        if let Some(place) = self.specific_place(country) {
            return BTreeSet::from([place]);
        }
        if let Some(places) = macro_region_countries(jurisdiction) {
            return places.iter().copied().collect();
        }
        match self.resolve_pinnable(jurisdiction) {
            Some(place) => BTreeSet::from([place]),
            None => {
                tracing::debug!(
                    jurisdiction,
                    country,
                    "regulation scope matches no pinnable place"
                );
                BTreeSet::new()
            }
        }
    }
}
