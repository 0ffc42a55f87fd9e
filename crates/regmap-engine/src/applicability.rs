//! # Applicability Queries
//!
//! "Does regulation R apply to place P?" and "which regulations apply
//! to P?", answered against the unified target of each regulation.
//!
//! | Target | Applies to a place when |
//! |--------|-------------------------|
//! | `Global` | always, even for unknown places |
//! | `Region(r)` | the place is in `r`, or the query is a bucket covering `r` |
//! | `Location(p)` | the place is `p`, or `p` is in its ancestor chain |

use std::collections::HashSet;

use regmap_core::{PlaceId, Regulation, RegulationTarget};
use regmap_geo::Ancestor;

use crate::query::{bucket_covers_target, PlaceQuery};
use crate::LocationEngine;

impl LocationEngine<'_> {
    /// Returns `true` if the regulation applies to the named place or
    /// region bucket.
    pub fn applies_to_place(&self, regulation: &Regulation, place: &str) -> bool {
        self.applies_to_query(regulation, &PlaceQuery::parse(place))
    }

    /// Returns `true` if the regulation applies to a known place.
    pub fn applies_to(&self, regulation: &Regulation, place: PlaceId) -> bool {
        self.target_applies(self.resolve_target(regulation), &PlaceQuery::Place(place))
    }

    pub fn applies_to_query(&self, regulation: &Regulation, query: &PlaceQuery) -> bool {
        self.target_applies(self.resolve_target(regulation), query)
    }

    /// Applicability of an already resolved target.
    pub fn target_applies(&self, target: RegulationTarget, query: &PlaceQuery) -> bool {
        match (target, query) {
            (RegulationTarget::Global, _) => true,
            (RegulationTarget::Region(region), PlaceQuery::Place(place)) => {
                self.hierarchy.is_in_region(*place, region)
            }
            (RegulationTarget::Region(region), PlaceQuery::Bucket(bucket)) => {
                bucket_covers_target(*bucket, region)
            }
            (RegulationTarget::Location(target), PlaceQuery::Place(place)) => {
                target == *place
                    || self
                        .hierarchy
                        .ancestors(*place)
                        .contains(&Ancestor::Place(target))
            }
            (RegulationTarget::Region(_) | RegulationTarget::Location(_), _) => false,
        }
    }

    /// Regulations applying to the named place, in input order,
    /// de-duplicated by id (first occurrence kept).
    pub fn regulations_for_place<'a>(
        &self,
        place: &str,
        regulations: &'a [Regulation],
    ) -> Vec<&'a Regulation> {
        let query = PlaceQuery::parse(place);
        if let PlaceQuery::Unknown(text) = &query {
            tracing::debug!(place = %text, "regulation query for unknown place; only global rules apply");
        }
        self.regulations_matching(&query, regulations)
    }

    pub fn regulations_matching<'a>(
        &self,
        query: &PlaceQuery,
        regulations: &'a [Regulation],
    ) -> Vec<&'a Regulation> {
        let mut seen = HashSet::new();
        regulations
            .iter()
            .filter(|r| self.applies_to_query(r, query))
            .filter(|r| seen.insert(r.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reg(id: &str, jurisdiction: &str, country: &str) -> Regulation {
        Regulation::new(id, jurisdiction, country).unwrap()
    }

    fn applies(jurisdiction: &str, country: &str, place: &str) -> bool {
        LocationEngine::global().applies_to_place(&reg("r", jurisdiction, country), place)
    }

    #[test]
    fn eu_region_applies_to_members_only() {
        assert!(applies("EU", "", "France"));
        assert!(applies("EU", "", "Bavaria"));
        assert!(!applies("EU", "", "Japan"));
        assert!(!applies("EU", "", "United Kingdom"));
    }

    #[test]
    fn federal_rule_applies_to_states() {
        assert!(applies("US", "United States", "California"));
        assert!(applies("US", "United States", "United States"));
        assert!(applies("US", "United States", "usa"));
        assert!(!applies("US", "United States", "Ontario"));
    }

    #[test]
    fn state_rule_does_not_apply_to_country() {
        assert!(applies("California", "United States", "California"));
        assert!(!applies("California", "United States", "United States"));
        assert!(!applies("California", "United States", "Texas"));
    }

    #[test]
    fn location_inside_eu_does_not_leak_to_region() {
        // A French rule does not apply to Germany through the shared region.
        assert!(!applies("France", "France", "Germany"));
    }

    #[test]
    fn region_rules_match_buckets() {
        assert!(applies("EU", "", "EU"));
        assert!(applies("EU", "", "Europe"));
        assert!(!applies("EU", "", "Africa"));
        assert!(applies("Asia-Pacific", "", "Asia"));
        assert!(applies("Asia-Pacific", "", "Oceania"));
        assert!(applies("North America", "", "Mexico"));
    }

    #[test]
    fn asia_pacific_region_excludes_oceania_places() {
        assert!(applies("Asia-Pacific", "", "Japan"));
        assert!(!applies("Asia-Pacific", "", "Australia"));
    }

    #[test]
    fn location_rules_never_match_buckets_or_unknowns() {
        assert!(!applies("France", "", "Europe"));
        assert!(!applies("France", "", "Atlantis"));
        assert!(!applies("EU", "", "Atlantis"));
    }

    #[test]
    fn regulations_for_place_dedups_and_keeps_order() {
        let regs = vec![
            reg("ca-sb-253", "California", "United States"),
            reg("issb", "Global", ""),
            reg("sec-climate", "US", "United States"),
            reg("issb", "Global", ""),
            reg("csrd", "EU", ""),
        ];
        let ids: Vec<_> = LocationEngine::global()
            .regulations_for_place("California", &regs)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["ca-sb-253", "issb", "sec-climate"]);
    }

    #[test]
    fn unknown_place_only_sees_global_rules() {
        let regs = vec![reg("issb", "Global", ""), reg("csrd", "EU", "")];
        let found = LocationEngine::global().regulations_for_place("Narnia", &regs);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "issb");
    }

    proptest! {
        #[test]
        fn global_rules_apply_everywhere(place in ".{0,24}") {
            prop_assert!(applies("Global", "", &place));
            prop_assert!(applies("Japan", "Global", &place));
        }

        #[test]
        fn location_rule_applies_to_its_own_place(idx in 0..PlaceId::all().len()) {
            let place = PlaceId::all()[idx];
            let engine = LocationEngine::global();
            let target = RegulationTarget::Location(place);
            prop_assert!(engine.target_applies(target, &PlaceQuery::Place(place)));
        }
    }
}
