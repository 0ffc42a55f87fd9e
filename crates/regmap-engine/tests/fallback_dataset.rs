//! End-to-end queries over the built-in fallback dataset.

use std::collections::BTreeSet;

use regmap_core::{PlaceId, Region, Regulation, RegulationTarget, ScopeLevel};
use regmap_engine::{Dataset, LocationEngine, RegulationFilter};
use regmap_geo::policy::EU_MEMBER_STATES;
use regmap_geo::CoordinateTable;

fn ids(regs: &[&Regulation]) -> Vec<String> {
    regs.iter().map(|r| r.id.to_string()).collect()
}

#[test]
fn california_sees_state_federal_and_global_rules() {
    let dataset = Dataset::fallback();
    let engine = LocationEngine::global();
    let found = ids(&engine.regulations_for_place("California", dataset.regulations()));
    for id in ["us-sec-climate", "ca-sb-253", "ca-sb-261", "na-usmca-environment", "issb-ifrs-s2", "ghg-protocol"] {
        assert!(found.contains(&id.to_string()), "missing {id}");
    }
    assert!(!found.contains(&"ny-climate-superfund".to_string()));
    assert!(!found.contains(&"qc-cap-and-trade".to_string()));
}

#[test]
fn ontario_does_not_see_us_rules() {
    let dataset = Dataset::fallback();
    let found = ids(&LocationEngine::global().regulations_for_place("Ontario", dataset.regulations()));
    assert!(found.contains(&"ca-osfi-b15".to_string()));
    assert!(!found.contains(&"us-sec-climate".to_string()));
    assert!(!found.contains(&"qc-cap-and-trade".to_string()));
}

#[test]
fn france_and_japan_split_on_eu_rules() {
    let dataset = Dataset::fallback();
    let engine = LocationEngine::global();
    let csrd = dataset.get("eu-csrd").unwrap();
    assert_eq!(engine.resolve_target(csrd), RegulationTarget::Region(Region::Eu));
    assert!(engine.applies_to_place(csrd, "France"));
    assert!(!engine.applies_to_place(csrd, "Japan"));
}

#[test]
fn eu_scope_pins_all_members() {
    let expected: BTreeSet<_> = EU_MEMBER_STATES.iter().copied().collect();
    let actual = CoordinateTable::global().countries_for_regulation_scope("EU", "European Union");
    assert_eq!(actual, expected);
}

#[test]
fn scope_groups_partition_the_dataset() {
    let dataset = Dataset::fallback();
    let groups = LocationEngine::global().group_by_scope(dataset.regulations());
    assert_eq!(groups.total(), dataset.len());
    let state: Vec<_> = groups
        .bucket(ScopeLevel::State)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(
        state,
        ["de-by-climate-act", "ca-sb-253", "ca-sb-261", "ny-climate-superfund", "qc-cap-and-trade"]
    );
}

#[test]
fn state_pins_absorb_their_countries() {
    let dataset = Dataset::fallback();
    let pins = LocationEngine::global().pinnable_locations(dataset.regulations());
    assert!(!pins.contains_key(&PlaceId::UnitedStates));
    assert!(!pins.contains_key(&PlaceId::Canada));
    assert!(!pins.contains_key(&PlaceId::Germany));

    let california = ids(&pins[&PlaceId::California]);
    assert!(california.contains(&"ca-sb-253".to_string()));
    assert!(california.contains(&"us-sec-climate".to_string()));
    assert!(pins.contains_key(&PlaceId::Bavaria));
    assert!(pins.contains_key(&PlaceId::Quebec));
}

#[test]
fn every_pin_has_coordinates() {
    let dataset = Dataset::fallback();
    let engine = LocationEngine::global();
    let pins = engine.pins(dataset.regulations());
    assert!(!pins.is_empty());
    for pin in &pins {
        assert!(engine.coordinates().has_coordinates(pin.place));
        assert!(!pin.regulation_ids.is_empty(), "empty pin {}", pin.place);
    }
}

#[test]
fn search_by_region_bucket() {
    let dataset = Dataset::fallback();
    let filter = RegulationFilter::default()
        .with_location("Oceania")
        .with_category("Disclosure");
    let found = ids(&LocationEngine::global().filter_regulations(&filter, dataset.regulations()));
    assert_eq!(found, ["au-asrs"]);
}

#[test]
fn sidebar_lists_eu_and_europe_separately() {
    let dataset = Dataset::fallback();
    let groups = LocationEngine::global().sidebar_groups(dataset.regulations());
    assert_eq!(groups[&Region::Eu], [PlaceId::France, PlaceId::Germany]);
    assert_eq!(groups[&Region::Europe], [PlaceId::UnitedKingdom]);
    assert_eq!(groups[&Region::NorthAmerica], [PlaceId::UnitedStates, PlaceId::Canada]);
}
