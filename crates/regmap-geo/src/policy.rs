//! # Regional Policy Tables
//!
//! Fixed lists that encode product decisions rather than geography:
//! which countries count as EU members for filter grouping, and which
//! countries stand in as map pins for regulations that have no single
//! country.
//!
//! `GLOBAL_PIN_COUNTRIES` is a display compromise. A global regulation
//! applies everywhere, but the map still needs somewhere to draw it, so
//! it is pinned on a fixed set of major economies.

use regmap_core::PlaceId;

/// The 27 member states of the European Union.
///
/// Countries in this list are assigned `Region::Eu` by the hierarchy;
/// every other European country is assigned `Region::Europe`.
pub const EU_MEMBER_STATES: [PlaceId; 27] = [
    PlaceId::Austria,
    PlaceId::Belgium,
    PlaceId::Bulgaria,
    PlaceId::Croatia,
    PlaceId::Cyprus,
    PlaceId::CzechRepublic,
    PlaceId::Denmark,
    PlaceId::Estonia,
    PlaceId::Finland,
    PlaceId::France,
    PlaceId::Germany,
    PlaceId::Greece,
    PlaceId::Hungary,
    PlaceId::Ireland,
    PlaceId::Italy,
    PlaceId::Latvia,
    PlaceId::Lithuania,
    PlaceId::Luxembourg,
    PlaceId::Malta,
    PlaceId::Netherlands,
    PlaceId::Poland,
    PlaceId::Portugal,
    PlaceId::Romania,
    PlaceId::Slovakia,
    PlaceId::Slovenia,
    PlaceId::Spain,
    PlaceId::Sweden,
];

/// Pins drawn for a regulation scoped to "Asia" / "Asia Pacific".
pub const ASIA_PACIFIC_PIN_COUNTRIES: [PlaceId; 13] = [
    PlaceId::China,
    PlaceId::Japan,
    PlaceId::SouthKorea,
    PlaceId::India,
    PlaceId::Singapore,
    PlaceId::Australia,
    PlaceId::NewZealand,
    PlaceId::HongKong,
    PlaceId::Taiwan,
    PlaceId::Indonesia,
    PlaceId::Malaysia,
    PlaceId::Thailand,
    PlaceId::Philippines,
];

/// Pins drawn for a regulation scoped "Global" / "International".
pub const GLOBAL_PIN_COUNTRIES: [PlaceId; 10] = [
    PlaceId::UnitedStates,
    PlaceId::China,
    PlaceId::Japan,
    PlaceId::Germany,
    PlaceId::UnitedKingdom,
    PlaceId::France,
    PlaceId::India,
    PlaceId::Brazil,
    PlaceId::Canada,
    PlaceId::Australia,
];

/// Members of the North American trade bloc.
pub const NAFTA_COUNTRIES: [PlaceId; 3] = [PlaceId::UnitedStates, PlaceId::Canada, PlaceId::Mexico];

/// Jurisdiction/country values that never name a specific place.
pub const SCOPE_SENTINELS: [&str; 3] = ["Unknown", "Global", "European Union"];

/// Macro-region keywords recognised in a jurisdiction, matched
/// case-insensitively after trimming, with the pins each expands to.
pub const MACRO_REGION_KEYWORDS: &[(&str, &[PlaceId])] = &[
    ("eu", &EU_MEMBER_STATES),
    ("europe", &EU_MEMBER_STATES),
    ("european union", &EU_MEMBER_STATES),
    ("us", &[PlaceId::UnitedStates]),
    ("usa", &[PlaceId::UnitedStates]),
    ("united states", &[PlaceId::UnitedStates]),
    ("north america", &[PlaceId::UnitedStates]),
    ("canada", &[PlaceId::Canada]),
    ("mexico", &[PlaceId::Mexico]),
    ("nafta", &NAFTA_COUNTRIES),
    ("asia", &ASIA_PACIFIC_PIN_COUNTRIES),
    ("asia pacific", &ASIA_PACIFIC_PIN_COUNTRIES),
    ("asia-pacific", &ASIA_PACIFIC_PIN_COUNTRIES),
    ("asian", &ASIA_PACIFIC_PIN_COUNTRIES),
    ("global", &GLOBAL_PIN_COUNTRIES),
    ("international", &GLOBAL_PIN_COUNTRIES),
];

/// Returns `true` if the text is one of [`SCOPE_SENTINELS`].
pub fn is_scope_sentinel(text: &str) -> bool {
    let text = text.trim();
    SCOPE_SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(text))
}

/// Expand a macro-region keyword to its pin countries.
pub fn macro_region_countries(keyword: &str) -> Option<&'static [PlaceId]> {
    let keyword = keyword.trim().to_lowercase();
    MACRO_REGION_KEYWORDS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, places)| *places)
}
