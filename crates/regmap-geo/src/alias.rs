//! # Free-Text Place Resolution
//!
//! The only entry point from free text to [`PlaceId`]. Canonical names
//! and registered aliases are matched case-insensitively after trimming.
//! Resolution is a fixed point: resolving an already-resolved name
//! yields the same name.

use regmap_core::PlaceId;

/// Alternative spellings and legacy codes, mapped to their place.
///
/// Canonical names are implicit aliases of themselves and are not
/// repeated here.
pub const ALIASES: &[(&str, PlaceId)] = &[
    ("US", PlaceId::UnitedStates),
    ("USA", PlaceId::UnitedStates),
    ("U.S.", PlaceId::UnitedStates),
    ("U.S.A.", PlaceId::UnitedStates),
    ("United States of America", PlaceId::UnitedStates),
    ("America", PlaceId::UnitedStates),
    ("UK", PlaceId::UnitedKingdom),
    ("U.K.", PlaceId::UnitedKingdom),
    ("Great Britain", PlaceId::UnitedKingdom),
    ("Britain", PlaceId::UnitedKingdom),
    ("England", PlaceId::UnitedKingdom),
    ("Czechia", PlaceId::CzechRepublic),
    ("Holland", PlaceId::Netherlands),
    ("The Netherlands", PlaceId::Netherlands),
    ("Deutschland", PlaceId::Germany),
    ("Korea", PlaceId::SouthKorea),
    ("Republic of Korea", PlaceId::SouthKorea),
    ("PRC", PlaceId::China),
    ("People's Republic of China", PlaceId::China),
    ("Hong Kong SAR", PlaceId::HongKong),
    ("Viet Nam", PlaceId::Vietnam),
    ("Türkiye", PlaceId::Turkey),
    ("Turkiye", PlaceId::Turkey),
    ("UAE", PlaceId::UnitedArabEmirates),
    ("Emirates", PlaceId::UnitedArabEmirates),
    ("KSA", PlaceId::SaudiArabia),
    ("Washington State", PlaceId::Washington),
    ("Québec", PlaceId::Quebec),
    ("Bayern", PlaceId::Bavaria),
    ("Baden-Wurttemberg", PlaceId::BadenWurttemberg),
    ("Baden-Wuerttemberg", PlaceId::BadenWurttemberg),
    ("Nordrhein-Westfalen", PlaceId::NorthRhineWestphalia),
    ("NRW", PlaceId::NorthRhineWestphalia),
];

/// Resolve free text to a place, by canonical name or alias.
pub fn resolve_place(text: &str) -> Option<PlaceId> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(id) = PlaceId::from_canonical_name(trimmed) {
        return Some(id);
    }
    let needle = trimmed.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| alias.to_lowercase() == needle)
        .map(|(_, id)| *id)
}

/// Resolve free text to a canonical place name, or return it unchanged.
pub fn resolve_alias(text: &str) -> &str {
    match resolve_place(text) {
        Some(id) => id.as_str(),
        None => text,
    }
}
