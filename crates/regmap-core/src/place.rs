//! # Place Identifiers
//!
//! `PlaceId` enumerates every place known to the static location tables:
//! the union of the hierarchy (countries and sub-national units) and the
//! map coordinate table. A `PlaceId` is only ever produced from text by
//! an explicit parse or alias resolution, so a misspelled country name
//! surfaces as "unknown place" instead of silently matching nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::ValidationError;

/// A place known to the location tables.
///
/// Variants are grouped by geography for readability only; the region a
/// place belongs to is decided by the hierarchy table in `regmap-geo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceId {
    // North America
    UnitedStates,
    Canada,
    Mexico,
    PuertoRico,
    Greenland,
    // South America
    Brazil,
    Argentina,
    Chile,
    Colombia,
    Peru,
    // EU member states
    Austria,
    Belgium,
    Bulgaria,
    Croatia,
    Cyprus,
    CzechRepublic,
    Denmark,
    Estonia,
    Finland,
    France,
    Germany,
    Greece,
    Hungary,
    Ireland,
    Italy,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Poland,
    Portugal,
    Romania,
    Slovakia,
    Slovenia,
    Spain,
    Sweden,
    // Europe outside the EU
    UnitedKingdom,
    Switzerland,
    Norway,
    Iceland,
    Turkey,
    Ukraine,
    // Asia-Pacific
    China,
    Japan,
    SouthKorea,
    India,
    Singapore,
    HongKong,
    Taiwan,
    Indonesia,
    Malaysia,
    Thailand,
    Vietnam,
    Philippines,
    // Asia
    Pakistan,
    Bangladesh,
    SriLanka,
    Kazakhstan,
    // Oceania
    Australia,
    NewZealand,
    // Middle East
    UnitedArabEmirates,
    SaudiArabia,
    Israel,
    Qatar,
    // Africa
    SouthAfrica,
    Nigeria,
    Kenya,
    Egypt,
    Morocco,
    // US states
    California,
    NewYork,
    Texas,
    Washington,
    Massachusetts,
    Illinois,
    Colorado,
    NewJersey,
    // Canadian provinces
    Ontario,
    Quebec,
    BritishColumbia,
    Alberta,
    // German Länder
    Bavaria,
    Berlin,
    BadenWurttemberg,
    NorthRhineWestphalia,
}

/// Total number of enumerated places.
pub const PLACE_COUNT: usize = 86;

impl PlaceId {
    /// Returns every place in canonical order.
    pub fn all() -> &'static [PlaceId] {
        &[
            Self::UnitedStates,
            Self::Canada,
            Self::Mexico,
            Self::PuertoRico,
            Self::Greenland,
            Self::Brazil,
            Self::Argentina,
            Self::Chile,
            Self::Colombia,
            Self::Peru,
            Self::Austria,
            Self::Belgium,
            Self::Bulgaria,
            Self::Croatia,
            Self::Cyprus,
            Self::CzechRepublic,
            Self::Denmark,
            Self::Estonia,
            Self::Finland,
            Self::France,
            Self::Germany,
            Self::Greece,
            Self::Hungary,
            Self::Ireland,
            Self::Italy,
            Self::Latvia,
            Self::Lithuania,
            Self::Luxembourg,
            Self::Malta,
            Self::Netherlands,
            Self::Poland,
            Self::Portugal,
            Self::Romania,
            Self::Slovakia,
            Self::Slovenia,
            Self::Spain,
            Self::Sweden,
            Self::UnitedKingdom,
            Self::Switzerland,
            Self::Norway,
            Self::Iceland,
            Self::Turkey,
            Self::Ukraine,
            Self::China,
            Self::Japan,
            Self::SouthKorea,
            Self::India,
            Self::Singapore,
            Self::HongKong,
            Self::Taiwan,
            Self::Indonesia,
            Self::Malaysia,
            Self::Thailand,
            Self::Vietnam,
            Self::Philippines,
            Self::Pakistan,
            Self::Bangladesh,
            Self::SriLanka,
            Self::Kazakhstan,
            Self::Australia,
            Self::NewZealand,
            Self::UnitedArabEmirates,
            Self::SaudiArabia,
            Self::Israel,
            Self::Qatar,
            Self::SouthAfrica,
            Self::Nigeria,
            Self::Kenya,
            Self::Egypt,
            Self::Morocco,
            Self::California,
            Self::NewYork,
            Self::Texas,
            Self::Washington,
            Self::Massachusetts,
            Self::Illinois,
            Self::Colorado,
            Self::NewJersey,
            Self::Ontario,
            Self::Quebec,
            Self::BritishColumbia,
            Self::Alberta,
            Self::Bavaria,
            Self::Berlin,
            Self::BadenWurttemberg,
            Self::NorthRhineWestphalia,
        ]
    }

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitedStates => "United States",
            Self::Canada => "Canada",
            Self::Mexico => "Mexico",
            Self::PuertoRico => "Puerto Rico",
            Self::Greenland => "Greenland",
            Self::Brazil => "Brazil",
            Self::Argentina => "Argentina",
            Self::Chile => "Chile",
            Self::Colombia => "Colombia",
            Self::Peru => "Peru",
            Self::Austria => "Austria",
            Self::Belgium => "Belgium",
            Self::Bulgaria => "Bulgaria",
            Self::Croatia => "Croatia",
            Self::Cyprus => "Cyprus",
            Self::CzechRepublic => "Czech Republic",
            Self::Denmark => "Denmark",
            Self::Estonia => "Estonia",
            Self::Finland => "Finland",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::Hungary => "Hungary",
            Self::Ireland => "Ireland",
            Self::Italy => "Italy",
            Self::Latvia => "Latvia",
            Self::Lithuania => "Lithuania",
            Self::Luxembourg => "Luxembourg",
            Self::Malta => "Malta",
            Self::Netherlands => "Netherlands",
            Self::Poland => "Poland",
            Self::Portugal => "Portugal",
            Self::Romania => "Romania",
            Self::Slovakia => "Slovakia",
            Self::Slovenia => "Slovenia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::UnitedKingdom => "United Kingdom",
            Self::Switzerland => "Switzerland",
            Self::Norway => "Norway",
            Self::Iceland => "Iceland",
            Self::Turkey => "Turkey",
            Self::Ukraine => "Ukraine",
            Self::China => "China",
            Self::Japan => "Japan",
            Self::SouthKorea => "South Korea",
            Self::India => "India",
            Self::Singapore => "Singapore",
            Self::HongKong => "Hong Kong",
            Self::Taiwan => "Taiwan",
            Self::Indonesia => "Indonesia",
            Self::Malaysia => "Malaysia",
            Self::Thailand => "Thailand",
            Self::Vietnam => "Vietnam",
            Self::Philippines => "Philippines",
            Self::Pakistan => "Pakistan",
            Self::Bangladesh => "Bangladesh",
            Self::SriLanka => "Sri Lanka",
            Self::Kazakhstan => "Kazakhstan",
            Self::Australia => "Australia",
            Self::NewZealand => "New Zealand",
            Self::UnitedArabEmirates => "United Arab Emirates",
            Self::SaudiArabia => "Saudi Arabia",
            Self::Israel => "Israel",
            Self::Qatar => "Qatar",
            Self::SouthAfrica => "South Africa",
            Self::Nigeria => "Nigeria",
            Self::Kenya => "Kenya",
            Self::Egypt => "Egypt",
            Self::Morocco => "Morocco",
            Self::California => "California",
            Self::NewYork => "New York",
            Self::Texas => "Texas",
            Self::Washington => "Washington",
            Self::Massachusetts => "Massachusetts",
            Self::Illinois => "Illinois",
            Self::Colorado => "Colorado",
            Self::NewJersey => "New Jersey",
            Self::Ontario => "Ontario",
            Self::Quebec => "Quebec",
            Self::BritishColumbia => "British Columbia",
            Self::Alberta => "Alberta",
            Self::Bavaria => "Bavaria",
            Self::Berlin => "Berlin",
            Self::BadenWurttemberg => "Baden-Württemberg",
            Self::NorthRhineWestphalia => "North Rhine-Westphalia",
        }
    }

    /// Look up a place by canonical name, ignoring case and surrounding
    /// whitespace. Aliases are not considered here; see
    /// `regmap_geo::resolve_place`.
    pub fn from_canonical_name(name: &str) -> Option<PlaceId> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str().to_lowercase() == needle)
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical_name(s).ok_or_else(|| ValidationError::UnknownPlace(s.to_string()))
    }
}

impl Serialize for PlaceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A geographic coordinate in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
