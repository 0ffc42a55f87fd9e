//! # Regions and Place Levels
//!
//! Defines the `Region` enum, the single set of macro-geographic and
//! regulatory buckets used to group places for scope matching, and
//! `PlaceLevel`, the granularity of a place in the hierarchy.
//!
//! `Region::Eu` and `Region::Europe` are distinct buckets. EU member
//! states belong to `Eu`; every other European country belongs to
//! `Europe`. The split is a filter-grouping policy, not geography.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::ValidationError;

/// A macro-geographic or regulatory bucket.
///
/// | Variant | Display name |
/// |---------|--------------|
/// | `NorthAmerica` | North America |
/// | `SouthAmerica` | South America |
/// | `Eu` | EU |
/// | `Europe` | Europe |
/// | `AsiaPacific` | Asia-Pacific |
/// | `Asia` | Asia |
/// | `Africa` | Africa |
/// | `MiddleEast` | Middle East |
/// | `Oceania` | Oceania |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Eu,
    Europe,
    AsiaPacific,
    Asia,
    Africa,
    MiddleEast,
    Oceania,
}

impl Region {
    /// Returns all regions in canonical order.
    pub fn all() -> &'static [Region] {
        &[
            Self::NorthAmerica,
            Self::SouthAmerica,
            Self::Eu,
            Self::Europe,
            Self::AsiaPacific,
            Self::Asia,
            Self::Africa,
            Self::MiddleEast,
            Self::Oceania,
        ]
    }

    /// Returns the display name used by the filter sidebar and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Eu => "EU",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia-Pacific",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::MiddleEast => "Middle East",
            Self::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    /// Parse a region from its display name, case-insensitively.
    ///
    /// "Asia Pacific" is accepted for `AsiaPacific` and "European Union"
    /// for `Eu`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "north america" => Ok(Self::NorthAmerica),
            "south america" => Ok(Self::SouthAmerica),
            "eu" | "european union" => Ok(Self::Eu),
            "europe" => Ok(Self::Europe),
            "asia-pacific" | "asia pacific" => Ok(Self::AsiaPacific),
            "asia" => Ok(Self::Asia),
            "africa" => Ok(Self::Africa),
            "middle east" => Ok(Self::MiddleEast),
            "oceania" => Ok(Self::Oceania),
            _ => Err(ValidationError::UnknownRegion(s.to_string())),
        }
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Granularity of a place in the location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceLevel {
    /// A sovereign country (or territory drawn as a country pin).
    Country,
    /// A sub-national unit: US state, Canadian province, German Land.
    State,
}

impl PlaceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::State => "state",
        }
    }
}

impl std::fmt::Display for PlaceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
