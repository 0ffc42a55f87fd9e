//! # Place Queries
//!
//! UI components ask about places with free text: a map click, a sidebar
//! checkbox, a search filter value. [`PlaceQuery::parse`] classifies that
//! text once so the engine only branches on typed values.
//!
//! ## Region buckets
//!
//! Some sidebar entries are buckets rather than places ("Europe",
//! "Asia", "Oceania", ...). A bucket contains the places of its own
//! region, plus:
//!
//! - `Europe` also contains the `EU` bucket,
//! - `Asia` also contains the `Asia-Pacific` bucket.
//!
//! For region-targeted regulations, `Oceania` additionally sees
//! regulations targeting all of `Asia-Pacific`.

use regmap_core::{PlaceId, Region};
use regmap_geo::resolve_place;
use serde::{Deserialize, Serialize};

/// Free text classified as a place, a region bucket, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PlaceQuery {
    Place(PlaceId),
    Bucket(Region),
    Unknown(String),
}

impl PlaceQuery {
    /// Classify text. Place names (and aliases) take precedence over
    /// region names.
    pub fn parse(text: &str) -> Self {
        if let Some(place) = resolve_place(text) {
            return Self::Place(place);
        }
        match text.parse::<Region>() {
            Ok(region) => Self::Bucket(region),
            Err(_) => Self::Unknown(text.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Place(p) => p.as_str(),
            Self::Bucket(r) => r.as_str(),
            Self::Unknown(text) => text,
        }
    }
}

/// Returns `true` if places of `region` belong in the sidebar bucket.
pub fn bucket_contains_region(bucket: Region, region: Region) -> bool {
    bucket == region
        || matches!(
            (bucket, region),
            (Region::Europe, Region::Eu) | (Region::Asia, Region::AsiaPacific)
        )
}

/// Returns `true` if a regulation targeting all of `target` applies
/// within the sidebar bucket.
pub fn bucket_covers_target(bucket: Region, target: Region) -> bool {
    bucket_contains_region(bucket, target)
        || (bucket == Region::Oceania && target == Region::AsiaPacific)
}
