//! # Regulation Records and Resolved Targets
//!
//! A [`Regulation`] is owned by the data-fetch layer and consumed here
//! read-only. The location engine only reads `id`, `jurisdiction` and
//! `country`; the remaining display fields feed the search predicate.
//!
//! [`RegulationTarget`] and [`ScopeLevel`] are derived on demand from a
//! regulation's jurisdiction/country text and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::place::PlaceId;
use crate::region::Region;

/// Unique identifier of a regulation record.
///
/// # Validation
///
/// Must be a non-empty string after trimming. No further format is
/// imposed: ids come from the hosted database or the fallback dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegulationId(String);

impl RegulationId {
    /// Create a regulation identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRegulationId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyRegulationId);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegulationId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegulationId> for String {
    fn from(id: RegulationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RegulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sustainability/ESG regulation as supplied by the data-fetch layer.
///
/// `jurisdiction` is free text: a country name, a region code, or a
/// legacy alias such as "US", "UK" or "EU". `country` may be empty,
/// "Global", "European Union", or a specific country name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: RegulationId,
    #[serde(default)]
    pub jurisdiction: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl Regulation {
    /// Create a regulation carrying only the fields the location engine reads.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRegulationId`] for an empty id.
    pub fn new(
        id: impl Into<String>,
        jurisdiction: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: RegulationId::new(id)?,
            jurisdiction: jurisdiction.into(),
            country: country.into(),
            title: None,
            summary: None,
            category: None,
            status: None,
            effective_date: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// The resolved applicability scope of a single regulation.
///
/// Serialized adjacently tagged:
/// `{"kind":"global"}`, `{"kind":"region","value":"EU"}`,
/// `{"kind":"location","value":"California"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RegulationTarget {
    /// Applies everywhere.
    Global,
    /// Applies to every place in a regional bucket.
    Region(Region),
    /// Applies to one place and everything beneath it in the hierarchy.
    Location(PlaceId),
}

impl std::fmt::Display for RegulationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Region(r) => write!(f, "region:{r}"),
            Self::Location(p) => write!(f, "location:{p}"),
        }
    }
}

/// Coarse scope bucket a regulation is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    Global,
    Regional,
    Country,
    State,
}

impl ScopeLevel {
    pub fn all() -> &'static [ScopeLevel] {
        &[Self::Global, Self::Regional, Self::Country, Self::State]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Regional => "regional",
            Self::Country => "country",
            Self::State => "state",
        }
    }
}

impl std::fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "regional" => Ok(Self::Regional),
            "country" => Ok(Self::Country),
            "state" => Ok(Self::State),
            other => Err(ValidationError::UnknownScopeLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_id_rejects_empty() {
        assert!(RegulationId::new("").is_err());
        assert!(RegulationId::new("  ").is_err());
        assert_eq!(RegulationId::new("csrd").unwrap().as_str(), "csrd");
    }

    #[test]
    fn regulation_deserializes_with_missing_optional_fields() {
        let json = r#"{"id":"sfdr","jurisdiction":"EU"}"#;
        let reg: Regulation = serde_json::from_str(json).unwrap();
        assert_eq!(reg.id.as_str(), "sfdr");
        assert_eq!(reg.jurisdiction, "EU");
        assert_eq!(reg.country, "");
        assert!(reg.title.is_none());
    }

    #[test]
    fn regulation_rejects_empty_id() {
        let json = r#"{"id":"","jurisdiction":"EU"}"#;
        assert!(serde_json::from_str::<Regulation>(json).is_err());
    }

    #[test]
    fn regulation_parses_effective_date() {
        let json = r#"{"id":"sb-253","jurisdiction":"California","country":"United States","effective_date":"2026-01-01"}"#;
        let reg: Regulation = serde_json::from_str(json).unwrap();
        assert_eq!(
            reg.effective_date,
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
    }

    #[test]
    fn target_serializes_adjacently_tagged() {
        let json = serde_json::to_value(RegulationTarget::Location(PlaceId::California)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "location", "value": "California"}));
        let json = serde_json::to_value(RegulationTarget::Region(Region::Eu)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "region", "value": "EU"}));
        let json = serde_json::to_value(RegulationTarget::Global).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "global"}));
    }

    #[test]
    fn target_display() {
        assert_eq!(RegulationTarget::Global.to_string(), "global");
        assert_eq!(RegulationTarget::Region(Region::AsiaPacific).to_string(), "region:Asia-Pacific");
        assert_eq!(RegulationTarget::Location(PlaceId::Texas).to_string(), "location:Texas");
    }

    #[test]
    fn scope_level_roundtrip() {
        for level in ScopeLevel::all() {
            assert_eq!(level.as_str().parse::<ScopeLevel>().unwrap(), *level);
        }
        assert!("planetary".parse::<ScopeLevel>().is_err());
    }
}
