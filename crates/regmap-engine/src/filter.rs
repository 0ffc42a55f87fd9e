//! # Search Filter
//!
//! The predicate behind the search page. A [`RegulationFilter`] holds
//! one free-text query and three facets; an empty facet places no
//! constraint, and a regulation matches when every non-empty facet does.
//!
//! Location facet values are place names, region buckets, or `Global`:
//!
//! - a place matches regulations that apply to it (ancestors included);
//! - a bucket matches regulations that apply to the bucket, and
//!   regulations targeting a place inside it;
//! - `Global` matches only regulations whose target is `Global`.

use regmap_core::{Regulation, RegulationTarget};
use serde::{Deserialize, Serialize};

use crate::query::{bucket_contains_region, PlaceQuery};
use crate::LocationEngine;

const GLOBAL_SCOPE: &str = "Global";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulationFilter {
    pub query: String,
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
}

impl RegulationFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    /// Returns `true` if no facet constrains the result.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.locations.is_empty()
            && self.categories.is_empty()
            && self.statuses.is_empty()
    }

    pub fn matches(&self, engine: &LocationEngine<'_>, regulation: &Regulation) -> bool {
        self.matches_query(regulation)
            && facet_matches(&self.categories, regulation.category.as_deref())
            && facet_matches(&self.statuses, regulation.status.as_deref())
            && self.matches_location(engine, regulation)
    }

    fn matches_query(&self, regulation: &Regulation) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            regulation.title.as_deref(),
            regulation.summary.as_deref(),
            Some(regulation.jurisdiction.as_str()),
            Some(regulation.country.as_str()),
            regulation.category.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_location(&self, engine: &LocationEngine<'_>, regulation: &Regulation) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let target = engine.resolve_target(regulation);
        self.locations
            .iter()
            .any(|scope| scope_matches(engine, target, scope))
    }
}

fn facet_matches(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let Some(value) = value.map(str::trim) else {
        return false;
    };
    selected.iter().any(|s| s.trim().eq_ignore_ascii_case(value))
}

fn scope_matches(engine: &LocationEngine<'_>, target: RegulationTarget, scope: &str) -> bool {
    if scope.trim().eq_ignore_ascii_case(GLOBAL_SCOPE) {
        return target == RegulationTarget::Global;
    }
    match PlaceQuery::parse(scope) {
        query @ PlaceQuery::Place(_) => engine.target_applies(target, &query),
        PlaceQuery::Bucket(bucket) => {
            if engine.target_applies(target, &PlaceQuery::Bucket(bucket)) {
                return true;
            }
            match target {
                RegulationTarget::Location(place) => engine
                    .hierarchy()
                    .lookup(place)
                    .is_some_and(|p| bucket_contains_region(bucket, p.region)),
                _ => false,
            }
        }
        PlaceQuery::Unknown(text) => {
            tracing::debug!(scope = %text, "location filter value is neither a place nor a region");
            false
        }
    }
}

impl LocationEngine<'_> {
    /// Regulations matching the filter, in input order.
    pub fn filter_regulations<'a>(
        &self,
        filter: &RegulationFilter,
        regulations: &'a [Regulation],
    ) -> Vec<&'a Regulation> {
        regulations
            .iter()
            .filter(|r| filter.matches(self, r))
            .collect()
    }
}
