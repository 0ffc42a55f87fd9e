//! # Scope Classification
//!
//! Collapses a regulation's target into one of four coarse
//! [`ScopeLevel`] buckets for the "by scope" listing.

use regmap_core::{PlaceLevel, Regulation, RegulationTarget, ScopeLevel};
use serde::Serialize;

use crate::LocationEngine;

/// Regulations partitioned by scope level. Every input regulation is
/// in exactly one bucket, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScopeGroups<'a> {
    pub global: Vec<&'a Regulation>,
    pub regional: Vec<&'a Regulation>,
    pub country: Vec<&'a Regulation>,
    pub state: Vec<&'a Regulation>,
}

impl<'a> ScopeGroups<'a> {
    pub fn bucket(&self, level: ScopeLevel) -> &[&'a Regulation] {
        match level {
            ScopeLevel::Global => &self.global,
            ScopeLevel::Regional => &self.regional,
            ScopeLevel::Country => &self.country,
            ScopeLevel::State => &self.state,
        }
    }

    fn bucket_mut(&mut self, level: ScopeLevel) -> &mut Vec<&'a Regulation> {
        match level {
            ScopeLevel::Global => &mut self.global,
            ScopeLevel::Regional => &mut self.regional,
            ScopeLevel::Country => &mut self.country,
            ScopeLevel::State => &mut self.state,
        }
    }

    pub fn total(&self) -> usize {
        self.global.len() + self.regional.len() + self.country.len() + self.state.len()
    }
}

impl LocationEngine<'_> {
    pub fn classify_scope(&self, regulation: &Regulation) -> ScopeLevel {
        self.scope_of_target(self.resolve_target(regulation))
    }

    pub fn scope_of_target(&self, target: RegulationTarget) -> ScopeLevel {
        match target {
            RegulationTarget::Global => ScopeLevel::Global,
            RegulationTarget::Region(_) => ScopeLevel::Regional,
            RegulationTarget::Location(place) => match self.level_of(place) {
                PlaceLevel::State => ScopeLevel::State,
                PlaceLevel::Country => ScopeLevel::Country,
            },
        }
    }

    pub fn group_by_scope<'a>(&self, regulations: &'a [Regulation]) -> ScopeGroups<'a> {
        let mut groups = ScopeGroups::default();
        for regulation in regulations {
            groups
                .bucket_mut(self.classify_scope(regulation))
                .push(regulation);
        }
        groups
    }
}
