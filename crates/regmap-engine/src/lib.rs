//! # regmap-engine: Regulation Location Engine
//!
//! Answers the questions the map, the filter sidebar and the search page
//! ask about regulations and places:
//!
//! - Where does this regulation apply? ([`LocationEngine::resolve_target`])
//! - Does it apply to this place? ([`LocationEngine::applies_to_place`])
//! - Which regulations apply here? ([`LocationEngine::regulations_for_place`])
//! - How do they split by scope? ([`LocationEngine::group_by_scope`])
//! - Where do the pins go? ([`LocationEngine::pinnable_locations`])
//! - Does it match the search filter? ([`RegulationFilter`])
//!
//! ## Architecture
//!
//! ```text
//! regmap-core (types)  -->  regmap-geo (tables)  -->  regmap-engine (queries)
//!   PlaceId, Region          LocationHierarchy          LocationEngine
//!   Regulation               CoordinateTable            RegulationFilter
//! ```
//!
//! Every query is a pure function of its inputs and the immutable
//! tables. Nothing here blocks, allocates shared state, or fails: unknown
//! input degrades to the documented default, and the only fallible
//! operations are in [`dataset`].

pub mod applicability;
pub mod dataset;
pub mod filter;
pub mod pins;
pub mod query;
pub mod scope;
pub mod sidebar;
pub mod target;

pub use dataset::{Dataset, DatasetError};
pub use filter::RegulationFilter;
pub use pins::Pin;
pub use query::PlaceQuery;
pub use scope::ScopeGroups;
pub use sidebar::FacetCounts;

use regmap_geo::{CoordinateTable, LocationHierarchy};

/// Query interface over a hierarchy and a coordinate table.
///
/// Cheap to copy; holds only references to the tables.
#[derive(Debug, Clone, Copy)]
pub struct LocationEngine<'t> {
    hierarchy: &'t LocationHierarchy,
    coordinates: &'t CoordinateTable,
}

impl LocationEngine<'static> {
    /// Engine over the compiled-in tables.
    pub fn global() -> Self {
        Self::new(LocationHierarchy::global(), CoordinateTable::global())
    }
}

impl Default for LocationEngine<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'t> LocationEngine<'t> {
    pub fn new(hierarchy: &'t LocationHierarchy, coordinates: &'t CoordinateTable) -> Self {
        Self {
            hierarchy,
            coordinates,
        }
    }

    pub fn hierarchy(&self) -> &'t LocationHierarchy {
        self.hierarchy
    }

    pub fn coordinates(&self) -> &'t CoordinateTable {
        self.coordinates
    }
}
