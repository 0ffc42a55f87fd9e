//! # Table Construction Errors

use regmap_core::PlaceId;
use thiserror::Error;

/// A violation of the location table invariants found while indexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The same place appears twice in the source tables.
    #[error("place {0} is listed more than once")]
    DuplicatePlace(PlaceId),

    /// A sub-national unit names a parent that is not a known country.
    #[error("state {state} names parent {parent}, which is not a country-level place")]
    OrphanState {
        /// The sub-national unit.
        state: PlaceId,
        /// The parent it declared.
        parent: PlaceId,
    },
}
