//! # regmap-core: Foundational Types for regmap
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace: where a regulation can apply, and what a regulation record
//! looks like once it reaches the location engine.
//!
//! ## Key Design Principles
//!
//! 1. **Enumerated places, not free text.** [`PlaceId`] is a closed enum of
//!    every place the static tables know about. Free-text country names are
//!    resolved to a `PlaceId` once, at the boundary, by `regmap-geo`. No
//!    internal logic branches on raw strings.
//!
//! 2. **Single `Region` enum.** One definition of the nine regional buckets,
//!    exhaustive `match` everywhere. The EU vs Europe split is a variant-level
//!    distinction, not a naming convention.
//!
//! 3. **Resolved targets are a tagged union.** [`RegulationTarget`] is
//!    `Global`, `Region(_)` or `Location(_)`; it is derived on demand and
//!    never persisted.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regmap-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod place;
pub mod region;
pub mod regulation;

pub use error::ValidationError;
pub use place::{Coordinate, PlaceId, PLACE_COUNT};
pub use region::{PlaceLevel, Region};
pub use regulation::{Regulation, RegulationId, RegulationTarget, ScopeLevel};
