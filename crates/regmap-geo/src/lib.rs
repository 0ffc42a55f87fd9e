//! # regmap-geo: Static Location Tables
//!
//! Compiled-in geography for the regulation map: which places exist,
//! where they sit in the hierarchy, where their pins go, and how free
//! text maps onto them.
//!
//! ## Tables
//!
//! | Module | Table | Query interface |
//! |--------|-------|-----------------|
//! | [`hierarchy`] | `COUNTRY_REGIONS`, `SUB_NATIONAL_UNITS` | [`LocationHierarchy`] |
//! | [`coordinates`] | `COORDINATES` | [`CoordinateTable`] |
//! | [`alias`] | `ALIASES` | [`resolve_place`], [`resolve_alias`] |
//! | [`policy`] | EU members, pin stand-in lists, scope keywords | plain constants |
//!
//! Every table is a `const` slice; the indexed views are built once on
//! first access and are immutable afterwards, so all queries are safe to
//! call from any thread without synchronization.
//!
//! ## Degradation
//!
//! No query in this crate fails. Unknown places have ancestors
//! `["Global"]`, are in no region, and have no coordinates.

pub mod alias;
pub mod coordinates;
pub mod error;
pub mod hierarchy;
pub mod policy;
pub mod scope;

pub use alias::{resolve_alias, resolve_place};
pub use coordinates::{CoordinateEntry, CoordinateTable};
pub use error::GeoError;
pub use hierarchy::{Ancestor, LocationHierarchy, Place};
