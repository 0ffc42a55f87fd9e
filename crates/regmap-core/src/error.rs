//! # Error Hierarchy
//!
//! Validation errors for regmap's domain primitives, built with `thiserror`.
//!
//! Location queries never fail: unknown inputs degrade to documented
//! defaults. This crate only fails where text is parsed into a typed
//! identifier; loaders in other crates define their own error types.

use thiserror::Error;

/// Validation errors for domain primitive parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The text does not name a place known to the static tables.
    #[error("unknown place: {0:?}")]
    UnknownPlace(String),

    /// The text does not name one of the regional buckets.
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),

    /// The text does not name a scope level.
    #[error("unknown scope level: {0:?}")]
    UnknownScopeLevel(String),

    /// Regulation identifiers must be non-empty.
    #[error("regulation id must not be empty")]
    EmptyRegulationId,
}
