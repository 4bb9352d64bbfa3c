//! Definition for the [`QuoteError`] type.

use thiserror::Error;

/// Every way a quote, lookup, or sign-in can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A location name that is not in the reference table.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Two entries of a location table share a name.
    #[error("duplicate location in table: {0}")]
    DuplicateLocation(String),

    /// Origin or destination was left empty.
    #[error("origin and destination are required")]
    MissingLocation,

    /// Weight is zero or above the legal truckload limit.
    #[error("invalid cargo weight: {0} lbs")]
    InvalidWeight(u32),

    #[error("unknown equipment type: {0}")]
    UnknownEquipment(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("invalid username or password")]
    InvalidCredentials,
}
