//! Struct definitions for [`QuoteRequest`] and [`QuoteResult`].

use serde::{Deserialize, Serialize};

use crate::{equipment::Equipment, error::QuoteError, priority::Priority, rates::RateConfig};

/// What a shipper asks to have priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Display name of the pickup city, e.g. `"Chicago, IL"`.
    pub origin: String,
    /// Display name of the delivery city.
    pub destination: String,
    /// Cargo weight in pounds.
    pub weight_lbs: u32,
    /// Trailer type.
    pub equipment: Equipment,
    /// Service level.
    pub priority: Priority,
}

impl QuoteRequest {
    /// Builds a request from its parts.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight_lbs: u32,
        equipment: Equipment,
        priority: Priority,
    ) -> QuoteRequest {
        QuoteRequest {
            origin: origin.into(),
            destination: destination.into(),
            weight_lbs,
            equipment,
            priority,
        }
    }

    /// Checks the fields a form would check before submitting. The
    /// weight limit comes from `rates`.
    ///
    /// The engine does not call this on its own; see
    /// [`QuoteEngine::compute_quote`](crate::engine::QuoteEngine::compute_quote).
    pub fn validate(&self, rates: &RateConfig) -> Result<(), QuoteError> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(QuoteError::MissingLocation);
        }
        if self.weight_lbs == 0 || self.weight_lbs > rates.max_weight_lbs {
            return Err(QuoteError::InvalidWeight(self.weight_lbs));
        }
        Ok(())
    }
}

/// A priced quote.
///
/// `total == base_rate + fuel_surcharge` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Origin name as requested.
    pub origin: String,
    /// Destination name as requested.
    pub destination: String,
    /// Great-circle miles, rounded.
    pub distance_miles: u32,
    /// Human readable transit, `"Same day"` or `"{n} business days"`.
    pub estimated_time: String,
    /// Days on the road behind `estimated_time`.
    pub transit_days: u32,
    /// Rate per mile after every multiplier.
    pub rate_per_mile: f64,
    /// Line-haul charge, whole currency units.
    pub base_rate: u64,
    /// Fuel add-on to `base_rate`.
    pub fuel_surcharge: u64,
    /// `base_rate + fuel_surcharge`.
    pub total: u64,
}
