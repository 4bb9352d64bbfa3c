//! The core of the quote library.
//!
//! A [`QuoteEngine`] resolves city names against a [`LocationTable`],
//! measures the great-circle distance between them and prices the trip
//! with a [`RateConfig`].

use rand::Rng;

use crate::{
    equipment::Equipment,
    error::QuoteError,
    haversine,
    locations::LocationTable,
    pricing,
    priority::Priority,
    quote::{QuoteRequest, QuoteResult},
    rates::RateConfig,
};

/// Smallest distance handed out for an unknown route.
pub const FALLBACK_MIN_MILES: u32 = 200;
/// Largest distance handed out for an unknown route.
pub const FALLBACK_MAX_MILES: u32 = 999;

/// What to do when a name is not in the location table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum UnknownRoutePolicy {
    /// Fail with [`QuoteError::UnknownLocation`].
    #[default]
    Reject,
    /// Substitute a uniformly random distance between
    /// [`FALLBACK_MIN_MILES`] and [`FALLBACK_MAX_MILES`]. Quotes for
    /// unknown routes are then not reproducible.
    RandomDistance,
}

/// Prices quotes. Holds no mutable state, so one engine can serve any
/// number of callers.
#[derive(Debug, Clone)]
pub struct QuoteEngine<'a> {
    locations: &'a LocationTable,
    rates: RateConfig,
    unknown_route: UnknownRoutePolicy,
}

impl Default for QuoteEngine<'static> {
    fn default() -> Self {
        QuoteEngine::new(LocationTable::default_cities(), RateConfig::default())
    }
}

impl<'a> QuoteEngine<'a> {
    /// Creates an engine over `locations` that rejects unknown names.
    pub fn new(locations: &'a LocationTable, rates: RateConfig) -> QuoteEngine<'a> {
        QuoteEngine {
            locations,
            rates,
            unknown_route: UnknownRoutePolicy::default(),
        }
    }

    /// Replaces the policy for names missing from the table.
    pub fn with_unknown_route_policy(mut self, policy: UnknownRoutePolicy) -> QuoteEngine<'a> {
        self.unknown_route = policy;
        self
    }

    /// The table names are resolved against.
    pub fn locations(&self) -> &'a LocationTable {
        self.locations
    }

    /// The rate card quotes are priced with.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Checks `request` against this engine's rate card, including its
    /// weight limit.
    pub fn validate(&self, request: &QuoteRequest) -> Result<(), QuoteError> {
        request.validate(&self.rates)
    }

    /// Great-circle miles between two named locations, rounded.
    ///
    /// Unresolved names are handled per the engine's
    /// [`UnknownRoutePolicy`]. When both names are unknown the error
    /// names the origin.
    pub fn compute_distance(&self, origin: &str, destination: &str) -> Result<u32, QuoteError> {
        let from = self.locations.find(origin);
        let to = self.locations.find(destination);

        match (from, to) {
            (Some(from), Some(to)) => {
                let miles = haversine::distance_miles_rounded(&from.location, &to.location);
                debug!("distance {} -> {}: {} mi", origin, destination, miles);
                Ok(miles)
            }
            _ => {
                let unresolved = if from.is_none() { origin } else { destination };
                match self.unknown_route {
                    UnknownRoutePolicy::Reject => {
                        warn!("location not found: {}", unresolved);
                        Err(QuoteError::UnknownLocation(unresolved.to_string()))
                    }
                    UnknownRoutePolicy::RandomDistance => {
                        let miles = rand::thread_rng()
                            .gen_range(FALLBACK_MIN_MILES..=FALLBACK_MAX_MILES);
                        warn!(
                            "location not found: {}, using fallback distance of {} mi",
                            unresolved, miles
                        );
                        Ok(miles)
                    }
                }
            }
        }
    }

    /// Prices `request`.
    ///
    /// The request is not validated here. A zero weight simply falls in
    /// the lowest tier. Call [`QuoteEngine::validate`] first when the
    /// input comes from a user.
    pub fn compute_quote(&self, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        debug!("request: {:?}", request);
        let distance_miles = self.compute_distance(&request.origin, &request.destination)?;

        let rate_per_mile = pricing::rate_per_mile(
            &self.rates,
            request.equipment,
            request.priority,
            request.weight_lbs,
        );
        let base_rate = pricing::base_rate(distance_miles, rate_per_mile);
        let fuel_surcharge = pricing::fuel_surcharge(&self.rates, base_rate);
        let transit_days = pricing::transit_days(&self.rates, distance_miles, request.priority);

        let quote = QuoteResult {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            distance_miles,
            estimated_time: pricing::transit_label(transit_days),
            transit_days,
            rate_per_mile,
            base_rate,
            fuel_surcharge,
            total: base_rate + fuel_surcharge,
        };
        info!(
            "quoted {} -> {} ({}, {}): {}",
            quote.origin, quote.destination, request.equipment, request.priority, quote.total
        );
        Ok(quote)
    }
}

/// Validates and prices a quote against the built-in cities and rate
/// card.
pub fn compute_quote_from(
    origin: &str,
    destination: &str,
    weight_lbs: u32,
    equipment: Equipment,
    priority: Priority,
) -> Result<QuoteResult, QuoteError> {
    let request = QuoteRequest::new(origin, destination, weight_lbs, equipment, priority);
    let engine = QuoteEngine::default();
    engine.validate(&request)?;
    engine.compute_quote(&request)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
