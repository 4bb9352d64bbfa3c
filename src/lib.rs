//! Freight Quote Library.
//! Prices truckload shipments between known cities and estimates
//! transit time.
//!
//! The entry point is [`QuoteEngine`](engine::QuoteEngine). A
//! [`LocationTable`](locations::LocationTable) supplies the coordinates
//! and a [`RateConfig`](rates::RateConfig) supplies the numbers.

#[macro_use]
extern crate log;

pub mod types {
    pub mod engine;
    pub mod equipment;
    pub mod error;
    pub mod location;
    pub mod priority;
    pub mod quote;
    pub mod session;
}

pub mod algorithms {
    pub mod pricing;
}

pub mod utils {
    pub mod app_state;
    pub mod haversine;
    pub mod locations;
    pub mod rates;
}

pub use algorithms::pricing;
pub use types::{engine, equipment, error, location, priority, quote, session};
pub use utils::{app_state, haversine, locations, rates};

pub use engine::{compute_quote_from, QuoteEngine, UnknownRoutePolicy};
pub use equipment::Equipment;
pub use error::QuoteError;
pub use priority::Priority;
pub use quote::{QuoteRequest, QuoteResult};
