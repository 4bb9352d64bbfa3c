//! Struct definitions and implementations for [`Location`] and
//! [`NamedLocation`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a geographic point in degrees.
///
/// [`OrderedFloat`] is used so that locations can be compared and
/// hashed, which plain floats do not allow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from raw degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Location {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }
}

/// A city or terminal that can appear on a quote.
///
/// The `name` is the display string shown to users, e.g.
/// `"Chicago, IL"`, and is unique within a
/// [`LocationTable`](crate::locations::LocationTable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub location: Location,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> NamedLocation {
        NamedLocation {
            name: name.into(),
            location: Location::new(latitude, longitude),
        }
    }
}
