//! The reference table of places a quote can start or end at.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::{
    error::QuoteError,
    haversine,
    location::{Location, NamedLocation},
};

/// Cities served by the quote desk, as `(name, latitude, longitude)`.
const SERVICE_CITIES: [(&str, f64, f64); 10] = [
    ("Chicago, IL", 41.8781, -87.6298),
    ("Kansas City, MO", 39.0997, -94.5786),
    ("Minneapolis, MN", 44.9537, -93.0900),
    ("Milwaukee, WI", 43.0389, -87.9065),
    ("Indianapolis, IN", 39.7684, -86.1581),
    ("St. Louis, MO", 38.6270, -90.1994),
    ("Des Moines, IA", 41.5868, -93.6250),
    ("Detroit, MI", 42.3314, -83.0458),
    ("Cleveland, OH", 41.4993, -81.6944),
    ("Louisville, KY", 38.2527, -85.7585),
];

/// Built once on first use and shared by every engine created with
/// [`LocationTable::default_cities`].
static DEFAULT_CITIES: Lazy<LocationTable> = Lazy::new(|| LocationTable {
    entries: SERVICE_CITIES
        .iter()
        .map(|(name, latitude, longitude)| NamedLocation::new(*name, *latitude, *longitude))
        .collect(),
});

/// An immutable list of [`NamedLocation`]s with unique names.
///
/// Lookups are linear scans. The table is small and its order is
/// meaningful to callers that list it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTable {
    entries: Vec<NamedLocation>,
}

impl LocationTable {
    /// Builds a table from caller-supplied entries.
    ///
    /// Fails with [`QuoteError::DuplicateLocation`] if two entries share
    /// a name.
    pub fn new(entries: Vec<NamedLocation>) -> Result<LocationTable, QuoteError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(QuoteError::DuplicateLocation(entry.name.clone()));
            }
        }
        debug!("location table built with {} entries", entries.len());
        Ok(LocationTable { entries })
    }

    /// The compiled-in service cities.
    pub fn default_cities() -> &'static LocationTable {
        &DEFAULT_CITIES
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&NamedLocation> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Display names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedLocation> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry closest to `location` by great-circle distance.
    ///
    /// Ties go to the entry listed first. Returns [`None`] for an empty
    /// table.
    pub fn nearest(&self, location: &Location) -> Option<&NamedLocation> {
        let mut nearest: Option<(&NamedLocation, f64)> = None;
        for entry in &self.entries {
            let distance = haversine::distance_miles(location, &entry.location);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((entry, distance)),
            }
        }
        nearest.map(|(entry, _)| entry)
    }
}
