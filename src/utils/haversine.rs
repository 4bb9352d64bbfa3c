//! Great-circle distance between two [`Location`]s.

use crate::location::Location;

/// Mean radius of the Earth in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Returns the haversine distance in miles between two locations.
///
/// The value is not rounded. Callers that quote whole miles should use
/// [`distance_miles_rounded`].
pub fn distance_miles(from: &Location, to: &Location) -> f64 {
    let lat1 = from.latitude.into_inner().to_radians();
    let lat2 = to.latitude.into_inner().to_radians();
    let d_lat = (to.latitude.into_inner() - from.latitude.into_inner()).to_radians();
    let d_lng = (to.longitude.into_inner() - from.longitude.into_inner()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Same as [`distance_miles`], rounded half away from zero to whole miles.
pub fn distance_miles_rounded(from: &Location, to: &Location) -> u32 {
    distance_miles(from, to).round() as u32
}

#[cfg(test)]
mod haversine_tests {
    use super::*;

    const CHICAGO: Location = Location::new(41.8781, -87.6298);
    const KANSAS_CITY: Location = Location::new(39.0997, -94.5786);

    #[test]
    fn test_chicago_to_kansas_city() {
        assert_eq!(distance_miles_rounded(&CHICAGO, &KANSAS_CITY), 412);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(
            distance_miles(&CHICAGO, &KANSAS_CITY),
            distance_miles(&KANSAS_CITY, &CHICAGO)
        );
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_miles_rounded(&CHICAGO, &CHICAGO), 0);
    }
}
