//! Pricing and transit arithmetic.
//!
//! These functions know nothing about locations. They take a distance
//! and a [`RateConfig`] and return numbers.

use crate::{equipment::Equipment, priority::Priority, rates::RateConfig};

/// Effective rate per mile after equipment, priority and weight
/// multipliers are applied, in that order.
pub fn rate_per_mile(
    rates: &RateConfig,
    equipment: Equipment,
    priority: Priority,
    weight_lbs: u32,
) -> f64 {
    let mut rate = rates.base_rate_per_mile;
    rate *= rates.equipment_multiplier(equipment);
    rate *= rates.priority_multiplier(priority);
    rate *= rates.weight_multiplier(weight_lbs);
    rate
}

/// Line-haul charge for `distance_miles` at `rate_per_mile`, rounded to
/// whole currency units.
pub fn base_rate(distance_miles: u32, rate_per_mile: f64) -> u64 {
    (f64::from(distance_miles) * rate_per_mile).round() as u64
}

pub fn fuel_surcharge(rates: &RateConfig, base_rate: u64) -> u64 {
    (base_rate as f64 * rates.fuel_surcharge_rate).round() as u64
}

/// Number of days on the road.
///
/// Driving hours are rounded up first and then split into days of
/// `hours_per_day`, also rounded up. A zero-mile route takes zero days.
pub fn transit_days(rates: &RateConfig, distance_miles: u32, priority: Priority) -> u32 {
    let total_hours = (f64::from(distance_miles) / rates.avg_speed_mph).ceil() as u32;
    let hours_per_day = rates.hours_per_day(priority).max(1);
    total_hours.div_ceil(hours_per_day)
}

/// Label shown for a transit estimate.
pub fn transit_label(days: u32) -> String {
    if days == 1 {
        "Same day".to_string()
    } else {
        format!("{} business days", days)
    }
}
