//! Rate configuration for the quote engine.
//!
//! Every number that shapes a price or a transit estimate lives in
//! [`RateConfig`]. [`RateConfig::default`] carries the published rate
//! card. Deployments may deserialize an override, and any field they
//! leave out keeps its default.

use serde::{Deserialize, Serialize};

use crate::{equipment::Equipment, priority::Priority};

/// Starting line-haul rate, in currency units per mile.
pub const BASE_RATE_PER_MILE: f64 = 3.20;
/// Fuel surcharge as a fraction of the base rate.
pub const FUEL_SURCHARGE_RATE: f64 = 0.18;
/// Average road speed used for transit estimates.
pub const AVG_SPEED_MPH: f64 = 55.0;
/// Heaviest load the form accepts.
pub const MAX_WEIGHT_LBS: u32 = 80_000;

/// Per-equipment multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentRates {
    /// Multiplier for [`Equipment::DryVan`].
    pub dry_van: f64,
    /// Multiplier for [`Equipment::Refrigerated`].
    pub refrigerated: f64,
    /// Multiplier for [`Equipment::Flatbed`].
    pub flatbed: f64,
}

impl Default for EquipmentRates {
    fn default() -> Self {
        EquipmentRates {
            dry_van: 1.0,
            refrigerated: 1.25,
            flatbed: 1.15,
        }
    }
}

/// Per-priority rate multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityRates {
    /// Multiplier for [`Priority::Standard`].
    pub standard: f64,
    /// Multiplier for [`Priority::Expedited`].
    pub expedited: f64,
    /// Multiplier for [`Priority::Urgent`].
    pub urgent: f64,
}

impl Default for PriorityRates {
    fn default() -> Self {
        PriorityRates {
            standard: 1.0,
            expedited: 1.35,
            urgent: 1.75,
        }
    }
}

/// Driving hours per day for each priority. Urgent loads run team
/// drivers and cover more of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityHours {
    /// Hours per day for [`Priority::Standard`].
    pub standard: u32,
    /// Hours per day for [`Priority::Expedited`].
    pub expedited: u32,
    /// Hours per day for [`Priority::Urgent`].
    pub urgent: u32,
}

impl Default for PriorityHours {
    fn default() -> Self {
        PriorityHours {
            standard: 11,
            expedited: 14,
            urgent: 20,
        }
    }
}

/// A weight band. Loads strictly heavier than `above_lbs` take
/// `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTier {
    /// Lower bound of the band, exclusive.
    pub above_lbs: u32,
    /// Rate multiplier for loads in the band.
    pub multiplier: f64,
}

/// The full rate card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Line-haul rate before any multiplier, per mile.
    pub base_rate_per_mile: f64,
    /// Fuel surcharge as a fraction of the base rate.
    pub fuel_surcharge_rate: f64,
    /// Road speed for transit estimates.
    pub avg_speed_mph: f64,
    /// Heaviest load [`QuoteRequest::validate`](crate::quote::QuoteRequest::validate)
    /// accepts.
    pub max_weight_lbs: u32,
    /// Equipment multipliers.
    pub equipment: EquipmentRates,
    /// Priority multipliers.
    pub priority: PriorityRates,
    /// Driving hours per day, by priority.
    pub hours_per_day: PriorityHours,
    /// Only the heaviest matching tier applies. Order does not matter.
    pub weight_tiers: Vec<WeightTier>,
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig {
            base_rate_per_mile: BASE_RATE_PER_MILE,
            fuel_surcharge_rate: FUEL_SURCHARGE_RATE,
            avg_speed_mph: AVG_SPEED_MPH,
            max_weight_lbs: MAX_WEIGHT_LBS,
            equipment: EquipmentRates::default(),
            priority: PriorityRates::default(),
            hours_per_day: PriorityHours::default(),
            weight_tiers: vec![
                WeightTier {
                    above_lbs: 20_000,
                    multiplier: 1.10,
                },
                WeightTier {
                    above_lbs: 30_000,
                    multiplier: 1.15,
                },
            ],
        }
    }
}

impl RateConfig {
    /// Multiplier for a trailer type.
    pub fn equipment_multiplier(&self, equipment: Equipment) -> f64 {
        match equipment {
            Equipment::DryVan => self.equipment.dry_van,
            Equipment::Refrigerated => self.equipment.refrigerated,
            Equipment::Flatbed => self.equipment.flatbed,
        }
    }

    /// Multiplier for a service level.
    pub fn priority_multiplier(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Standard => self.priority.standard,
            Priority::Expedited => self.priority.expedited,
            Priority::Urgent => self.priority.urgent,
        }
    }

    /// Driving hours per day at a service level.
    pub fn hours_per_day(&self, priority: Priority) -> u32 {
        match priority {
            Priority::Standard => self.hours_per_day.standard,
            Priority::Expedited => self.hours_per_day.expedited,
            Priority::Urgent => self.hours_per_day.urgent,
        }
    }

    /// Multiplier of the heaviest tier the weight falls into, or 1.0
    /// below every tier.
    pub fn weight_multiplier(&self, weight_lbs: u32) -> f64 {
        self.weight_tiers
            .iter()
            .filter(|tier| weight_lbs > tier.above_lbs)
            .max_by_key(|tier| tier.above_lbs)
            .map_or(1.0, |tier| tier.multiplier)
    }
}

#[cfg(test)]
mod rates_tests {
    use super::*;

    #[test]
    fn test_weight_tiers_are_not_cumulative() {
        let rates = RateConfig::default();
        assert_eq!(rates.weight_multiplier(0), 1.0);
        assert_eq!(rates.weight_multiplier(20_000), 1.0);
        assert_eq!(rates.weight_multiplier(20_001), 1.10);
        assert_eq!(rates.weight_multiplier(30_000), 1.10);
        assert_eq!(rates.weight_multiplier(30_001), 1.15);
        assert_eq!(rates.weight_multiplier(80_000), 1.15);
    }

    #[test]
    fn test_multiplier_tables() {
        let rates = RateConfig::default();
        assert_eq!(rates.equipment_multiplier(Equipment::DryVan), 1.0);
        assert_eq!(rates.equipment_multiplier(Equipment::Refrigerated), 1.25);
        assert_eq!(rates.equipment_multiplier(Equipment::Flatbed), 1.15);
        assert_eq!(rates.priority_multiplier(Priority::Standard), 1.0);
        assert_eq!(rates.priority_multiplier(Priority::Expedited), 1.35);
        assert_eq!(rates.priority_multiplier(Priority::Urgent), 1.75);
        assert_eq!(rates.hours_per_day(Priority::Standard), 11);
        assert_eq!(rates.hours_per_day(Priority::Expedited), 14);
        assert_eq!(rates.hours_per_day(Priority::Urgent), 20);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rates: RateConfig = serde_json::from_str(
            r#"{ "base_rate_per_mile": 4.0, "equipment": { "flatbed": 1.3 } }"#,
        )
        .unwrap();
        assert_eq!(rates.base_rate_per_mile, 4.0);
        assert_eq!(rates.equipment.flatbed, 1.3);
        assert_eq!(rates.equipment.refrigerated, 1.25);
        assert_eq!(rates.fuel_surcharge_rate, FUEL_SURCHARGE_RATE);
        assert_eq!(rates.weight_tiers, RateConfig::default().weight_tiers);
    }

    #[test]
    fn test_single_priority_field_override() {
        let rates: RateConfig =
            serde_json::from_str(r#"{ "priority": { "urgent": 2.0 } }"#).unwrap();
        assert_eq!(rates.priority_multiplier(Priority::Urgent), 2.0);
        assert_eq!(rates.priority_multiplier(Priority::Standard), 1.0);
        assert_eq!(rates.priority_multiplier(Priority::Expedited), 1.35);
        assert_eq!(rates.hours_per_day, PriorityHours::default());

        let rates: RateConfig =
            serde_json::from_str(r#"{ "hours_per_day": { "standard": 10 } }"#).unwrap();
        assert_eq!(rates.hours_per_day(Priority::Standard), 10);
        assert_eq!(rates.hours_per_day(Priority::Expedited), 14);
        assert_eq!(rates.hours_per_day(Priority::Urgent), 20);
        assert_eq!(rates.priority, PriorityRates::default());
    }

    #[test]
    fn test_override_keys_are_snake_case() {
        let rates: RateConfig =
            serde_json::from_str(r#"{ "equipment": { "dry_van": 1.05 } }"#).unwrap();
        assert_eq!(rates.equipment_multiplier(Equipment::DryVan), 1.05);

        let json = serde_json::to_value(RateConfig::default()).unwrap();
        assert!(json["equipment"].get("dry_van").is_some());
        assert!(json["equipment"].get("dry-van").is_none());
    }

    #[test]
    fn test_empty_override_is_default() {
        let rates: RateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(rates, RateConfig::default());
    }
}
