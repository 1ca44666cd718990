use serde::Serialize;

use crate::{frequency_label, EmissionResult, ImpactTier, TripInput};

/// Formats `value` with `decimals` fixed decimals, using `separator` as decimal separator
pub fn format_decimal(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{value:.decimals$}");
    if separator == '.' {
        formatted
    } else {
        formatted.replace('.', &separator.to_string())
    }
}

/// A human-readable view of a computation, where every number is already formatted
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub distance_km: String,
    pub vehicle: String,
    pub frequency: String,
    pub total_co2_kg: String,
    pub per_trip_co2_kg: String,
    pub per_km_co2_g: String,
    pub per_day_co2_kg: Option<String>,
    pub trees_needed: u64,
    pub car_equivalent_km: String,
    pub flight_equivalent_km: String,
    pub impact_symbol: &'static str,
    pub impact_message: &'static str,
    pub impact_action: &'static str,
}

impl Summary {
    /// `period_days` is the number of days over which the trips happen, used to
    /// compute the daily footprint
    pub fn new(
        input: &TripInput,
        result: &EmissionResult,
        tier: ImpactTier,
        period_days: u32,
        separator: char,
    ) -> Self {
        let fmt = |value: f64| format_decimal(value, 2, separator);
        Self {
            distance_km: fmt(input.distance),
            vehicle: input.vehicle.info().name.to_string(),
            frequency: frequency_label(input.frequency)
                .map(|label| label.to_string())
                .unwrap_or_else(|| format!("{} trips", input.frequency)),
            total_co2_kg: fmt(result.total_kg),
            per_trip_co2_kg: fmt(result.per_trip_kg),
            per_km_co2_g: format_decimal(result.per_km_grams, 0, separator),
            per_day_co2_kg: result
                .per_day_kg(period_days)
                .map(|kg| format_decimal(kg, 3, separator)),
            trees_needed: result.trees_needed,
            car_equivalent_km: fmt(result.car_equivalent_km),
            flight_equivalent_km: fmt(result.flight_equivalent_km),
            impact_symbol: tier.symbol(),
            impact_message: tier.message(),
            impact_action: tier.action(),
        }
    }
}
