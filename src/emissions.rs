use serde::{Deserialize, Serialize};

use crate::{EmissionFactorTable, Error, VehicleKind};

/// Reference values used to translate kg of CO2 into equivalents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquivalentConstants {
    /// kg of CO2 absorbed by one tree in one year
    pub tree_absorption_kg_per_year: f64,
    /// g of CO2 emitted by an average car per km
    pub car_emission_g_per_km: f64,
    /// g of CO2 emitted by a plane per km per passenger
    pub plane_emission_g_per_km: f64,
}

impl EquivalentConstants {
    /// # Error
    /// Errors if any constant is not finite and positive
    pub fn new(
        tree_absorption_kg_per_year: f64,
        car_emission_g_per_km: f64,
        plane_emission_g_per_km: f64,
    ) -> Result<Self, Error> {
        let constants = Self {
            tree_absorption_kg_per_year,
            car_emission_g_per_km,
            plane_emission_g_per_km,
        };
        constants.check()?;
        Ok(constants)
    }

    fn check(&self) -> Result<(), Error> {
        let values = [
            self.tree_absorption_kg_per_year,
            self.car_emission_g_per_km,
            self.plane_emission_g_per_km,
        ];
        if values.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration(format!(
                "equivalent constants must be finite and positive, got {values:?}"
            )))
        }
    }
}

impl Default for EquivalentConstants {
    fn default() -> Self {
        Self {
            tree_absorption_kg_per_year: 21.77,
            car_emission_g_per_km: 192.0,
            plane_emission_g_per_km: 90.0,
        }
    }
}

/// Accepted ranges (inclusive) of a [`TripInput`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_distance: f64,
    pub max_distance: f64,
    pub min_frequency: u32,
    pub max_frequency: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_distance: 0.1,
            max_distance: 10000.0,
            min_frequency: 1,
            max_frequency: 365,
        }
    }
}

impl Bounds {
    /// # Error
    /// Errors unless `0 < min_distance <= max_distance` (both finite) and
    /// `1 <= min_frequency <= max_frequency`
    pub fn new(
        min_distance: f64,
        max_distance: f64,
        min_frequency: u32,
        max_frequency: u32,
    ) -> Result<Self, Error> {
        let bounds = Self {
            min_distance,
            max_distance,
            min_frequency,
            max_frequency,
        };
        bounds.check()?;
        Ok(bounds)
    }

    fn check(&self) -> Result<(), Error> {
        let distance = self.min_distance.is_finite()
            && self.max_distance.is_finite()
            && self.min_distance > 0.0
            && self.min_distance <= self.max_distance;
        let frequency = self.min_frequency >= 1 && self.min_frequency <= self.max_frequency;
        if distance && frequency {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration(format!("{self:?}")))
        }
    }

    fn check_distance(&self, distance: f64) -> Result<(), Error> {
        let valid = distance.is_finite()
            && distance > 0.0
            && distance >= self.min_distance
            && distance <= self.max_distance;
        valid.then_some(()).ok_or(Error::InvalidDistance(distance))
    }

    fn check_frequency(&self, frequency: u32) -> Result<(), Error> {
        let valid =
            frequency > 0 && frequency >= self.min_frequency && frequency <= self.max_frequency;
        valid.then_some(()).ok_or(Error::InvalidFrequency(frequency))
    }
}

/// A commute: a distance travelled `frequency` times with a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// distance of one trip in km
    pub distance: f64,
    pub vehicle: VehicleKind,
    /// number of trips over the measurement period
    pub frequency: u32,
}

/// The emissions of a [`TripInput`] and their equivalents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub per_trip_kg: f64,
    pub total_kg: f64,
    pub per_km_grams: f64,
    /// number of trees needed during one year to absorb `total_kg`
    pub trees_needed: u64,
    /// km driven by an average car emitting `total_kg`
    pub car_equivalent_km: f64,
    /// km flown emitting `total_kg`
    pub flight_equivalent_km: f64,
}

impl EmissionResult {
    /// The average kg of CO2 per day when the trips happen over `period_days` days.
    /// Returns `None` for an empty period.
    pub fn per_day_kg(&self, period_days: u32) -> Option<f64> {
        (period_days > 0).then(|| self.total_kg / period_days as f64)
    }
}

/// Computes the emissions of `input` with the default [`Bounds`].
/// # Error
/// Errors if the vehicle has no factor in `table`, or the distance or frequency are invalid
pub fn compute_emission(
    input: &TripInput,
    table: &EmissionFactorTable,
    constants: &EquivalentConstants,
) -> Result<EmissionResult, Error> {
    compute(input, table, constants, &Bounds::default())
}

fn compute(
    input: &TripInput,
    table: &EmissionFactorTable,
    constants: &EquivalentConstants,
    bounds: &Bounds,
) -> Result<EmissionResult, Error> {
    constants.check()?;
    bounds.check()?;
    let per_km_grams = table.get(input.vehicle)?;
    bounds.check_distance(input.distance)?;
    bounds.check_frequency(input.frequency)?;

    let per_trip_kg = (input.distance * per_km_grams) / 1000.0;
    let total_kg = per_trip_kg * input.frequency as f64;
    let trees = (total_kg / constants.tree_absorption_kg_per_year).ceil();
    let car_equivalent_km = total_kg / (constants.car_emission_g_per_km / 1000.0);
    let flight_equivalent_km = total_kg / (constants.plane_emission_g_per_km / 1000.0);

    let finite = [total_kg, trees, car_equivalent_km, flight_equivalent_km]
        .iter()
        .all(|v| v.is_finite());
    // `as u64` saturates; 2^64 is the first value it cannot represent
    if !finite || trees >= u64::MAX as f64 {
        return Err(Error::NonFiniteResult);
    }
    let trees_needed = trees as u64;

    log::debug!(
        "{} km by {} x{} => {total_kg} kg CO2",
        input.distance,
        input.vehicle,
        input.frequency
    );

    Ok(EmissionResult {
        per_trip_kg,
        total_kg,
        per_km_grams,
        trees_needed,
        car_equivalent_km,
        flight_equivalent_km,
    })
}

/// An emission calculator with its own table, constants and bounds
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pub table: EmissionFactorTable,
    pub constants: EquivalentConstants,
    pub bounds: Bounds,
}

impl Calculator {
    /// Computes the emissions of `input`. See [`compute_emission`].
    pub fn compute(&self, input: &TripInput) -> Result<EmissionResult, Error> {
        compute(input, &self.table, &self.constants, &self.bounds)
    }
}
