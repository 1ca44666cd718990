use std::{collections::HashMap, error::Error as StdError};

use serde::{Deserialize, Serialize};

use crate::{Error, VehicleKind};

/// Emission factors of [`VehicleKind::ALL`] in g CO2/km, in the same order.
/// Source: life cycle assessment studies of transport (EPA, EEA, IEA).
static DEFAULT_FACTORS: [f64; 5] = [0.0, 89.0, 192.0, 89.0, 300.0];

/// A row of an emission factor table on disk
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmissionFactor {
    /// the vehicle (e.g. `car`)
    pub vehicle: String,
    /// the emission in g CO2/km
    pub emission: f64,
}

/// A map of [`VehicleKind`] to its emission in g CO2/km.
/// Factors are always finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    factors: HashMap<VehicleKind, f64>,
}

impl EmissionFactorTable {
    /// Creates a table from `(vehicle, g/km)` pairs. Later pairs replace earlier ones.
    /// # Error
    /// Errors if any factor is negative or not finite
    pub fn new(factors: impl IntoIterator<Item = (VehicleKind, f64)>) -> Result<Self, Error> {
        let factors = factors
            .into_iter()
            .map(|(vehicle, value)| {
                if value.is_finite() && value >= 0.0 {
                    Ok((vehicle, value))
                } else {
                    Err(Error::InvalidEmissionFactor { vehicle, value })
                }
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { factors })
    }

    /// The emission factor of `vehicle` in g CO2/km
    /// # Error
    /// Errors with [`Error::UnknownVehicleKind`] if the table has no entry for `vehicle`
    pub fn get(&self, vehicle: VehicleKind) -> Result<f64, Error> {
        self.factors
            .get(&vehicle)
            .copied()
            .ok_or_else(|| Error::UnknownVehicleKind(vehicle.to_string()))
    }

    /// The entries of this table in [`VehicleKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (VehicleKind, f64)> + '_ {
        VehicleKind::ALL
            .into_iter()
            .filter_map(|kind| self.factors.get(&kind).map(|value| (kind, *value)))
    }

    /// This table as CSV, in the format read by [`load_factors`]
    pub fn to_csv(&self) -> Result<Vec<u8>, csv::Error> {
        super::csv::serialize(self.iter().map(|(vehicle, emission)| EmissionFactor {
            vehicle: vehicle.to_string(),
            emission,
        }))
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self {
            factors: VehicleKind::ALL.into_iter().zip(DEFAULT_FACTORS).collect(),
        }
    }
}

/// Builds an [`EmissionFactorTable`] from CSV `data` with the header `vehicle,emission`.
/// # Error
/// Errors if the data is not valid CSV, a vehicle is unknown or a factor is invalid
pub fn parse_factors(data: &[u8]) -> Result<EmissionFactorTable, Box<dyn StdError>> {
    let rows = super::csv::deserialize::<EmissionFactor>(data).collect::<Result<Vec<_>, _>>()?;
    let factors = rows
        .into_iter()
        .map(|row| Ok((row.vehicle.parse::<VehicleKind>()?, row.emission)))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(EmissionFactorTable::new(factors)?)
}

/// Loads an [`EmissionFactorTable`] from the CSV file at `path`.
/// # Error
/// Errors if the file cannot be read or its content is invalid
pub fn load_factors(path: &str) -> Result<EmissionFactorTable, Box<dyn StdError>> {
    log::info!("Loading emission factors from {path}");
    parse_factors(&std::fs::read(path)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table() {
        let table = EmissionFactorTable::default();
        assert_eq!(table.get(VehicleKind::Bicycle), Ok(0.0));
        assert_eq!(table.get(VehicleKind::Car), Ok(192.0));
        assert_eq!(table.get(VehicleKind::Bus), Ok(89.0));
        assert_eq!(table.get(VehicleKind::Truck), Ok(300.0));
        assert_eq!(table.iter().count(), VehicleKind::ALL.len());
    }

    #[test]
    fn rejects_invalid_factors() {
        assert_eq!(
            EmissionFactorTable::new([(VehicleKind::Car, -1.0)]),
            Err(Error::InvalidEmissionFactor {
                vehicle: VehicleKind::Car,
                value: -1.0
            })
        );
        assert!(EmissionFactorTable::new([(VehicleKind::Bus, f64::NAN)]).is_err());
        assert!(EmissionFactorTable::new([(VehicleKind::Bus, f64::INFINITY)]).is_err());
    }

    #[test]
    fn partial_table() {
        let table = EmissionFactorTable::new([(VehicleKind::Car, 150.0)]).unwrap();
        assert_eq!(table.get(VehicleKind::Car), Ok(150.0));
        assert_eq!(
            table.get(VehicleKind::Truck),
            Err(Error::UnknownVehicleKind("truck".to_string()))
        );
    }

    #[test]
    fn csv() {
        let table = parse_factors(b"vehicle,emission\ncar,120\nbicycle,0\n").unwrap();
        assert_eq!(table.get(VehicleKind::Car), Ok(120.0));
        assert_eq!(table.get(VehicleKind::Bicycle), Ok(0.0));
        assert!(table.get(VehicleKind::Bus).is_err());

        assert!(parse_factors(b"vehicle,emission\nspaceship,1\n").is_err());
        assert!(parse_factors(b"vehicle,emission\ncar,abc\n").is_err());
    }

    #[test]
    fn duplicates_last_wins() {
        let table =
            EmissionFactorTable::new([(VehicleKind::Car, 100.0), (VehicleKind::Car, 150.0)])
                .unwrap();
        assert_eq!(table.get(VehicleKind::Car), Ok(150.0));

        let table = parse_factors(b"vehicle,emission\ncar,100\nbus,89\ncar,150\n").unwrap();
        assert_eq!(table.get(VehicleKind::Car), Ok(150.0));
        assert_eq!(table.get(VehicleKind::Bus), Ok(89.0));
    }

    #[test]
    fn to_csv() {
        let table = EmissionFactorTable::new([(VehicleKind::Bus, 89.0)]).unwrap();
        assert_eq!(
            String::from_utf8(table.to_csv().unwrap()).unwrap(),
            "vehicle,emission\nbus,89.0\n"
        );
    }
}
