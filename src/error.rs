use crate::VehicleKind;

/// Reasons why an emission cannot be computed.
/// No partial result is ever returned alongside any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The distance is zero, negative, not finite or outside of the configured bounds
    InvalidDistance(f64),
    /// The frequency is zero or outside of the configured bounds
    InvalidFrequency(u32),
    /// The vehicle is not known, or has no entry in the emission factor table
    UnknownVehicleKind(String),
    /// An emission factor is negative or not finite
    InvalidEmissionFactor { vehicle: VehicleKind, value: f64 },
    /// Impact thresholds must be finite, non-negative and strictly increasing
    InvalidThresholds(Vec<f64>),
    /// Bounds or equivalent constants that cannot produce a finite result
    InvalidConfiguration(String),
    /// The emissions of a valid trip overflow the range of finite numbers
    NonFiniteResult,
    /// The distance between two addresses could not be obtained
    DistanceLookupFailed(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDistance(distance) => write!(f, "invalid distance: {distance} km"),
            Self::InvalidFrequency(frequency) => write!(f, "invalid frequency: {frequency}"),
            Self::UnknownVehicleKind(name) => write!(f, "unknown vehicle kind \"{name}\""),
            Self::InvalidEmissionFactor { vehicle, value } => {
                write!(f, "invalid emission factor for {vehicle}: {value} g/km")
            }
            Self::InvalidThresholds(bounds) => write!(f, "invalid impact thresholds: {bounds:?}"),
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::NonFiniteResult => f.write_str("emissions are too large to be computed"),
            Self::DistanceLookupFailed(reason) => write!(f, "distance lookup failed: {reason}"),
        }
    }
}
