use serde::{Deserialize, Serialize};

use crate::Error;

/// A kind of vehicle used to commute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Bicycle,
    Motorcycle,
    Car,
    Bus,
    Truck,
}

/// How a vehicle is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Individual,
    Collective,
    Cargo,
}

/// Human-readable information about a [`VehicleKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub efficiency: &'static str,
    pub category: Category,
}

impl VehicleKind {
    /// All vehicle kinds, in display order
    pub const ALL: [VehicleKind; 5] = [
        VehicleKind::Bicycle,
        VehicleKind::Motorcycle,
        VehicleKind::Car,
        VehicleKind::Bus,
        VehicleKind::Truck,
    ];

    /// The identifier used in tables, exports and on the command line (e.g. `car`)
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bicycle => "bicycle",
            Self::Motorcycle => "motorcycle",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Truck => "truck",
        }
    }

    pub fn info(&self) -> VehicleInfo {
        match self {
            Self::Bicycle => VehicleInfo {
                name: "🚴 Bicycle",
                description: "Zero CO2 emissions - perfect for the environment!",
                efficiency: "Excellent",
                category: Category::Individual,
            },
            Self::Motorcycle => VehicleInfo {
                name: "🏍️ Motorcycle",
                description: "Low emissions with high fuel efficiency",
                efficiency: "Very good",
                category: Category::Individual,
            },
            Self::Car => VehicleInfo {
                name: "🚗 Car",
                description: "Average emissions of a passenger car (gasoline)",
                efficiency: "Reasonable",
                category: Category::Individual,
            },
            Self::Bus => VehicleInfo {
                name: "🚌 Bus",
                description: "Low emissions per passenger (shared)",
                efficiency: "Good",
                category: Category::Collective,
            },
            Self::Truck => VehicleInfo {
                name: "🚚 Truck",
                description: "High emissions per kilometer",
                efficiency: "Poor",
                category: Category::Cargo,
            },
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for VehicleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownVehicleKind(name.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("car".parse::<VehicleKind>(), Ok(VehicleKind::Car));
        assert_eq!(" Bus ".parse::<VehicleKind>(), Ok(VehicleKind::Bus));
        assert_eq!(
            "spaceship".parse::<VehicleKind>(),
            Err(Error::UnknownVehicleKind("spaceship".to_string()))
        );
    }

    #[test]
    fn serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&VehicleKind::Motorcycle).unwrap(),
            "\"motorcycle\""
        );
        assert!(serde_json::from_str::<VehicleKind>("\"spaceship\"").is_err());
    }
}
