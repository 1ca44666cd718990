use std::error::Error;

use co2calc::{
    classify_impact, compute_emission, EmissionFactorTable, EmissionResult, EquivalentConstants,
    ImpactTier, TripInput, VehicleKind,
};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn compute(distance: f64, vehicle: &str, frequency: u32) -> Result<EmissionResult, co2calc::Error> {
    let input = TripInput {
        distance,
        vehicle: vehicle.parse()?,
        frequency,
    };
    compute_emission(
        &input,
        &EmissionFactorTable::default(),
        &EquivalentConstants::default(),
    )
}

/// 2.5 km by car, 22 working days per month
#[test]
fn acceptance_car() -> Result<(), Box<dyn Error>> {
    let r = compute(2.5, "car", 22)?;
    assert!(abs_difference(r.per_trip_kg, 0.48) < 1e-9);
    assert!(abs_difference(r.total_kg, 10.56) < 1e-9);
    assert_eq!(r.trees_needed, 1);
    assert!(abs_difference(r.car_equivalent_km, 55.0) < 1e-9);
    assert_eq!(classify_impact(r.total_kg), ImpactTier::Low);
    Ok(())
}

/// 15 km by bus, daily during a month
#[test]
fn acceptance_bus() -> Result<(), Box<dyn Error>> {
    let r = compute(15.0, "bus", 30)?;
    assert!(abs_difference(r.per_trip_kg, 1.335) < 1e-9);
    assert!(abs_difference(r.total_kg, 40.05) < 1e-9);
    assert_eq!(r.trees_needed, 2);
    Ok(())
}

/// 8 km by bicycle, twice per week during a month
#[test]
fn acceptance_bicycle() -> Result<(), Box<dyn Error>> {
    let r = compute(8.0, "bicycle", 10)?;
    assert_eq!(r.total_kg, 0.0);
    assert_eq!(r.trees_needed, 0);
    assert_eq!(classify_impact(r.total_kg), ImpactTier::VeryLow);
    Ok(())
}

#[test]
fn unknown_vehicle() {
    assert_eq!(
        compute(8.0, "spaceship", 10),
        Err(co2calc::Error::UnknownVehicleKind("spaceship".to_string()))
    );
}

#[test]
fn idempotent() -> Result<(), Box<dyn Error>> {
    for vehicle in VehicleKind::ALL {
        let first = compute(12.3, vehicle.id(), 17)?;
        let second = compute(12.3, vehicle.id(), 17)?;
        assert_eq!(first, second);
    }
    Ok(())
}
