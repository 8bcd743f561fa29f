//! Roster construction: airports and flight entities.
//!
//! All validation of the setup roster happens here, so a constructed
//! engine never sees an unknown airport or a degenerate route.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use aeri_core::components::{FlightLog, FlightPlan, Kinematics};
use aeri_core::config::{AirportSpec, FlightSpec};
use aeri_core::enums::FlightPhase;
use aeri_core::error::SimError;

use crate::airport::Airport;

/// Build the airport map, rejecting duplicate codes and impossible coordinates.
pub fn build_airports(specs: &[AirportSpec]) -> Result<BTreeMap<String, Airport>, SimError> {
    let mut airports = BTreeMap::new();
    for spec in specs {
        let valid_lat = spec.lat.is_finite() && (-90.0..=90.0).contains(&spec.lat);
        let valid_lon = spec.lon.is_finite() && (-180.0..=180.0).contains(&spec.lon);
        if !valid_lat || !valid_lon {
            return Err(SimError::InvalidConfig(format!(
                "airport {} has invalid coordinates ({}, {})",
                spec.code, spec.lat, spec.lon
            )));
        }
        if airports.contains_key(&spec.code) {
            return Err(SimError::DuplicateAirport(spec.code.clone()));
        }
        airports.insert(spec.code.clone(), Airport::new(spec.code.clone(), spec.position()));
    }
    Ok(airports)
}

/// Spawn a flight on the ground at its origin.
///
/// Bearing and route distance are computed once here and never change.
pub fn spawn_flight(
    world: &mut World,
    airports: &BTreeMap<String, Airport>,
    spec: &FlightSpec,
) -> Result<Entity, SimError> {
    let invalid = |reason: String| SimError::InvalidRoute {
        flight_id: spec.id.clone(),
        reason,
    };

    if spec.origin == spec.destination {
        return Err(invalid(format!(
            "origin and destination are both {}",
            spec.origin
        )));
    }
    let origin = airports
        .get(&spec.origin)
        .ok_or_else(|| invalid(format!("unknown origin airport {}", spec.origin)))?;
    let destination = airports
        .get(&spec.destination)
        .ok_or_else(|| invalid(format!("unknown destination airport {}", spec.destination)))?;

    let from = origin.position();
    let to = destination.position();

    let plan = FlightPlan {
        id: spec.id.clone(),
        origin: spec.origin.clone(),
        destination: spec.destination.clone(),
        departure_tick: spec.departure_tick,
        bearing_deg: from.bearing_to(&to),
        route_distance_nm: from.distance_nm(&to),
    };
    let kinematics = Kinematics {
        phase: FlightPhase::GroundTaxi,
        position: from,
        distance_traveled_nm: 0.0,
        altitude_ft: FlightPhase::GroundTaxi.altitude_ft(),
    };

    Ok(world.spawn((plan, kinematics, FlightLog::default())))
}
