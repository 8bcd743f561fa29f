//! Snapshot system: reads the world and builds a complete TickSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use aeri_core::components::{FlightLog, FlightPlan, Kinematics};
use aeri_core::error::SimError;
use aeri_core::events::SimEvent;
use aeri_core::state::{AircraftView, AirportView, TickSnapshot};
use aeri_core::types::SimTime;

use crate::airport::Airport;

use super::missing;

pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    airports: &BTreeMap<String, Airport>,
    time: SimTime,
    events: Vec<SimEvent>,
) -> Result<TickSnapshot, SimError> {
    Ok(TickSnapshot {
        time,
        aircraft: build_aircraft(world, roster)?,
        airports: build_airports(world, airports)?,
        events,
    })
}

/// AircraftView list in roster order.
fn build_aircraft(world: &World, roster: &[Entity]) -> Result<Vec<AircraftView>, SimError> {
    roster
        .iter()
        .map(|&entity| {
            let mut query = world
                .query_one::<(&FlightPlan, &Kinematics, &FlightLog)>(entity)
                .map_err(|_| missing(entity))?;
            let (plan, kinematics, log) = query.get().ok_or_else(|| missing(entity))?;
            Ok(AircraftView {
                id: plan.id.clone(),
                origin: plan.origin.clone(),
                destination: plan.destination.clone(),
                departure_tick: plan.departure_tick,
                phase: kinematics.phase,
                lat: kinematics.position.lat,
                lon: kinematics.position.lon,
                bearing_deg: plan.bearing_deg,
                distance_traveled_nm: kinematics.distance_traveled_nm,
                route_distance_nm: plan.route_distance_nm,
                altitude_ft: kinematics.altitude_ft,
                delay_ticks: log.delay_ticks,
                ticks_in_phase: log.ticks_in_phase,
            })
        })
        .collect()
}

/// AirportView list, ordered by airport code.
fn build_airports(
    world: &World,
    airports: &BTreeMap<String, Airport>,
) -> Result<Vec<AirportView>, SimError> {
    airports
        .values()
        .map(|airport| {
            let queue = airport
                .queue()
                .map(|entity| {
                    world
                        .get::<&FlightPlan>(entity)
                        .map(|plan| plan.id.clone())
                        .map_err(|_| missing(entity))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let position = airport.position();
            Ok(AirportView {
                code: airport.code().to_string(),
                lat: position.lat,
                lon: position.lon,
                queue,
                busy_until: airport.busy_until(),
                utilization: airport.utilization(),
            })
        })
        .collect()
}
