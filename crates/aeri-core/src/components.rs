//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Flight logic lives in the sim crate, not in components.

use serde::{Deserialize, Serialize};

use crate::enums::FlightPhase;
use crate::types::LatLon;

/// Identity and fixed route geometry of a flight, set once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlan {
    pub id: String,
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    pub departure_tick: u64,
    /// Initial great-circle bearing origin -> destination (degrees).
    pub bearing_deg: f64,
    /// Great-circle distance origin -> destination (nautical miles).
    pub route_distance_nm: f64,
}

/// Mutable kinematic state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kinematics {
    pub phase: FlightPhase,
    pub position: LatLon,
    /// Cumulative distance flown (nautical miles, never decreases).
    pub distance_traveled_nm: f64,
    pub altitude_ft: u32,
}

/// Per-flight bookkeeping counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightLog {
    pub ticks_in_phase: u64,
    /// Ticks spent queued without clearance.
    pub delay_ticks: u64,
    /// Set once the flight has joined its origin's runway queue.
    pub joined_queue: bool,
}
