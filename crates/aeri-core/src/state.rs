//! Tick snapshot: the complete visible state handed to observers after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::FlightPhase;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Immutable state of the whole simulation after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// `time.tick` is the tick just simulated.
    pub time: SimTime,
    /// Aircraft in roster (creation) order.
    pub aircraft: Vec<AircraftView>,
    /// Airports ordered by code.
    pub airports: Vec<AirportView>,
    /// Events raised during this tick, in the order they happened.
    pub events: Vec<SimEvent>,
}

/// One aircraft's state for display and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure_tick: u64,
    pub phase: FlightPhase,
    pub lat: f64,
    pub lon: f64,
    pub bearing_deg: f64,
    pub distance_traveled_nm: f64,
    pub route_distance_nm: f64,
    pub altitude_ft: u32,
    pub delay_ticks: u64,
    pub ticks_in_phase: u64,
}

/// Runway state of one airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportView {
    pub code: String,
    pub lat: f64,
    pub lon: f64,
    /// Flight ids waiting for clearance, head first.
    pub queue: Vec<String>,
    /// No clearance is granted before this tick.
    pub busy_until: u64,
    /// Total takeoffs granted.
    pub utilization: u32,
}

impl TickSnapshot {
    pub fn tick(&self) -> u64 {
        self.time.tick
    }

    /// Number of aircraft currently in `phase`.
    pub fn count_in_phase(&self, phase: FlightPhase) -> usize {
        self.aircraft.iter().filter(|a| a.phase == phase).count()
    }

    pub fn aircraft_by_id(&self, id: &str) -> Option<&AircraftView> {
        self.aircraft.iter().find(|a| a.id == id)
    }

    pub fn airport_by_code(&self, code: &str) -> Option<&AirportView> {
        self.airports.iter().find(|a| a.code == code)
    }
}
