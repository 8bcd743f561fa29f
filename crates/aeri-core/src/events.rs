//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AbnormalEvent, FlightPhase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Flight entered the runway queue of its origin airport.
    QueueJoined { flight_id: String, airport: String },
    /// Runway controller granted takeoff clearance.
    TakeoffCleared {
        flight_id: String,
        airport: String,
        delay_ticks: u64,
    },
    PhaseChanged {
        flight_id: String,
        from: FlightPhase,
        to: FlightPhase,
    },
    /// Flight reached its destination.
    Landed { flight_id: String, airport: String },
    /// An abnormal event was applied to a flight.
    AbnormalInjected {
        flight_id: String,
        event: AbnormalEvent,
        from: FlightPhase,
    },
}
