//! Abnormal-event injection.
//!
//! Diverts a flight into GoAround or EmergencyDescent. Both are terminal:
//! the flight system never moves or transitions an aircraft out of them.

use std::collections::HashMap;

use hecs::{Entity, World};
use log::{info, warn};

use aeri_core::components::{FlightLog, Kinematics};
use aeri_core::enums::AbnormalEvent;
use aeri_core::error::SimError;
use aeri_core::events::SimEvent;

use super::missing;

/// Apply one abnormal event. Ineligible requests are logged and ignored.
pub fn inject(
    world: &mut World,
    flights: &HashMap<String, Entity>,
    flight_id: &str,
    event: AbnormalEvent,
    tick: u64,
    events: &mut Vec<SimEvent>,
) -> Result<(), SimError> {
    let Some(&entity) = flights.get(flight_id) else {
        warn!("tick {tick}: ignoring {event:?} for unknown flight {flight_id}");
        return Ok(());
    };

    let (kinematics, log) = world
        .query_one_mut::<(&mut Kinematics, &mut FlightLog)>(entity)
        .map_err(|_| missing(entity))?;

    let from = kinematics.phase;
    if !event.applies_to(from) {
        warn!("tick {tick}: ignoring {event:?} for {flight_id} in phase {from}");
        return Ok(());
    }

    let to = event.target_phase();
    kinematics.phase = to;
    kinematics.altitude_ft = to.altitude_ft();
    log.ticks_in_phase = 0;
    info!("tick {tick}: {flight_id} {from} -> {to} ({event:?})");

    events.push(SimEvent::AbnormalInjected {
        flight_id: flight_id.to_string(),
        event,
        from,
    });
    events.push(SimEvent::PhaseChanged {
        flight_id: flight_id.to_string(),
        from,
        to,
    });
    Ok(())
}
