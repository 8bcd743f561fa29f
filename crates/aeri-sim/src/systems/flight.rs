//! Flight system: advances every aircraft once, in roster order.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use aeri_core::components::{FlightLog, FlightPlan, Kinematics};
use aeri_core::error::SimError;
use aeri_core::events::SimEvent;

use crate::aircraft::{Aircraft, TickContext};
use crate::airport::Airport;
use crate::controller::RunwayController;

use super::missing;

/// Advance the whole roster by one tick.
///
/// Roster order is the ordering guarantee between aircraft sharing a runway:
/// an earlier aircraft's enqueue or clearance is always visible to a later one
/// within the same tick.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    airports: &mut BTreeMap<String, Airport>,
    controller: &RunwayController,
    ctx: &TickContext,
    events: &mut Vec<SimEvent>,
) -> Result<(), SimError> {
    for &entity in roster {
        let (plan, kinematics, log) = world
            .query_one_mut::<(&FlightPlan, &mut Kinematics, &mut FlightLog)>(entity)
            .map_err(|_| missing(entity))?;

        let airport = airports
            .get_mut(&plan.origin)
            .ok_or_else(|| SimError::InvalidRoute {
                flight_id: plan.id.clone(),
                reason: format!("unknown origin airport {}", plan.origin),
            })?;

        let mut aircraft = Aircraft {
            entity,
            plan,
            kinematics,
            log,
        };
        aircraft.advance(ctx, airport, controller, events);
    }
    Ok(())
}
