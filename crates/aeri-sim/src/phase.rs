//! Flight phase state machine.
//!
//! Pure functions over plain data: given the current phase and the
//! distance flown, decide whether the flight moves to the next phase.
//! At most one transition happens per evaluation.

use aeri_core::constants::*;
use aeri_core::enums::{FlightPhase, ShortRoutePolicy};

/// Distance thresholds (nautical miles flown) for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseThresholds {
    /// Takeoff -> Initial_Climb when distance > this.
    pub initial_climb: f64,
    /// Initial_Climb -> Climb when distance > this.
    pub climb: f64,
    /// Climb -> Cruise when distance > this.
    pub cruise: f64,
    /// Cruise -> Descent when distance > this.
    pub descent: f64,
    /// Descent -> Approach when distance > this.
    pub approach: f64,
    /// Approach -> Landing when distance >= this.
    pub landing: f64,
}

impl PhaseThresholds {
    pub fn for_route(route_distance_nm: f64, policy: ShortRoutePolicy) -> Self {
        let r = route_distance_nm;
        match policy {
            ShortRoutePolicy::Literal => Self {
                initial_climb: INITIAL_CLIMB_AFTER_NM,
                climb: CLIMB_AFTER_NM,
                cruise: CRUISE_AFTER_NM,
                descent: r - DESCENT_REMAINING_NM,
                approach: r - APPROACH_REMAINING_NM,
                landing: r,
            },
            ShortRoutePolicy::Clamped => {
                let initial_climb = INITIAL_CLIMB_AFTER_NM.min(r);
                let climb = CLIMB_AFTER_NM.min(r).max(initial_climb);
                let cruise = CRUISE_AFTER_NM.min(r).max(climb);
                let descent = (r - DESCENT_REMAINING_NM).max(cruise);
                let approach = (r - APPROACH_REMAINING_NM).max(descent);
                Self {
                    initial_climb,
                    climb,
                    cruise,
                    descent,
                    approach,
                    landing: r,
                }
            }
        }
    }
}

/// The phase to switch to, if any. Only the current phase's exit is checked.
pub fn next_phase(
    phase: FlightPhase,
    distance_nm: f64,
    thresholds: &PhaseThresholds,
) -> Option<FlightPhase> {
    match phase {
        FlightPhase::Takeoff if distance_nm > thresholds.initial_climb => {
            Some(FlightPhase::InitialClimb)
        }
        FlightPhase::InitialClimb if distance_nm > thresholds.climb => Some(FlightPhase::Climb),
        FlightPhase::Climb if distance_nm > thresholds.cruise => Some(FlightPhase::Cruise),
        FlightPhase::Cruise if distance_nm > thresholds.descent => Some(FlightPhase::Descent),
        FlightPhase::Descent if distance_nm > thresholds.approach => Some(FlightPhase::Approach),
        FlightPhase::Approach if distance_nm >= thresholds.landing => Some(FlightPhase::Landing),
        _ => None,
    }
}
