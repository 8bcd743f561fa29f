//! Per-aircraft tick advance.
//!
//! `Aircraft` is a borrowed view over one entity's flight components.
//! `advance` runs exactly once per aircraft per tick and is the only code
//! that mutates phase, position and bookkeeping during normal progression.

use hecs::Entity;
use log::{debug, info};

use aeri_core::components::{FlightLog, FlightPlan, Kinematics};
use aeri_core::constants::MINUTES_PER_HOUR;
use aeri_core::enums::{FlightPhase, ShortRoutePolicy};
use aeri_core::events::SimEvent;

use crate::airport::Airport;
use crate::controller::RunwayController;
use crate::phase::{next_phase, PhaseThresholds};

/// Per-tick inputs shared by every aircraft.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    pub tick: u64,
    /// Simulated minutes represented by one tick.
    pub tick_minutes: f64,
    pub short_route: ShortRoutePolicy,
}

/// Mutable view over one aircraft's components.
pub struct Aircraft<'a> {
    pub entity: Entity,
    pub plan: &'a FlightPlan,
    pub kinematics: &'a mut Kinematics,
    pub log: &'a mut FlightLog,
}

impl Aircraft<'_> {
    pub fn phase(&self) -> FlightPhase {
        self.kinematics.phase
    }

    /// Advance this aircraft by one tick.
    ///
    /// `airport` must be the aircraft's origin. Events raised along the way
    /// are appended to `events`.
    pub fn advance(
        &mut self,
        ctx: &TickContext,
        airport: &mut Airport,
        controller: &RunwayController,
        events: &mut Vec<SimEvent>,
    ) {
        // Join the runway queue; no movement this tick.
        if self.kinematics.phase == FlightPhase::GroundTaxi && !self.log.joined_queue {
            airport.enqueue(self.entity);
            self.log.joined_queue = true;
            debug!(
                "tick {}: {} queued at {} (position {})",
                ctx.tick,
                self.plan.id,
                airport.code(),
                airport.queue_len()
            );
            events.push(SimEvent::QueueJoined {
                flight_id: self.plan.id.clone(),
                airport: airport.code().to_string(),
            });
            self.change_phase(FlightPhase::Queued, events);
            return;
        }

        // Wait for clearance.
        if self.kinematics.phase == FlightPhase::Queued {
            if controller.approve_takeoff(self.entity, airport, ctx.tick) {
                debug!(
                    "tick {}: {} cleared for takeoff at {} after {} ticks delay",
                    ctx.tick,
                    self.plan.id,
                    airport.code(),
                    self.log.delay_ticks
                );
                events.push(SimEvent::TakeoffCleared {
                    flight_id: self.plan.id.clone(),
                    airport: airport.code().to_string(),
                    delay_ticks: self.log.delay_ticks,
                });
                self.change_phase(FlightPhase::Takeoff, events);
                self.log.ticks_in_phase = 0;
            } else {
                self.log.delay_ticks = self.log.delay_ticks.saturating_add(1);
            }
            return;
        }

        if self.kinematics.phase.is_airborne() {
            self.fly(ctx.tick_minutes);
        }

        let thresholds = PhaseThresholds::for_route(self.plan.route_distance_nm, ctx.short_route);
        if let Some(next) = next_phase(
            self.kinematics.phase,
            self.kinematics.distance_traveled_nm,
            &thresholds,
        ) {
            self.change_phase(next, events);
            self.log.ticks_in_phase = 0;
            if next == FlightPhase::Landing {
                info!(
                    "tick {}: {} landed at {} ({:.1} nm flown)",
                    ctx.tick,
                    self.plan.id,
                    self.plan.destination,
                    self.kinematics.distance_traveled_nm
                );
                events.push(SimEvent::Landed {
                    flight_id: self.plan.id.clone(),
                    airport: self.plan.destination.clone(),
                });
            }
        }

        self.kinematics.altitude_ft = self.kinematics.phase.altitude_ft();
        self.log.ticks_in_phase = self.log.ticks_in_phase.saturating_add(1);
    }

    /// Move along the fixed initial bearing at the current phase's speed.
    fn fly(&mut self, tick_minutes: f64) {
        let step_nm = self.kinematics.phase.speed_kt() * tick_minutes / MINUTES_PER_HOUR;
        self.kinematics.distance_traveled_nm += step_nm;
        self.kinematics.position = self
            .kinematics
            .position
            .project(self.plan.bearing_deg, step_nm);
    }

    fn change_phase(&mut self, to: FlightPhase, events: &mut Vec<SimEvent>) {
        let from = self.kinematics.phase;
        self.kinematics.phase = to;
        debug!("{}: {} -> {}", self.plan.id, from, to);
        events.push(SimEvent::PhaseChanged {
            flight_id: self.plan.id.clone(),
            from,
            to,
        });
    }
}
