//! Runway controller: arbitrates takeoff clearance at each airport.
//!
//! Approval is the only operation that removes an aircraft from a runway
//! queue. Ordering is strict FIFO with no priority or reordering.

use hecs::Entity;

use aeri_core::config::ControllerConfig;

use crate::airport::Airport;

#[derive(Debug, Clone, Copy)]
pub struct RunwayController {
    spacing_buffer: u64,
}

impl RunwayController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            spacing_buffer: config.spacing_buffer,
        }
    }

    pub fn spacing_buffer(&self) -> u64 {
        self.spacing_buffer
    }

    /// Whether `aircraft` may depart `airport` at `tick`.
    ///
    /// Requires the runway to be free, the aircraft to be at the head of the
    /// queue, and no clearance already granted in this tick.
    pub fn may_depart(&self, aircraft: Entity, airport: &Airport, tick: u64) -> bool {
        tick >= airport.busy_until()
            && airport.last_clearance() != Some(tick)
            && airport.head() == Some(aircraft)
    }

    /// Grant takeoff clearance if allowed.
    ///
    /// On approval the aircraft leaves the queue, the runway is reserved until
    /// `tick + spacing_buffer` (saturating) and the airport's utilization count increases.
    pub fn approve_takeoff(&self, aircraft: Entity, airport: &mut Airport, tick: u64) -> bool {
        if !self.may_depart(aircraft, airport, tick) {
            return false;
        }
        airport.dequeue();
        airport.reserve(tick, tick.saturating_add(self.spacing_buffer));
        true
    }
}
