//! Airport runway state, stored in `SimulationEngine`'s airport map,
//! NOT as ECS entities.

use std::collections::VecDeque;

use hecs::Entity;

use aeri_core::types::LatLon;

/// An airport and its single departure runway.
#[derive(Debug, Clone)]
pub struct Airport {
    code: String,
    position: LatLon,
    /// Aircraft waiting for takeoff clearance, head first.
    queue: VecDeque<Entity>,
    /// No clearance before this tick.
    busy_until: u64,
    /// Tick of the most recent clearance.
    last_clearance: Option<u64>,
    /// Total takeoffs granted.
    utilization: u32,
}

impl Airport {
    pub fn new(code: impl Into<String>, position: LatLon) -> Self {
        Self {
            code: code.into(),
            position,
            queue: VecDeque::new(),
            busy_until: 0,
            last_clearance: None,
            utilization: 0,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn position(&self) -> LatLon {
        self.position
    }

    pub fn busy_until(&self) -> u64 {
        self.busy_until
    }

    pub fn last_clearance(&self) -> Option<u64> {
        self.last_clearance
    }

    pub fn utilization(&self) -> u32 {
        self.utilization
    }

    /// Aircraft at the head of the runway queue.
    pub fn head(&self) -> Option<Entity> {
        self.queue.front().copied()
    }

    pub fn queue(&self) -> impl Iterator<Item = Entity> + '_ {
        self.queue.iter().copied()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Append an aircraft at the tail of the runway queue.
    pub fn enqueue(&mut self, aircraft: Entity) {
        self.queue.push_back(aircraft);
    }

    /// Remove and return the head of the runway queue.
    pub fn dequeue(&mut self) -> Option<Entity> {
        self.queue.pop_front()
    }

    /// Record a clearance granted at `tick`, holding the runway until `busy_until`.
    pub(crate) fn reserve(&mut self, tick: u64, busy_until: u64) {
        self.busy_until = busy_until;
        self.last_clearance = Some(tick);
        self.utilization += 1;
    }
}
