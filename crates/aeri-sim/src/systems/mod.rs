//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the world and the engine's side tables.
//! They do not own state. Every per-aircraft pass walks the roster in
//! creation order; ECS archetype order is never relied upon.

pub mod abnormal;
pub mod flight;
pub mod snapshot;

use hecs::Entity;

use aeri_core::error::SimError;

pub(crate) fn missing(entity: Entity) -> SimError {
    SimError::MissingAircraft(format!("{entity:?}"))
}
