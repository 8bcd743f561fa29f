//! Simulation engine for aeri.
//!
//! Owns the hecs world, advances aircraft through their flight phases one
//! tick at a time, arbitrates runway access per airport, and produces
//! `TickSnapshot`s for observers.

pub mod aircraft;
pub mod airport;
pub mod controller;
pub mod engine;
pub mod phase;
pub mod scenario;
pub mod scheduler;
pub mod systems;
pub mod traffic;
pub mod world_setup;

pub use aeri_core as core;
pub use engine::SimulationEngine;
pub use scheduler::{RunSummary, TickObserver};

#[cfg(test)]
mod tests;
