//! Core types and definitions for the aeri air traffic simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! positions, flight phases, components, commands, snapshots, events,
//! configuration, geodesy and errors. It has no dependency on the ECS
//! or on any runtime front-end.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geodesy;
pub mod state;
pub mod types;

pub use error::SimError;
