//! Error type shared by every simulation crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Origin equals destination, or an airport code is unknown.
    #[error("invalid route for flight {flight_id}: {reason}")]
    InvalidRoute { flight_id: String, reason: String },

    /// A phase name that is not part of the flight lifecycle.
    #[error("unknown flight phase '{0}'")]
    UnknownPhase(String),

    #[error("duplicate airport code {0}")]
    DuplicateAirport(String),

    #[error("duplicate flight id {0}")]
    DuplicateFlight(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A roster entity lost its flight components.
    #[error("aircraft {0} is missing from the world")]
    MissingAircraft(String),
}
