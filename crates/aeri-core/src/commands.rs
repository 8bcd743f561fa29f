//! Commands injected into a running simulation.
//!
//! Commands are queued and applied at the next tick boundary, before any
//! aircraft advances.

use serde::{Deserialize, Serialize};

use crate::enums::AbnormalEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Divert a flight into an abnormal phase (weather, runway incursion).
    InjectAbnormal {
        flight_id: String,
        event: AbnormalEvent,
    },
}
