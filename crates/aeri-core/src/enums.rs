//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Flight lifecycle phase.
///
/// Normal progression follows declaration order from `GroundTaxi` to
/// `Landing`. `GoAround` and `EmergencyDescent` are side branches reached
/// only through abnormal-event injection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    #[serde(rename = "Ground_Taxi")]
    GroundTaxi,
    Queued,
    Takeoff,
    #[serde(rename = "Initial_Climb")]
    InitialClimb,
    Climb,
    Cruise,
    Descent,
    Approach,
    Landing,
    GoAround,
    EmergencyDescent,
}

impl FlightPhase {
    /// Every phase, normal progression first.
    pub const ALL: [FlightPhase; 11] = [
        FlightPhase::GroundTaxi,
        FlightPhase::Queued,
        FlightPhase::Takeoff,
        FlightPhase::InitialClimb,
        FlightPhase::Climb,
        FlightPhase::Cruise,
        FlightPhase::Descent,
        FlightPhase::Approach,
        FlightPhase::Landing,
        FlightPhase::GoAround,
        FlightPhase::EmergencyDescent,
    ];

    /// Nominal ground speed in knots.
    pub const fn speed_kt(self) -> f64 {
        match self {
            FlightPhase::GroundTaxi => 15.0,
            FlightPhase::Queued => 0.0,
            FlightPhase::Takeoff => 140.0,
            FlightPhase::InitialClimb => 220.0,
            FlightPhase::Climb => 350.0,
            FlightPhase::Cruise => 450.0,
            FlightPhase::Descent => 350.0,
            FlightPhase::Approach => 180.0,
            FlightPhase::Landing => 0.0,
            FlightPhase::GoAround => 200.0,
            FlightPhase::EmergencyDescent => 250.0,
        }
    }

    /// Representative altitude in feet.
    pub const fn altitude_ft(self) -> u32 {
        match self {
            FlightPhase::GroundTaxi | FlightPhase::Queued | FlightPhase::Landing => 0,
            FlightPhase::Takeoff => 500,
            FlightPhase::InitialClimb => 3000,
            FlightPhase::Climb => 12_000,
            FlightPhase::Cruise => 35_000,
            FlightPhase::Descent => 15_000,
            FlightPhase::Approach => 3000,
            FlightPhase::GoAround => 2000,
            FlightPhase::EmergencyDescent => 1000,
        }
    }

    /// Phases in which the aircraft moves along its route.
    pub const fn is_airborne(self) -> bool {
        matches!(
            self,
            FlightPhase::Takeoff
                | FlightPhase::InitialClimb
                | FlightPhase::Climb
                | FlightPhase::Cruise
                | FlightPhase::Descent
                | FlightPhase::Approach
        )
    }

    pub const fn is_abnormal(self) -> bool {
        matches!(self, FlightPhase::GoAround | FlightPhase::EmergencyDescent)
    }

    /// Phases with no outgoing transition.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            FlightPhase::Landing | FlightPhase::GoAround | FlightPhase::EmergencyDescent
        )
    }

    /// Canonical name, as used in logs and CSV output.
    pub const fn as_str(self) -> &'static str {
        match self {
            FlightPhase::GroundTaxi => "Ground_Taxi",
            FlightPhase::Queued => "Queued",
            FlightPhase::Takeoff => "Takeoff",
            FlightPhase::InitialClimb => "Initial_Climb",
            FlightPhase::Climb => "Climb",
            FlightPhase::Cruise => "Cruise",
            FlightPhase::Descent => "Descent",
            FlightPhase::Approach => "Approach",
            FlightPhase::Landing => "Landing",
            FlightPhase::GoAround => "GoAround",
            FlightPhase::EmergencyDescent => "EmergencyDescent",
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightPhase {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightPhase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| SimError::UnknownPhase(s.to_string()))
    }
}

/// Abnormal events that divert an airborne flight into a side-branch phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbnormalEvent {
    /// Missed approach. Only valid while on Approach.
    GoAround,
    /// Rapid descent from any airborne phase.
    EmergencyDescent,
}

impl AbnormalEvent {
    /// Phase entered when the event is applied.
    pub const fn target_phase(self) -> FlightPhase {
        match self {
            AbnormalEvent::GoAround => FlightPhase::GoAround,
            AbnormalEvent::EmergencyDescent => FlightPhase::EmergencyDescent,
        }
    }

    /// Whether a flight currently in `phase` can accept this event.
    pub const fn applies_to(self, phase: FlightPhase) -> bool {
        match self {
            AbnormalEvent::GoAround => matches!(phase, FlightPhase::Approach),
            AbnormalEvent::EmergencyDescent => phase.is_airborne(),
        }
    }
}

/// How phase thresholds behave on routes too short for the nominal profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortRoutePolicy {
    /// Nominal thresholds, unmodified. Climb-out may overshoot a short route.
    #[default]
    Literal,
    /// Thresholds clamped to be non-decreasing and bounded by the route.
    Clamped,
}

impl FromStr for ShortRoutePolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(ShortRoutePolicy::Literal),
            "clamped" => Ok(ShortRoutePolicy::Clamped),
            other => Err(SimError::InvalidConfig(format!(
                "unknown short-route policy '{other}'"
            ))),
        }
    }
}
