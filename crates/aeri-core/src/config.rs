//! Simulation configuration and on-disk scenario rosters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEED, DEFAULT_SPACING_BUFFER, DEFAULT_TICK_MINUTES};
use crate::enums::ShortRoutePolicy;
use crate::error::SimError;
use crate::types::LatLon;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for traffic generation. Same seed = same roster.
    pub seed: u64,
    pub controller: ControllerConfig,
    pub pacing: PacingConfig,
    pub short_route: ShortRoutePolicy,
}

/// Runway controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Ticks a runway stays reserved after each clearance.
    pub spacing_buffer: u64,
}

/// Simulated time per tick. Unrelated to wall-clock pacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub tick_minutes: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            controller: ControllerConfig::default(),
            pacing: PacingConfig::default(),
            short_route: ShortRoutePolicy::default(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            spacing_buffer: DEFAULT_SPACING_BUFFER,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            tick_minutes: DEFAULT_TICK_MINUTES,
        }
    }
}

impl SimConfig {
    /// Default configuration with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let tick_minutes = self.pacing.tick_minutes;
        if !tick_minutes.is_finite() || tick_minutes <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "tick_minutes must be a positive number, got {tick_minutes}"
            )));
        }
        Ok(())
    }
}

/// An airport in the setup roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSpec {
    pub code: String,
    pub lat: f64,
    pub lon: f64,
}

/// A flight in the setup roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSpec {
    pub id: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub departure_tick: u64,
}

/// Airports and flights loaded from a JSON scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub airports: Vec<AirportSpec>,
    /// Empty means "generate random traffic".
    #[serde(default)]
    pub flights: Vec<FlightSpec>,
}

impl AirportSpec {
    pub fn new(code: &str, lat: f64, lon: f64) -> Self {
        Self {
            code: code.to_string(),
            lat,
            lon,
        }
    }

    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

impl FlightSpec {
    pub fn new(id: &str, origin: &str, destination: &str, departure_tick: u64) -> Self {
        Self {
            id: id.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_tick,
        }
    }
}
