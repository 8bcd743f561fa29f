//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees (WGS-84 latitude/longitude, spherical model).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulated time in minutes.
    pub elapsed_minutes: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Initial great-circle bearing to another point, degrees in [0, 360).
    pub fn bearing_to(&self, other: &LatLon) -> f64 {
        crate::geodesy::bearing(*self, *other)
    }

    /// Great-circle distance to another point in nautical miles.
    pub fn distance_nm(&self, other: &LatLon) -> f64 {
        crate::geodesy::distance_nm(*self, *other)
    }

    /// The point reached by travelling `distance_nm` along `bearing_deg`.
    pub fn project(&self, bearing_deg: f64, distance_nm: f64) -> LatLon {
        crate::geodesy::project(*self, bearing_deg, distance_nm)
    }
}

impl SimTime {
    /// Advance by one tick of `tick_minutes` simulated minutes.
    pub fn advance(&mut self, tick_minutes: f64) {
        self.tick += 1;
        self.elapsed_minutes += tick_minutes;
    }
}
