//! Simulation constants and tuning parameters.

// --- Geodesy ---

/// Mean Earth radius in kilometers (IUGG mean radius).
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Kilometers per nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = EARTH_RADIUS_KM / KM_PER_NM;

// --- Phase progression thresholds (nautical miles) ---

/// Distance flown after which Takeoff becomes Initial_Climb.
pub const INITIAL_CLIMB_AFTER_NM: f64 = 2.0;

/// Distance flown after which Initial_Climb becomes Climb.
pub const CLIMB_AFTER_NM: f64 = 10.0;

/// Distance flown after which Climb becomes Cruise.
pub const CRUISE_AFTER_NM: f64 = 40.0;

/// Remaining distance at which Cruise becomes Descent.
pub const DESCENT_REMAINING_NM: f64 = 40.0;

/// Remaining distance at which Descent becomes Approach.
pub const APPROACH_REMAINING_NM: f64 = 10.0;

// --- Runway ---

/// Default number of ticks a runway stays reserved after a clearance.
pub const DEFAULT_SPACING_BUFFER: u64 = 2;

// --- Pacing ---

/// Default simulated minutes per tick.
pub const DEFAULT_TICK_MINUTES: f64 = 1.0;

/// Default RNG seed for traffic generation.
pub const DEFAULT_SEED: u64 = 42;

/// Minutes per hour, for knots to nm-per-tick conversion.
pub const MINUTES_PER_HOUR: f64 = 60.0;
