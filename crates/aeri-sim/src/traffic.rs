//! Random traffic generation.

use rand::Rng;

use aeri_core::config::{AirportSpec, FlightSpec};
use aeri_core::error::SimError;

/// Generate `count` flights between distinct random airports.
///
/// Flight `i` is named `FL{i:03}` and scheduled at departure tick `i`.
/// Origin and destination are drawn without replacement, so they never match.
pub fn generate_flights<R: Rng + ?Sized>(
    rng: &mut R,
    airports: &[AirportSpec],
    count: usize,
) -> Result<Vec<FlightSpec>, SimError> {
    if count > 0 && airports.len() < 2 {
        return Err(SimError::InvalidConfig(format!(
            "random traffic needs at least two airports, got {}",
            airports.len()
        )));
    }

    let flights = (0..count)
        .map(|i| {
            let picks = rand::seq::index::sample(&mut *rng, airports.len(), 2);
            let origin = &airports[picks.index(0)];
            let destination = &airports[picks.index(1)];
            FlightSpec::new(&format!("FL{i:03}"), &origin.code, &destination.code, i as u64)
        })
        .collect();
    Ok(flights)
}
