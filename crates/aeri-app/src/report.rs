//! Console status lines through the `log` facade.

use log::info;

use aeri_core::enums::FlightPhase;
use aeri_core::state::TickSnapshot;
use aeri_sim::scheduler::{RunSummary, TickObserver};

use crate::error::AppError;

pub struct ConsoleReporter {
    report_every: u64,
}

impl ConsoleReporter {
    /// `report_every == 0` disables the periodic census.
    pub fn new(report_every: u64) -> Self {
        Self { report_every }
    }

    fn due(&self, tick: u64) -> bool {
        self.report_every > 0 && (tick + 1) % self.report_every == 0
    }
}

/// One-line phase census, e.g. `tick 59 (60.0 min): Queued=3 Cruise=12 Landing=5`.
pub fn census(snapshot: &TickSnapshot) -> String {
    let counts: Vec<String> = FlightPhase::ALL
        .iter()
        .map(|&phase| (phase, snapshot.count_in_phase(phase)))
        .filter(|&(_, n)| n > 0)
        .map(|(phase, n)| format!("{phase}={n}"))
        .collect();
    format!(
        "tick {} ({:.1} min): {}",
        snapshot.tick(),
        snapshot.time.elapsed_minutes,
        counts.join(" ")
    )
}

impl TickObserver for ConsoleReporter {
    type Error = AppError;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), AppError> {
        if self.due(snapshot.tick()) {
            info!("{}", census(snapshot));
        }
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<(), AppError> {
        for (code, takeoffs) in &summary.utilization {
            info!("{code} runway utilization: {takeoffs} takeoffs");
        }
        info!(
            "{} ticks ({:.0} min): {} landed, {} airborne, {} queued, {} diverted, {} total delay ticks",
            summary.ticks,
            summary.elapsed_minutes,
            summary.landed,
            summary.airborne,
            summary.queued,
            summary.abnormal,
            summary.total_delay_ticks
        );
        Ok(())
    }
}
