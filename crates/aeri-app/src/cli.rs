use std::path::PathBuf;

use clap::Parser;

use aeri_core::config::{ControllerConfig, PacingConfig, SimConfig};
use aeri_core::enums::ShortRoutePolicy;

#[derive(Parser, Debug)]
#[command(name = "aeri", about = "Tick-driven air traffic simulator")]
pub struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    pub ticks: u64,

    /// Random flights to generate when the scenario has none
    #[arg(long, default_value_t = 30)]
    pub flights: usize,

    /// Wall-clock seconds per tick (0 runs flat out)
    #[arg(long, default_value_t = 0.05)]
    pub realtime: f64,

    /// Simulated minutes per tick
    #[arg(long = "tick-minutes", default_value_t = 1.0)]
    pub tick_minutes: f64,

    /// Ticks a runway stays busy after each takeoff
    #[arg(long = "spacing-buffer", default_value_t = 2)]
    pub spacing_buffer: u64,

    /// Seed for random traffic
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Phase thresholds for routes shorter than 80 nm: literal or clamped
    #[arg(long = "short-route", default_value = "literal")]
    pub short_route: ShortRoutePolicy,

    /// JSON scenario with airports and optional flights
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Per-tick CSV log
    #[arg(long, default_value = "sim_log.csv")]
    pub csv: PathBuf,

    /// Disable the CSV log
    #[arg(long = "no-csv")]
    pub no_csv: bool,

    /// Ticks between console status lines (0 disables)
    #[arg(long = "report-every", default_value_t = 60)]
    pub report_every: u64,
}

impl Args {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            controller: ControllerConfig {
                spacing_buffer: self.spacing_buffer,
            },
            pacing: PacingConfig {
                tick_minutes: self.tick_minutes,
            },
            short_route: self.short_route,
        }
    }
}
