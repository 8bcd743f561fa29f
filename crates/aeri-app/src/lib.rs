//! Command-line runner for the aeri simulator.
//!
//! Builds an engine from the built-in airports or a JSON scenario, then
//! drives it through the tick scheduler with the CSV logger, the console
//! reporter and the wall-clock pacer attached.

pub mod cli;
pub mod csv_log;
pub mod error;
pub mod pacing;
pub mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use aeri_core::config::ScenarioFile;
use aeri_sim::scenario::pacific_northwest;
use aeri_sim::{scheduler, RunSummary, SimulationEngine};

use crate::cli::Args;
use crate::csv_log::CsvLogger;
use crate::error::AppError;
use crate::pacing::Pacer;
use crate::report::ConsoleReporter;

pub fn load_scenario(path: &Path) -> Result<ScenarioFile, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Build the engine described by `args`.
///
/// A scenario without flights gets `args.flights` random flights over its
/// airports.
pub fn build_engine(args: &Args) -> Result<SimulationEngine, AppError> {
    let config = args.sim_config();
    let scenario = match &args.scenario {
        Some(path) => {
            info!("loading scenario {}", path.display());
            load_scenario(path)?
        }
        None => ScenarioFile {
            airports: pacific_northwest(),
            flights: Vec::new(),
        },
    };

    let engine = if scenario.flights.is_empty() {
        SimulationEngine::with_random_traffic(config, &scenario.airports, args.flights)?
    } else {
        SimulationEngine::new(config, &scenario.airports, &scenario.flights)?
    };
    Ok(engine)
}

pub fn run(args: &Args) -> Result<RunSummary, AppError> {
    let mut engine = build_engine(args)?;

    let csv = if args.no_csv {
        None
    } else {
        info!("writing per-tick log to {}", args.csv.display());
        Some(CsvLogger::create(&args.csv)?)
    };
    let reporter = ConsoleReporter::new(args.report_every);
    let pacer = Pacer::new(args.realtime)?;

    let mut observers = ((csv, reporter), pacer);
    scheduler::run(&mut engine, args.ticks, &mut observers)
}
