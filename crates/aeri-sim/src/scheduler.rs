//! Tick scheduler: drives the engine for a fixed number of ticks and hands
//! each snapshot to an observer once the whole roster has advanced.
//!
//! Observers run strictly after a tick completes; they see immutable
//! snapshots and cannot influence the simulation.

use serde::{Deserialize, Serialize};

use aeri_core::enums::FlightPhase;
use aeri_core::error::SimError;
use aeri_core::state::TickSnapshot;

use crate::engine::SimulationEngine;

/// Consumer of per-tick snapshots (renderer, logger, recorder).
pub trait TickObserver {
    type Error;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), Self::Error>;

    fn on_finish(&mut self, _summary: &RunSummary) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// End-of-run statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_minutes: f64,
    pub landed: usize,
    pub airborne: usize,
    pub queued: usize,
    pub abnormal: usize,
    pub total_delay_ticks: u64,
    /// (airport code, takeoffs granted), ordered by code.
    pub utilization: Vec<(String, u32)>,
}

impl RunSummary {
    pub fn from_snapshot(ticks: u64, snapshot: &TickSnapshot) -> Self {
        let aircraft = &snapshot.aircraft;
        Self {
            ticks,
            elapsed_minutes: snapshot.time.elapsed_minutes,
            landed: snapshot.count_in_phase(FlightPhase::Landing),
            airborne: aircraft.iter().filter(|a| a.phase.is_airborne()).count(),
            queued: snapshot.count_in_phase(FlightPhase::Queued),
            abnormal: aircraft.iter().filter(|a| a.phase.is_abnormal()).count(),
            total_delay_ticks: aircraft.iter().map(|a| a.delay_ticks).sum(),
            utilization: snapshot
                .airports
                .iter()
                .map(|a| (a.code.clone(), a.utilization))
                .collect(),
        }
    }
}

/// Run `duration` ticks, feeding every snapshot to `observer`.
pub fn run<O>(
    engine: &mut SimulationEngine,
    duration: u64,
    observer: &mut O,
) -> Result<RunSummary, O::Error>
where
    O: TickObserver + ?Sized,
    O::Error: From<SimError>,
{
    let mut last = None;
    for _ in 0..duration {
        let snapshot = engine.tick()?;
        observer.on_tick(&snapshot)?;
        last = Some(snapshot);
    }

    let last = match last {
        Some(snapshot) => snapshot,
        None => engine.snapshot()?,
    };
    let summary = RunSummary::from_snapshot(duration, &last);
    observer.on_finish(&summary)?;
    Ok(summary)
}

/// Records every snapshot in memory.
impl TickObserver for Vec<TickSnapshot> {
    type Error = SimError;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), Self::Error> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Two observers with a common error type, notified in order.
impl<A, B> TickObserver for (A, B)
where
    A: TickObserver,
    B: TickObserver<Error = A::Error>,
{
    type Error = A::Error;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), Self::Error> {
        self.0.on_tick(snapshot)?;
        self.1.on_tick(snapshot)
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        self.0.on_finish(summary)?;
        self.1.on_finish(summary)
    }
}

impl<O: TickObserver + ?Sized> TickObserver for &mut O {
    type Error = O::Error;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), Self::Error> {
        (**self).on_tick(snapshot)
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        (**self).on_finish(summary)
    }
}

/// A disabled observer is a no-op.
impl<O: TickObserver> TickObserver for Option<O> {
    type Error = O::Error;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), Self::Error> {
        match self {
            Some(observer) => observer.on_tick(snapshot),
            None => Ok(()),
        }
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        match self {
            Some(observer) => observer.on_finish(summary),
            None => Ok(()),
        }
    }
}
