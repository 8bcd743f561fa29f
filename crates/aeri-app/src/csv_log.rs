//! Per-tick CSV record of every aircraft.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use aeri_core::enums::FlightPhase;
use aeri_core::state::{AircraftView, TickSnapshot};
use aeri_sim::scheduler::{RunSummary, TickObserver};

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    tick: u64,
    flight_id: &'a str,
    origin: &'a str,
    destination: &'a str,
    phase: FlightPhase,
    lat: f64,
    lon: f64,
    distance_travelled_nm: f64,
    route_distance_nm: f64,
    altitude: u32,
    delay: u64,
}

impl<'a> CsvRecord<'a> {
    fn new(tick: u64, aircraft: &'a AircraftView) -> Self {
        Self {
            tick,
            flight_id: &aircraft.id,
            origin: &aircraft.origin,
            destination: &aircraft.destination,
            phase: aircraft.phase,
            lat: aircraft.lat,
            lon: aircraft.lon,
            distance_travelled_nm: aircraft.distance_traveled_nm,
            route_distance_nm: aircraft.route_distance_nm,
            altitude: aircraft.altitude_ft,
            delay: aircraft.delay_ticks,
        }
    }
}

pub struct CsvLogger<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvLogger<File> {
    pub fn create(path: &Path) -> Result<Self, AppError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvLogger<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, AppError> {
        self.writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }
}

impl<W: Write> TickObserver for CsvLogger<W> {
    type Error = AppError;

    fn on_tick(&mut self, snapshot: &TickSnapshot) -> Result<(), AppError> {
        let tick = snapshot.tick();
        for aircraft in &snapshot.aircraft {
            self.writer.serialize(CsvRecord::new(tick, aircraft))?;
        }
        Ok(())
    }

    fn on_finish(&mut self, _summary: &RunSummary) -> Result<(), AppError> {
        self.writer.flush()?;
        Ok(())
    }
}
