//! Wall-clock pacing between ticks. Purely cosmetic: the simulation never
//! reads the clock.

use std::time::{Duration, Instant};

use aeri_core::state::TickSnapshot;
use aeri_sim::scheduler::TickObserver;

use crate::error::AppError;

pub struct Pacer {
    tick_duration: Duration,
    next_tick_time: Option<Instant>,
}

impl Pacer {
    pub fn new(seconds_per_tick: f64) -> Result<Self, AppError> {
        let tick_duration = Duration::try_from_secs_f64(seconds_per_tick).map_err(|_| {
            AppError::InvalidArgument(format!(
                "realtime must be a non-negative number of seconds, got {seconds_per_tick}"
            ))
        })?;
        Ok(Self {
            tick_duration,
            next_tick_time: None,
        })
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// How long to sleep at `now`, advancing the schedule by one tick.
    fn delay(&mut self, now: Instant) -> Option<Duration> {
        let next = self.next_tick_time.unwrap_or(now) + self.tick_duration;
        if next > now {
            self.next_tick_time = Some(next);
            Some(next - now)
        } else {
            // Too far behind; restart the schedule instead of catching up.
            if now - next > self.tick_duration * 2 {
                self.next_tick_time = Some(now);
            } else {
                self.next_tick_time = Some(next);
            }
            None
        }
    }
}

impl TickObserver for Pacer {
    type Error = AppError;

    fn on_tick(&mut self, _snapshot: &TickSnapshot) -> Result<(), AppError> {
        if self.tick_duration.is_zero() {
            return Ok(());
        }
        if let Some(delay) = self.delay(Instant::now()) {
            std::thread::sleep(delay);
        }
        Ok(())
    }
}
