//! Simulation engine: the core of the simulator.
//!
//! `SimulationEngine` owns the hecs world, the ordered aircraft roster, the
//! airports and the runway controller. It processes injected commands,
//! advances every aircraft once per tick and produces `TickSnapshot`s.
//! Completely headless and independent of wall-clock time, so replays are
//! deterministic.

use std::collections::{BTreeMap, HashMap, VecDeque};

use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aeri_core::commands::SimCommand;
use aeri_core::config::{AirportSpec, FlightSpec, SimConfig};
use aeri_core::error::SimError;
use aeri_core::events::SimEvent;
use aeri_core::state::TickSnapshot;
use aeri_core::types::SimTime;

use crate::aircraft::TickContext;
use crate::airport::Airport;
use crate::controller::RunwayController;
use crate::systems;
use crate::traffic;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    /// Aircraft in creation order; the only iteration order used per tick.
    roster: Vec<Entity>,
    flights: HashMap<String, Entity>,
    airports: BTreeMap<String, Airport>,
    controller: RunwayController,
    config: SimConfig,
    time: SimTime,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine from explicit airport and flight rosters.
    pub fn new(
        config: SimConfig,
        airports: &[AirportSpec],
        flights: &[FlightSpec],
    ) -> Result<Self, SimError> {
        config.validate()?;
        let airport_map = world_setup::build_airports(airports)?;

        let mut world = World::new();
        let mut roster = Vec::with_capacity(flights.len());
        let mut index = HashMap::with_capacity(flights.len());
        for spec in flights {
            if index.contains_key(&spec.id) {
                return Err(SimError::DuplicateFlight(spec.id.clone()));
            }
            let entity = world_setup::spawn_flight(&mut world, &airport_map, spec)?;
            index.insert(spec.id.clone(), entity);
            roster.push(entity);
        }

        info!(
            "simulation ready: {} airports, {} flights, spacing buffer {}, {} min/tick",
            airport_map.len(),
            roster.len(),
            config.controller.spacing_buffer,
            config.pacing.tick_minutes
        );

        Ok(Self {
            world,
            roster,
            flights: index,
            airports: airport_map,
            controller: RunwayController::new(config.controller),
            config,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Create an engine with `count` random flights, seeded from `config.seed`.
    pub fn with_random_traffic(
        config: SimConfig,
        airports: &[AirportSpec],
        count: usize,
    ) -> Result<Self, SimError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let flights = traffic::generate_flights(&mut rng, airports, count)?;
        Self::new(config, airports, &flights)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> Result<TickSnapshot, SimError> {
        let tick = self.time.tick;
        self.process_commands(tick)?;

        let ctx = TickContext {
            tick,
            tick_minutes: self.config.pacing.tick_minutes,
            short_route: self.config.short_route,
        };
        systems::flight::run(
            &mut self.world,
            &self.roster,
            &mut self.airports,
            &self.controller,
            &ctx,
            &mut self.events,
        )?;

        self.time.advance(ctx.tick_minutes);
        let time = SimTime {
            tick,
            elapsed_minutes: self.time.elapsed_minutes,
        };
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.roster, &self.airports, time, events)
    }

    /// Snapshot of the current state without advancing. Carries no events.
    pub fn snapshot(&self) -> Result<TickSnapshot, SimError> {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.airports,
            self.time,
            Vec::new(),
        )
    }

    /// Get the current simulation time (the next tick to run).
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn controller(&self) -> &RunwayController {
        &self.controller
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Aircraft entities in creation order.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn flight_entity(&self, flight_id: &str) -> Option<Entity> {
        self.flights.get(flight_id).copied()
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Process all queued commands.
    fn process_commands(&mut self, tick: u64) -> Result<(), SimError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, tick)?;
        }
        Ok(())
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand, tick: u64) -> Result<(), SimError> {
        match command {
            SimCommand::InjectAbnormal { flight_id, event } => systems::abnormal::inject(
                &mut self.world,
                &self.flights,
                &flight_id,
                event,
                tick,
                &mut self.events,
            ),
        }
    }
}
