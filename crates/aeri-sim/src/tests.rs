//! Tests for the simulation engine, runway arbitration, abnormal injection and the scheduler.

use std::collections::HashMap;

use aeri_core::commands::SimCommand;
use aeri_core::config::{AirportSpec, FlightSpec, SimConfig};
use aeri_core::enums::*;
use aeri_core::error::SimError;
use aeri_core::events::SimEvent;
use aeri_core::state::TickSnapshot;

use crate::engine::SimulationEngine;
use crate::scenario::pacific_northwest;
use crate::scheduler::{self, RunSummary, TickObserver};

fn random_engine(seed: u64, flights: usize) -> SimulationEngine {
    SimulationEngine::with_random_traffic(SimConfig::with_seed(seed), &pacific_northwest(), flights)
        .unwrap()
}

fn run_ticks(engine: &mut SimulationEngine, ticks: u64) -> Vec<TickSnapshot> {
    (0..ticks).map(|_| engine.tick().unwrap()).collect()
}

/// Tick until `flight_id` reaches `phase`, returning the snapshot where it did.
fn tick_until(engine: &mut SimulationEngine, flight_id: &str, phase: FlightPhase) -> TickSnapshot {
    for _ in 0..1000 {
        let snap = engine.tick().unwrap();
        if snap.aircraft_by_id(flight_id).unwrap().phase == phase {
            return snap;
        }
    }
    panic!("{flight_id} never reached {phase}");
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = random_engine(12345, 30);
    let mut engine_b = random_engine(12345, 30);

    for _ in 0..400 {
        let json_a = serde_json::to_string(&engine_a.tick().unwrap()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick().unwrap()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = random_engine(111, 30);
    let mut engine_b = random_engine(222, 30);

    let mut diverged = false;
    for _ in 0..50 {
        let json_a = serde_json::to_string(&engine_a.tick().unwrap()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick().unwrap()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce different traffic");
}

// ---- Construction ----

#[test]
fn test_initial_state_on_ground() {
    let engine = random_engine(42, 30);
    let snap = engine.snapshot().unwrap();

    assert_eq!(snap.tick(), 0);
    assert_eq!(snap.aircraft.len(), 30);
    assert_eq!(snap.airports.len(), 10);
    for (i, aircraft) in snap.aircraft.iter().enumerate() {
        assert_eq!(aircraft.id, format!("FL{i:03}"));
        assert_eq!(aircraft.phase, FlightPhase::GroundTaxi);
        assert_eq!(aircraft.distance_traveled_nm, 0.0);
        assert_eq!(aircraft.altitude_ft, 0);
        assert!(aircraft.route_distance_nm > 0.0);
        let origin = snap.airport_by_code(&aircraft.origin).unwrap();
        assert_eq!((aircraft.lat, aircraft.lon), (origin.lat, origin.lon));
    }
    assert!(snap.airports.iter().all(|a| a.queue.is_empty()));
}

#[test]
fn test_airports_ordered_by_code() {
    let engine = random_engine(42, 0);
    let snap = engine.snapshot().unwrap();
    let codes: Vec<_> = snap.airports.iter().map(|a| a.code.clone()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[test]
fn test_duplicate_flight_rejected() {
    let flights = vec![
        FlightSpec::new("FL000", "KSEA", "KPDX", 0),
        FlightSpec::new("FL000", "KPDX", "KSEA", 1),
    ];
    let err = SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights)
        .err()
        .unwrap();
    assert_eq!(err, SimError::DuplicateFlight("FL000".into()));
}

#[test]
fn test_same_origin_and_destination_rejected() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KSEA", 0)];
    let err = SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights)
        .err()
        .unwrap();
    assert!(matches!(err, SimError::InvalidRoute { flight_id, .. } if flight_id == "FL000"));
}

#[test]
fn test_unknown_airport_rejected() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KLAX", 0)];
    let result = SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights);
    assert!(matches!(result, Err(SimError::InvalidRoute { .. })));
}

#[test]
fn test_invalid_tick_minutes_rejected() {
    let mut config = SimConfig::default();
    config.pacing.tick_minutes = 0.0;
    let result = SimulationEngine::new(config, &pacific_northwest(), &[]);
    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
}

#[test]
fn test_random_traffic_needs_two_airports() {
    let airports = vec![AirportSpec::new("KSEA", 47.4489, -122.3094)];
    let result = SimulationEngine::with_random_traffic(SimConfig::default(), &airports, 5);
    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
}

// ---- Flight progression ----

#[test]
fn test_distance_never_decreases() {
    let mut engine = random_engine(42, 30);
    let mut last: HashMap<String, f64> = HashMap::new();

    for snap in run_ticks(&mut engine, 300) {
        for aircraft in &snap.aircraft {
            let prev = last.insert(aircraft.id.clone(), aircraft.distance_traveled_nm);
            if let Some(prev) = prev {
                assert!(aircraft.distance_traveled_nm >= prev, "{} moved backwards", aircraft.id);
            }
        }
    }
}

#[test]
fn test_phases_follow_lifecycle_order() {
    let mut engine = random_engine(7, 30);
    for snap in run_ticks(&mut engine, 300) {
        for event in &snap.events {
            if let SimEvent::PhaseChanged { from, to, .. } = event {
                let from_idx = FlightPhase::ALL.iter().position(|p| p == from).unwrap();
                let to_idx = FlightPhase::ALL.iter().position(|p| p == to).unwrap();
                assert_eq!(to_idx, from_idx + 1, "{from} -> {to} skips the lifecycle");
            }
        }
    }
}

#[test]
fn test_all_flights_land() {
    let mut engine = random_engine(42, 30);
    let snaps = run_ticks(&mut engine, 600);
    let last = snaps.last().unwrap();

    assert_eq!(last.count_in_phase(FlightPhase::Landing), 30);
    let landed_events = snaps
        .iter()
        .flat_map(|s| &s.events)
        .filter(|e| matches!(e, SimEvent::Landed { .. }))
        .count();
    assert_eq!(landed_events, 30);
}

#[test]
fn test_landed_aircraft_is_inert() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KPDX", 0)];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();

    let landed = tick_until(&mut engine, "FL000", FlightPhase::Landing);
    let at_landing = landed.aircraft_by_id("FL000").unwrap().clone();
    assert!(at_landing.distance_traveled_nm >= at_landing.route_distance_nm);
    assert_eq!(at_landing.altitude_ft, 0);

    for snap in run_ticks(&mut engine, 20) {
        let aircraft = snap.aircraft_by_id("FL000").unwrap();
        assert_eq!(aircraft.phase, FlightPhase::Landing);
        assert_eq!(aircraft.distance_traveled_nm, at_landing.distance_traveled_nm);
        assert_eq!((aircraft.lat, aircraft.lon), (at_landing.lat, at_landing.lon));
        assert!(snap.events.is_empty());
    }
}

#[test]
fn test_first_ticks_of_single_flight() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KGEG", 0)];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();

    // Tick 0: joins the queue without moving.
    let snap = engine.tick().unwrap();
    let aircraft = snap.aircraft_by_id("FL000").unwrap();
    assert_eq!(aircraft.phase, FlightPhase::Queued);
    assert_eq!(aircraft.distance_traveled_nm, 0.0);
    assert_eq!(snap.airport_by_code("KSEA").unwrap().queue, vec!["FL000"]);

    // Tick 1: cleared, still no movement.
    let snap = engine.tick().unwrap();
    let aircraft = snap.aircraft_by_id("FL000").unwrap();
    assert_eq!(aircraft.phase, FlightPhase::Takeoff);
    assert_eq!(aircraft.distance_traveled_nm, 0.0);
    assert_eq!(aircraft.delay_ticks, 0);
    let ksea = snap.airport_by_code("KSEA").unwrap();
    assert!(ksea.queue.is_empty());
    assert_eq!(ksea.busy_until, 3);
    assert_eq!(ksea.utilization, 1);

    // Tick 2: 140 kt for one minute passes the 2 nm mark.
    let snap = engine.tick().unwrap();
    let aircraft = snap.aircraft_by_id("FL000").unwrap();
    assert!((aircraft.distance_traveled_nm - 140.0 / 60.0).abs() < 1e-9);
    assert_eq!(aircraft.phase, FlightPhase::InitialClimb);
    assert_eq!(aircraft.altitude_ft, 3000);
}

// ---- Runway arbitration ----

type QueueLog = Vec<(u64, String, String)>;

/// (tick, airport, flight) for every queue join and every clearance, in order.
fn collect_queue_events(snaps: &[TickSnapshot]) -> (QueueLog, QueueLog) {
    let mut joined = Vec::new();
    let mut cleared = Vec::new();
    for snap in snaps {
        for event in &snap.events {
            match event {
                SimEvent::QueueJoined { flight_id, airport } => {
                    joined.push((snap.tick(), airport.clone(), flight_id.clone()));
                }
                SimEvent::TakeoffCleared {
                    flight_id, airport, ..
                } => {
                    cleared.push((snap.tick(), airport.clone(), flight_id.clone()));
                }
                _ => {}
            }
        }
    }
    (joined, cleared)
}

#[test]
fn test_takeoffs_respect_spacing_buffer() {
    for spacing_buffer in [0, 2, 5] {
        let mut config = SimConfig::with_seed(9);
        config.controller.spacing_buffer = spacing_buffer;
        let mut engine =
            SimulationEngine::with_random_traffic(config, &pacific_northwest(), 40).unwrap();
        let snaps = run_ticks(&mut engine, 400);
        let (_, cleared) = collect_queue_events(&snaps);
        assert_eq!(cleared.len(), 40);

        let mut last_by_airport: HashMap<String, u64> = HashMap::new();
        for (tick, airport, _) in cleared {
            if let Some(prev) = last_by_airport.insert(airport.clone(), tick) {
                assert!(tick > prev, "two clearances at {airport} in tick {tick}");
                assert!(
                    tick - prev >= spacing_buffer,
                    "{airport} cleared at {prev} and {tick} with buffer {spacing_buffer}"
                );
            }
        }
    }
}

#[test]
fn test_clearance_order_is_fifo() {
    let mut engine = random_engine(3, 40);
    let snaps = run_ticks(&mut engine, 400);
    let (joined, cleared) = collect_queue_events(&snaps);

    for airport in pacific_northwest() {
        let joined_order: Vec<_> = joined
            .iter()
            .filter(|(_, a, _)| *a == airport.code)
            .map(|(_, _, id)| id.clone())
            .collect();
        let cleared_order: Vec<_> = cleared
            .iter()
            .filter(|(_, a, _)| *a == airport.code)
            .map(|(_, _, id)| id.clone())
            .collect();
        assert_eq!(joined_order, cleared_order, "FIFO broken at {}", airport.code);
    }
}

#[test]
fn test_queue_holds_only_queued_aircraft() {
    let mut engine = random_engine(42, 30);
    for snap in run_ticks(&mut engine, 200) {
        for airport in &snap.airports {
            for id in &airport.queue {
                let aircraft = snap.aircraft_by_id(id).unwrap();
                assert_eq!(aircraft.phase, FlightPhase::Queued);
                assert_eq!(aircraft.origin, airport.code);
            }
        }
    }
}

#[test]
fn test_shared_runway_delays_second_flight() {
    let flights = vec![
        FlightSpec::new("FL000", "KSEA", "KPDX", 0),
        FlightSpec::new("FL001", "KSEA", "KGEG", 1),
    ];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();
    let snaps = run_ticks(&mut engine, 5);

    // Both join at tick 0; FL000 is cleared at tick 1, FL001 waits for busy_until = 3.
    assert_eq!(
        snaps[0].airport_by_code("KSEA").unwrap().queue,
        vec!["FL000", "FL001"]
    );
    assert_eq!(snaps[1].aircraft_by_id("FL000").unwrap().phase, FlightPhase::Takeoff);
    assert_eq!(snaps[1].aircraft_by_id("FL001").unwrap().phase, FlightPhase::Queued);
    assert_eq!(snaps[2].aircraft_by_id("FL001").unwrap().phase, FlightPhase::Queued);
    assert_eq!(snaps[3].aircraft_by_id("FL001").unwrap().phase, FlightPhase::Takeoff);
    assert_eq!(snaps[3].aircraft_by_id("FL001").unwrap().delay_ticks, 2);
    assert_eq!(snaps[4].airport_by_code("KSEA").unwrap().utilization, 2);
}

// ---- Short routes ----

#[test]
fn test_short_route_lands_under_both_policies() {
    // KSEA -> KBFI is about 5 nm.
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KBFI", 0)];
    for policy in [ShortRoutePolicy::Literal, ShortRoutePolicy::Clamped] {
        let config = SimConfig {
            short_route: policy,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(config, &pacific_northwest(), &flights).unwrap();
        let snap = tick_until(&mut engine, "FL000", FlightPhase::Landing);
        let aircraft = snap.aircraft_by_id("FL000").unwrap();
        assert!(aircraft.distance_traveled_nm >= aircraft.route_distance_nm);
    }
}

#[test]
fn test_policies_agree_on_long_routes() {
    let run = |policy| {
        let config = SimConfig {
            seed: 5,
            short_route: policy,
            ..Default::default()
        };
        let flights = vec![FlightSpec::new("FL000", "KSEA", "KBOI", 0)];
        let mut engine = SimulationEngine::new(config, &pacific_northwest(), &flights).unwrap();
        run_ticks(&mut engine, 120)
    };
    assert_eq!(run(ShortRoutePolicy::Literal), run(ShortRoutePolicy::Clamped));
}

// ---- Abnormal injection ----

#[test]
fn test_emergency_descent_freezes_aircraft() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KGEG", 0)];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();
    tick_until(&mut engine, "FL000", FlightPhase::Cruise);

    engine.queue_command(SimCommand::InjectAbnormal {
        flight_id: "FL000".into(),
        event: AbnormalEvent::EmergencyDescent,
    });
    let snap = engine.tick().unwrap();
    let aircraft = snap.aircraft_by_id("FL000").unwrap().clone();
    assert_eq!(aircraft.phase, FlightPhase::EmergencyDescent);
    assert_eq!(aircraft.altitude_ft, 1000);
    assert!(snap.events.contains(&SimEvent::AbnormalInjected {
        flight_id: "FL000".into(),
        event: AbnormalEvent::EmergencyDescent,
        from: FlightPhase::Cruise,
    }));

    for snap in run_ticks(&mut engine, 50) {
        let later = snap.aircraft_by_id("FL000").unwrap();
        assert_eq!(later.phase, FlightPhase::EmergencyDescent);
        assert_eq!(later.distance_traveled_nm, aircraft.distance_traveled_nm);
    }
}

#[test]
fn test_go_around_only_from_approach() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KPDX", 0)];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();
    tick_until(&mut engine, "FL000", FlightPhase::Climb);

    engine.queue_command(SimCommand::InjectAbnormal {
        flight_id: "FL000".into(),
        event: AbnormalEvent::GoAround,
    });
    let snap = engine.tick().unwrap();
    assert_ne!(snap.aircraft_by_id("FL000").unwrap().phase, FlightPhase::GoAround);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::AbnormalInjected { .. })));

    tick_until(&mut engine, "FL000", FlightPhase::Approach);
    engine.queue_command(SimCommand::InjectAbnormal {
        flight_id: "FL000".into(),
        event: AbnormalEvent::GoAround,
    });
    let snap = engine.tick().unwrap();
    assert_eq!(snap.aircraft_by_id("FL000").unwrap().phase, FlightPhase::GoAround);
}

#[test]
fn test_injection_on_ground_or_unknown_flight_ignored() {
    let flights = vec![FlightSpec::new("FL000", "KSEA", "KPDX", 0)];
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &pacific_northwest(), &flights).unwrap();

    engine.queue_commands([
        SimCommand::InjectAbnormal {
            flight_id: "FL000".into(),
            event: AbnormalEvent::EmergencyDescent,
        },
        SimCommand::InjectAbnormal {
            flight_id: "NOPE".into(),
            event: AbnormalEvent::GoAround,
        },
    ]);
    let snap = engine.tick().unwrap();
    assert_eq!(snap.aircraft_by_id("FL000").unwrap().phase, FlightPhase::Queued);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::AbnormalInjected { .. })));
}

// ---- Scheduler ----

#[test]
fn test_scheduler_records_every_tick() {
    let mut engine = random_engine(42, 10);
    let mut recorded: Vec<TickSnapshot> = Vec::new();
    let summary = scheduler::run(&mut engine, 25, &mut recorded).unwrap();

    assert_eq!(recorded.len(), 25);
    for (i, snap) in recorded.iter().enumerate() {
        assert_eq!(snap.tick(), i as u64);
        assert!((snap.time.elapsed_minutes - (i + 1) as f64).abs() < 1e-9);
    }
    assert_eq!(summary.ticks, 25);
    assert_eq!(summary, RunSummary::from_snapshot(25, recorded.last().unwrap()));
    assert_eq!(engine.time().tick, 25);
}

#[test]
fn test_scheduler_zero_duration() {
    let mut engine = random_engine(42, 10);
    let mut recorded: Vec<TickSnapshot> = Vec::new();
    let summary = scheduler::run(&mut engine, 0, &mut recorded).unwrap();

    assert!(recorded.is_empty());
    assert_eq!(summary.ticks, 0);
    assert_eq!(summary.landed, 0);
    assert_eq!(summary.utilization.len(), 10);
}

#[derive(Default)]
struct Counter {
    ticks: u64,
    finished: bool,
}

impl TickObserver for Counter {
    type Error = SimError;

    fn on_tick(&mut self, _snapshot: &TickSnapshot) -> Result<(), SimError> {
        self.ticks += 1;
        Ok(())
    }

    fn on_finish(&mut self, _summary: &RunSummary) -> Result<(), SimError> {
        self.finished = true;
        Ok(())
    }
}

#[test]
fn test_observer_pair_sees_same_ticks() {
    let mut engine = random_engine(42, 10);
    let mut pair = (Counter::default(), Vec::<TickSnapshot>::new());
    scheduler::run(&mut engine, 12, &mut pair).unwrap();

    assert_eq!(pair.0.ticks, 12);
    assert!(pair.0.finished);
    assert_eq!(pair.1.len(), 12);
}

#[test]
fn test_summary_counts_utilization() {
    let mut engine = random_engine(42, 30);
    let summary = scheduler::run(&mut engine, 600, &mut Counter::default()).unwrap();

    assert_eq!(summary.landed, 30);
    assert_eq!(summary.airborne, 0);
    assert_eq!(summary.queued, 0);
    let takeoffs: u32 = summary.utilization.iter().map(|(_, n)| n).sum();
    assert_eq!(takeoffs, 30);
}

#[test]
fn test_disabled_observer_is_noop() {
    let mut engine = random_engine(42, 5);
    let mut observer: Option<Counter> = None;
    let summary = scheduler::run(&mut engine, 10, &mut observer).unwrap();
    assert_eq!(summary.ticks, 10);
    assert!(observer.is_none());
}

#[test]
fn test_huge_spacing_buffer_holds_runway() {
    let mut config = SimConfig::default();
    config.controller.spacing_buffer = u64::MAX;
    let flights = vec![
        FlightSpec::new("FL000", "KSEA", "KPDX", 0),
        FlightSpec::new("FL001", "KGEG", "KBOI", 1),
        FlightSpec::new("FL002", "KSEA", "KGEG", 2),
    ];
    let mut engine = SimulationEngine::new(config, &pacific_northwest(), &flights).unwrap();
    assert_eq!(engine.controller().spacing_buffer(), u64::MAX);

    let snap = run_ticks(&mut engine, 5).pop().unwrap();
    let ksea = engine.airport("KSEA").unwrap();
    assert_eq!(ksea.busy_until(), u64::MAX);
    assert_eq!(ksea.utilization(), 1);
    assert_eq!(ksea.head(), engine.flight_entity("FL002"));
    assert_eq!(snap.aircraft_by_id("FL000").unwrap().phase, FlightPhase::InitialClimb);
    assert_eq!(snap.aircraft_by_id("FL002").unwrap().phase, FlightPhase::Queued);
    assert_eq!(snap.aircraft_by_id("FL002").unwrap().delay_ticks, 4);
}

#[test]
fn test_roster_and_lookups_match_world() {
    use aeri_core::components::FlightPlan;

    let engine = random_engine(42, 8);
    assert_eq!(engine.roster().len(), 8);
    for (i, &entity) in engine.roster().iter().enumerate() {
        let id = format!("FL{i:03}");
        assert_eq!(engine.flight_entity(&id), Some(entity));
        let plan = engine.world().get::<&FlightPlan>(entity).unwrap();
        assert_eq!(plan.id, id);
        assert!(engine.airport(&plan.origin).is_some());
    }
    assert_eq!(engine.flight_entity("FL999"), None);
    assert!(engine.airport("KLAX").is_none());

    let codes: Vec<&str> = engine.airports().map(|a| a.code()).collect();
    assert_eq!(codes.len(), 10);
    assert!(codes.windows(2).all(|w| w[0] < w[1]));
}
