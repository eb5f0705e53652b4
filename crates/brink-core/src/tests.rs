//! Tests for core types, components, and event serialization.

use crate::components::{BallisticMissile, Interceptor};
use crate::constants::*;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GeoPosition, SimTime};
use crate::world::{Silo, WorldState};

fn sample_missile() -> BallisticMissile {
    BallisticMissile {
        missile_id: 1,
        owner_id: 7,
        source_silo: 3,
        launch_geo: GeoPosition::new(0.0, -40.0),
        target_geo: GeoPosition::new(0.0, 40.0),
        flight_duration_ms: 46_000.0,
        progress: 0.5,
        apex_height: 14.0,
        intercepted: false,
        detonated: false,
        resolved_tick: None,
    }
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance(DT);
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!(
        (time.elapsed_secs - 1.0).abs() < 1e-10,
        "one second of ticks should elapse 1.0s, got {}",
        time.elapsed_secs
    );
}

#[test]
fn test_missile_terminal_flags() {
    let mut missile = sample_missile();
    assert!(!missile.is_terminal());

    missile.intercepted = true;
    assert!(missile.is_terminal());

    missile.intercepted = false;
    missile.detonated = true;
    assert!(missile.is_terminal());
}

#[test]
fn test_interceptor_fuel_fraction() {
    let interceptor = Interceptor {
        interceptor_id: 1,
        owner_id: 1,
        source_silo: 1,
        target_missile: 1,
        status: InterceptorStatus::Active,
        phase: InterceptorPhase::Boost,
        launch_tick: 0,
        phase_start_tick: 0,
        fuel_secs: INTERCEPTOR_MAX_FUEL_SECS / 4.0,
        max_fuel_secs: INTERCEPTOR_MAX_FUEL_SECS,
        tracking_radars: vec![],
        resolved_tick: None,
    };
    assert!((interceptor.fuel_fraction() - 0.25).abs() < 1e-10);
    assert!(!interceptor.is_terminal());
}

#[test]
fn test_event_serde_roundtrip() {
    let events = vec![
        SimEvent::Launch {
            missile_id: 5,
            owner_id: 2,
            source: GeoPosition::new(10.0, 20.0),
            target: GeoPosition::new(-5.0, 120.0),
        },
        SimEvent::Interception {
            missile_id: 5,
            interceptor_id: 9,
            position: GeoPosition::new(2.0, 70.0),
        },
        SimEvent::InterceptorExpired { interceptor_id: 9 },
    ];

    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<SimEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(events, back, "event stream should roundtrip through JSON");
}

#[test]
fn test_silo_defaults() {
    let silo = Silo::new(1, 4, GeoPosition::new(50.0, 30.0), SiloMode::Defense);
    assert_eq!(silo.ammo, SILO_MAX_AMMO);
    assert_eq!(silo.cooldown_until_tick, 0);
    assert!(!silo.destroyed);
    assert_eq!(silo.mode, SiloMode::Defense);
}

#[test]
fn test_world_state_defaults_peacetime() {
    let state = WorldState::new();
    assert!(
        state.defcon > STRATEGIC_LAUNCH_DEFCON,
        "fresh world should start above the strategic launch gate"
    );
    assert!(state.silos.is_empty());
    assert!(state.players.is_empty());
}
