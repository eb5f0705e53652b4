//! Simulation engine: owns the ECS world, the mutable world state, the
//! clock, and the seeded RNG. Exposes the launch operations and the
//! fixed-order tick.

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use brink_core::components::{Altitude, BallisticMissile, GuidanceState, Interceptor};
use brink_core::constants::*;
use brink_core::enums::{GuidanceMode, InterceptorPhase, InterceptorStatus, SiloMode};
use brink_core::events::SimEvent;
use brink_core::types::{GeoPosition, SimTime};
use brink_core::world::WorldState;

use crate::systems;

/// Engine construction parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for the hit-roll RNG. Same seed and same operation sequence
    /// replay an identical simulation.
    pub seed: u64,
}

/// The running simulation. All mutation goes through the launch
/// operations and `tick`.
pub struct SimulationEngine {
    world: World,
    state: WorldState,
    time: SimTime,
    rng: ChaCha8Rng,
    next_missile_id: u32,
    next_interceptor_id: u32,
    despawn_buffer: Vec<Entity>,
    /// Launch events buffered between ticks, drained into the next
    /// tick's batch.
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            state: WorldState::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_missile_id: 1,
            next_interceptor_id: 1,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Scenario setup and external signals (DEFCON) go through here.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Launch a ballistic missile from `silo_id` at `target_geo`.
    ///
    /// Soft-fails with `None` when any precondition is unmet: DEFCON
    /// gate closed, unknown/destroyed/foreign silo, silo not in attack
    /// mode, empty, or still cooling down. Invalid orders are routine
    /// in a live session and are not errors.
    pub fn launch_ballistic_missile(
        &mut self,
        silo_id: u32,
        owner_id: u32,
        target_geo: GeoPosition,
    ) -> Option<u32> {
        if self.state.defcon > STRATEGIC_LAUNCH_DEFCON {
            return None;
        }
        let current_tick = self.time.tick;
        let silo = self.ready_silo(silo_id, owner_id, SiloMode::Attack)?;
        let launch_geo = silo.geo;

        silo.ammo -= 1;
        silo.cooldown_until_tick = current_tick + secs_to_ticks(ICBM_COOLDOWN_SECS);

        let distance_units = brink_geo::distance(&launch_geo, &target_geo) * UNITS_PER_RADIAN;
        let flight_duration_ms =
            (distance_units / ICBM_SPEED * 1000.0).max(MIN_FLIGHT_DURATION_MS);

        let missile_id = self.next_missile_id;
        self.next_missile_id += 1;

        self.world.spawn((
            BallisticMissile {
                missile_id,
                owner_id,
                source_silo: silo_id,
                launch_geo,
                target_geo,
                flight_duration_ms,
                progress: 0.0,
                apex_height: brink_geo::apex_height(distance_units),
                intercepted: false,
                detonated: false,
                resolved_tick: None,
            },
            launch_geo,
            Altitude::default(),
        ));

        self.events.push(SimEvent::Launch {
            missile_id,
            owner_id,
            source: launch_geo,
            target: target_geo,
        });
        Some(missile_id)
    }

    /// Launch an interceptor from a defense silo at a live missile.
    ///
    /// Same soft-fail contract as the strategic launch, minus the
    /// DEFCON gate: defensive fire is always permitted. Also fails when
    /// the target id does not resolve to a live missile.
    pub fn launch_interceptor(
        &mut self,
        silo_id: u32,
        owner_id: u32,
        target_missile: u32,
        mode: GuidanceMode,
        tracking_radars: Vec<u32>,
    ) -> Option<u32> {
        let target = *systems::live_targets(&self.world).get(&target_missile)?;
        let current_tick = self.time.tick;
        let silo = self.ready_silo(silo_id, owner_id, SiloMode::Defense)?;
        let launch_geo = silo.geo;

        silo.ammo -= 1;
        silo.cooldown_until_tick = current_tick + secs_to_ticks(INTERCEPTOR_COOLDOWN_SECS);

        let guidance_state = match mode {
            GuidanceMode::Kinematic => {
                // Aim point fixed at launch. An uncatchable target still
                // gets a launch aimed at its current position; the arc
                // just will not connect.
                let (aim_geo, _) = crate::guidance::predict_intercept(
                    &launch_geo,
                    0.0,
                    INTERCEPTOR_SPEED,
                    &target.missile,
                )
                .map(|p| (p.geo, p.altitude))
                .unwrap_or((target.geo, target.altitude));

                let distance_units =
                    brink_geo::distance(&launch_geo, &aim_geo) * UNITS_PER_RADIAN;
                GuidanceState::Kinematic {
                    launch_geo,
                    aim_geo,
                    flight_duration_ms: (distance_units / INTERCEPTOR_SPEED * 1000.0)
                        .max(KINEMATIC_MIN_FLIGHT_MS),
                    progress: 0.0,
                    apex_height: (distance_units * KINEMATIC_APEX_FACTOR)
                        .clamp(KINEMATIC_APEX_MIN, APEX_MAX),
                }
            }
            GuidanceMode::Physics => {
                let position = brink_geo::geo_to_cartesian(&launch_geo, 0.0, GLOBE_RADIUS);
                let up = position.try_normalize().unwrap_or(DVec3::Z);
                GuidanceState::Physics {
                    position,
                    velocity: DVec3::ZERO,
                    heading: up,
                }
            }
            GuidanceMode::Guided => GuidanceState::Guided {
                heading_deg: brink_geo::bearing(&launch_geo, &target.geo),
                climb_deg: BOOST_CLIMB_DEG,
                guided: false,
            },
        };

        let interceptor_id = self.next_interceptor_id;
        self.next_interceptor_id += 1;

        self.world.spawn((
            Interceptor {
                interceptor_id,
                owner_id,
                source_silo: silo_id,
                target_missile,
                status: InterceptorStatus::Active,
                phase: InterceptorPhase::Boost,
                launch_tick: current_tick,
                phase_start_tick: current_tick,
                fuel_secs: INTERCEPTOR_MAX_FUEL_SECS,
                max_fuel_secs: INTERCEPTOR_MAX_FUEL_SECS,
                tracking_radars,
                resolved_tick: None,
            },
            guidance_state,
            launch_geo,
            Altitude::default(),
        ));

        self.events.push(SimEvent::InterceptorLaunch {
            interceptor_id,
            owner_id,
            target_missile,
            mode,
        });
        Some(interceptor_id)
    }

    /// Advance the simulation one step and return everything that
    /// happened, including launches accepted since the previous tick.
    ///
    /// Systems run in a fixed order: ballistic advance, impact
    /// resolution, interceptor advance, intercept resolution, cleanup.
    pub fn tick(&mut self, dt_secs: f64) -> Vec<SimEvent> {
        self.time.advance(dt_secs);
        let current_tick = self.time.tick;

        let mut events = std::mem::take(&mut self.events);

        systems::ballistic::run(&mut self.world, dt_secs);
        systems::impact::run(&mut self.world, &mut self.state, &mut events, current_tick);
        systems::interceptor::run(
            &mut self.world,
            &self.state,
            dt_secs,
            current_tick,
            &mut events,
        );
        systems::intercept::run(
            &mut self.world,
            &self.state,
            &mut self.rng,
            &mut events,
            current_tick,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, current_tick);

        events
    }

    /// Common launch validation: the silo must exist, belong to the
    /// caller, be intact, be in the right mode, have ammo, and be off
    /// cooldown.
    fn ready_silo(
        &mut self,
        silo_id: u32,
        owner_id: u32,
        mode: SiloMode,
    ) -> Option<&mut brink_core::world::Silo> {
        let current_tick = self.time.tick;
        let silo = self.state.silos.get_mut(&silo_id)?;
        if silo.destroyed
            || silo.owner_id != owner_id
            || silo.mode != mode
            || silo.ammo == 0
            || current_tick < silo.cooldown_until_tick
        {
            return None;
        }
        Some(silo)
    }
}

fn secs_to_ticks(secs: f64) -> u64 {
    (secs / DT).round() as u64
}
