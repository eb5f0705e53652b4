//! Interceptor flight system — phase transitions, guidance
//! re-evaluation, movement integration, and fuel/time expiry for all
//! three guidance variants.

use glam::DVec3;
use hecs::World;

use brink_core::components::{Altitude, GuidanceState, Interceptor};
use brink_core::constants::*;
use brink_core::enums::InterceptorPhase;
use brink_core::events::SimEvent;
use brink_core::types::GeoPosition;
use brink_core::world::WorldState;

use crate::guidance;
use crate::systems::TargetSnapshot;

/// Advance all active interceptors by `dt_secs`.
pub fn run(
    world: &mut World,
    state: &WorldState,
    dt_secs: f64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    let targets = super::live_targets(world);

    for (_entity, (interceptor, guidance_state, geo, altitude)) in world.query_mut::<(
        &mut Interceptor,
        &mut GuidanceState,
        &mut GeoPosition,
        &mut Altitude,
    )>() {
        if interceptor.is_terminal() {
            continue;
        }

        let elapsed = current_tick.saturating_sub(interceptor.launch_tick) as f64 * dt_secs;
        if elapsed >= INTERCEPTOR_MAX_FLIGHT_SECS {
            expire(interceptor, events, current_tick);
            continue;
        }

        // Time-based forward transitions. Terminal and Coast are set by
        // the guidance/fuel logic and never reversed here.
        match interceptor.phase {
            InterceptorPhase::Boost if elapsed >= BOOST_DURATION_SECS => {
                set_phase(interceptor, InterceptorPhase::Pitch, current_tick);
            }
            InterceptorPhase::Pitch if elapsed >= BOOST_DURATION_SECS + PITCH_DURATION_SECS => {
                set_phase(interceptor, InterceptorPhase::Midcourse, current_tick);
            }
            _ => {}
        }

        let target = targets.get(&interceptor.target_missile);

        match guidance_state {
            GuidanceState::Kinematic {
                launch_geo,
                aim_geo,
                flight_duration_ms,
                progress,
                apex_height,
            } => update_kinematic(
                interceptor,
                launch_geo,
                aim_geo,
                *flight_duration_ms,
                progress,
                *apex_height,
                geo,
                altitude,
                dt_secs,
                current_tick,
                events,
            ),
            GuidanceState::Physics {
                position,
                velocity,
                heading,
            } => update_physics(
                interceptor,
                position,
                velocity,
                heading,
                geo,
                altitude,
                target,
                state,
                dt_secs,
                current_tick,
                events,
            ),
            GuidanceState::Guided {
                heading_deg,
                climb_deg,
                guided,
            } => update_guided(
                interceptor,
                heading_deg,
                climb_deg,
                guided,
                geo,
                altitude,
                target,
                state,
                dt_secs,
                current_tick,
                events,
            ),
        }

        if interceptor.is_terminal() {
            continue;
        }

        // Fuel burn and the coast clock. Flameout is one-way: fuel hits
        // zero, the phase becomes Coast, and it never leaves.
        if interceptor.phase == InterceptorPhase::Coast {
            let coasted =
                current_tick.saturating_sub(interceptor.phase_start_tick) as f64 * dt_secs;
            if coasted >= COAST_TIMEOUT_SECS {
                expire(interceptor, events, current_tick);
            }
        } else {
            interceptor.fuel_secs = (interceptor.fuel_secs - dt_secs).max(0.0);
            if interceptor.fuel_secs <= 0.0 {
                set_phase(interceptor, InterceptorPhase::Coast, current_tick);
                // A dead motor also means no seeker: the unguided
                // penalty and climb decay apply from here on.
                if let GuidanceState::Guided { guided, .. } = guidance_state {
                    *guided = false;
                }
            }
        }
    }
}

/// Progress-interpolated flight along a fixed arc toward the aim point
/// chosen at launch. Expires after overshooting the aim point.
#[allow(clippy::too_many_arguments)]
fn update_kinematic(
    interceptor: &mut Interceptor,
    launch_geo: &GeoPosition,
    aim_geo: &GeoPosition,
    flight_duration_ms: f64,
    progress: &mut f64,
    apex_height: f64,
    geo: &mut GeoPosition,
    altitude: &mut Altitude,
    dt_secs: f64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    *progress += dt_secs * 1000.0 / flight_duration_ms;
    *geo = brink_geo::interpolate(launch_geo, aim_geo, *progress);
    altitude.units = brink_geo::altitude(*progress, apex_height, 1.0);

    if interceptor.phase != InterceptorPhase::Coast {
        let remaining_secs = (1.0 - *progress).max(0.0) * flight_duration_ms / 1000.0;
        if remaining_secs < TERMINAL_TTI_SECS {
            set_phase(interceptor, InterceptorPhase::Terminal, current_tick);
        }
    }

    if *progress >= KINEMATIC_OVERSHOOT_PROGRESS {
        expire(interceptor, events, current_tick);
    }
}

/// Thrust + gravity integration on the Cartesian globe. Steering only
/// while radar coverage holds; flameout or target loss degrades to a
/// ballistic coast.
#[allow(clippy::too_many_arguments)]
fn update_physics(
    interceptor: &mut Interceptor,
    position: &mut DVec3,
    velocity: &mut DVec3,
    heading: &mut DVec3,
    geo: &mut GeoPosition,
    altitude: &mut Altitude,
    target: Option<&TargetSnapshot>,
    state: &WorldState,
    dt_secs: f64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    let up = position.try_normalize().unwrap_or(DVec3::Z);

    if interceptor.phase == InterceptorPhase::Boost {
        *heading = up;
    } else {
        match target {
            None => set_phase(interceptor, InterceptorPhase::Coast, current_tick),
            Some(snapshot) if interceptor.phase != InterceptorPhase::Coast => {
                let covered = guidance::radar_coverage_active(
                    state,
                    &interceptor.tracking_radars,
                    interceptor.owner_id,
                    &snapshot.geo,
                );
                if covered {
                    let speed = velocity.length().max(1.0);
                    if let Some(predicted) =
                        guidance::predict_intercept(geo, altitude.units, speed, &snapshot.missile)
                    {
                        let aim = brink_geo::geo_to_cartesian(
                            &predicted.geo,
                            predicted.altitude,
                            GLOBE_RADIUS,
                        );
                        *heading = guidance::rotate_toward(
                            *heading,
                            aim - *position,
                            PHYSICS_TURN_RATE_RAD * dt_secs,
                        );
                        if predicted.time_secs < TERMINAL_TTI_SECS
                            && matches!(
                                interceptor.phase,
                                InterceptorPhase::Pitch | InterceptorPhase::Midcourse
                            )
                        {
                            set_phase(interceptor, InterceptorPhase::Terminal, current_tick);
                        }
                    }
                }
                // No coverage: hold heading, keep burning.
            }
            Some(_) => {}
        }
    }

    let thrusting = interceptor.phase != InterceptorPhase::Coast && interceptor.fuel_secs > 0.0;
    let mut accel = -up * PHYSICS_GRAVITY;
    if thrusting {
        accel += *heading * PHYSICS_THRUST_ACCEL;
    }
    *velocity += accel * dt_secs;
    let speed = velocity.length();
    if speed > PHYSICS_MAX_SPEED {
        *velocity *= PHYSICS_MAX_SPEED / speed;
    }
    *position += *velocity * dt_secs;

    let (new_geo, new_alt) = brink_geo::cartesian_to_geo(*position, GLOBE_RADIUS);
    *geo = new_geo;
    altitude.units = new_alt;

    if new_alt <= 0.0 {
        if interceptor.phase == InterceptorPhase::Boost {
            // Still on the rail: clamp to the surface.
            *position = position.try_normalize().unwrap_or(DVec3::Z) * GLOBE_RADIUS;
            altitude.units = 0.0;
        } else {
            crash(interceptor, events, current_tick);
        }
    }
}

/// Proportional navigation: turn and pitch toward the re-predicted
/// intercept point while radar coverage holds; otherwise hold heading
/// and bleed the nose down.
#[allow(clippy::too_many_arguments)]
fn update_guided(
    interceptor: &mut Interceptor,
    heading_deg: &mut f64,
    climb_deg: &mut f64,
    guided: &mut bool,
    geo: &mut GeoPosition,
    altitude: &mut Altitude,
    target: Option<&TargetSnapshot>,
    state: &WorldState,
    dt_secs: f64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    let in_boost = interceptor.phase == InterceptorPhase::Boost;

    match target {
        None => {
            *guided = false;
            set_phase(interceptor, InterceptorPhase::Coast, current_tick);
        }
        Some(snapshot) => {
            let covered = guidance::radar_coverage_active(
                state,
                &interceptor.tracking_radars,
                interceptor.owner_id,
                &snapshot.geo,
            );
            if covered && interceptor.phase != InterceptorPhase::Coast {
                match guidance::predict_intercept(
                    geo,
                    altitude.units,
                    INTERCEPTOR_SPEED,
                    &snapshot.missile,
                ) {
                    Some(predicted) => {
                        *guided = true;
                        if !in_boost {
                            let desired_bearing = brink_geo::bearing(geo, &predicted.geo);
                            *heading_deg = guidance::turn_toward(
                                *heading_deg,
                                desired_bearing,
                                MAX_TURN_RATE_DEG * dt_secs,
                            );

                            let ground =
                                brink_geo::distance(geo, &predicted.geo) * UNITS_PER_RADIAN;
                            let desired_climb = (predicted.altitude - altitude.units)
                                .atan2(ground.max(0.1))
                                .to_degrees()
                                .clamp(-MAX_CLIMB_CMD_DEG, MAX_CLIMB_CMD_DEG);
                            *climb_deg = guidance::approach(
                                *climb_deg,
                                desired_climb,
                                MAX_PITCH_RATE_DEG * dt_secs,
                            );
                        }
                        if predicted.time_secs < TERMINAL_TTI_SECS
                            && matches!(
                                interceptor.phase,
                                InterceptorPhase::Pitch | InterceptorPhase::Midcourse
                            )
                        {
                            set_phase(interceptor, InterceptorPhase::Terminal, current_tick);
                        }
                    }
                    // Can't catch it: fly out ballistically on the last
                    // known heading.
                    None => *guided = false,
                }
            } else if interceptor.phase != InterceptorPhase::Coast {
                *guided = false;
            }
        }
    }

    if !*guided && !in_boost {
        *climb_deg = (*climb_deg - UNGUIDED_PITCH_RATE_DEG * dt_secs).max(MIN_CLIMB_DEG);
    }

    let effective_climb = if in_boost { BOOST_CLIMB_DEG } else { *climb_deg };
    let climb_rad = effective_climb.to_radians();
    let step_rad = INTERCEPTOR_SPEED * climb_rad.cos() * dt_secs / UNITS_PER_RADIAN;
    *geo = brink_geo::destination(geo, *heading_deg, step_rad);
    altitude.units += INTERCEPTOR_SPEED * climb_rad.sin() * dt_secs;

    if altitude.units <= 0.0 {
        if in_boost {
            altitude.units = 0.0;
        } else {
            crash(interceptor, events, current_tick);
        }
    }
}

fn set_phase(interceptor: &mut Interceptor, phase: InterceptorPhase, current_tick: u64) {
    if interceptor.phase != phase {
        interceptor.phase = phase;
        interceptor.phase_start_tick = current_tick;
    }
}

fn expire(interceptor: &mut Interceptor, events: &mut Vec<SimEvent>, current_tick: u64) {
    interceptor.status = brink_core::enums::InterceptorStatus::Expired;
    interceptor.resolved_tick = Some(current_tick);
    events.push(SimEvent::InterceptorExpired {
        interceptor_id: interceptor.interceptor_id,
    });
}

fn crash(interceptor: &mut Interceptor, events: &mut Vec<SimEvent>, current_tick: u64) {
    interceptor.status = brink_core::enums::InterceptorStatus::Crashed;
    interceptor.resolved_tick = Some(current_tick);
    events.push(SimEvent::InterceptorCrashed {
        interceptor_id: interceptor.interceptor_id,
    });
}
