//! Intercept resolution system — proximity checks and the single
//! probabilistic hit roll per interceptor.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use brink_core::components::{Altitude, BallisticMissile, GuidanceState, Interceptor};
use brink_core::constants::*;
use brink_core::enums::InterceptorStatus;
use brink_core::events::SimEvent;
use brink_core::types::GeoPosition;
use brink_core::world::WorldState;

use crate::guidance;

struct Attempt {
    interceptor_entity: Entity,
    interceptor_id: u32,
    missile_entity: Entity,
    missile_id: u32,
    position: GeoPosition,
    probability: f64,
}

/// Resolve every interceptor that closed to within the intercept radius
/// this tick. Each interceptor rolls at most once in its lifetime: a
/// miss marks it Missed, which is terminal, so it never rolls again.
pub fn run(
    world: &mut World,
    state: &WorldState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
    current_tick: u64,
) {
    let targets = super::live_targets(world);

    let mut attempts: Vec<Attempt> = Vec::new();
    {
        let mut query = world.query::<(&Interceptor, &GuidanceState, &GeoPosition, &Altitude)>();
        for (entity, (interceptor, guidance_state, geo, altitude)) in query.iter() {
            if interceptor.is_terminal() {
                continue;
            }
            let Some(snapshot) = targets.get(&interceptor.target_missile) else {
                continue;
            };

            let (in_range, guided) = match guidance_state {
                // The arc-following variant flies at its own profile
                // altitude, so proximity is ground range only, and only
                // after the opening leg of its arc.
                GuidanceState::Kinematic { progress, .. } => {
                    let ground = brink_geo::distance(geo, &snapshot.geo) * UNITS_PER_RADIAN;
                    let in_range =
                        ground < INTERCEPT_RADIUS && *progress > KINEMATIC_MIN_PROGRESS;
                    let guided = guidance::radar_coverage_active(
                        state,
                        &interceptor.tracking_radars,
                        interceptor.owner_id,
                        &snapshot.geo,
                    );
                    (in_range, guided)
                }
                GuidanceState::Physics { .. } => {
                    let slant = brink_geo::slant_range_units(
                        geo,
                        altitude.units,
                        &snapshot.geo,
                        snapshot.altitude,
                    );
                    let guided = guidance::radar_coverage_active(
                        state,
                        &interceptor.tracking_radars,
                        interceptor.owner_id,
                        &snapshot.geo,
                    );
                    (slant < INTERCEPT_RADIUS, guided)
                }
                GuidanceState::Guided { guided, .. } => {
                    let slant = brink_geo::slant_range_units(
                        geo,
                        altitude.units,
                        &snapshot.geo,
                        snapshot.altitude,
                    );
                    (slant < INTERCEPT_RADIUS, *guided)
                }
            };
            if !in_range {
                continue;
            }

            let radars = guidance::tracking_radar_count(
                state,
                &interceptor.tracking_radars,
                interceptor.owner_id,
                &snapshot.geo,
            );
            let probability = guidance::hit_probability(
                snapshot.missile.progress,
                guided,
                radars,
                interceptor.fuel_fraction(),
            );

            attempts.push(Attempt {
                interceptor_entity: entity,
                interceptor_id: interceptor.interceptor_id,
                missile_entity: snapshot.entity,
                missile_id: snapshot.missile.missile_id,
                position: snapshot.geo,
                probability,
            });
        }
    }

    for attempt in attempts {
        // An earlier attempt this tick may already have claimed the
        // target; a downed missile absorbs no further rolls.
        let missile_live = world
            .get::<&BallisticMissile>(attempt.missile_entity)
            .map(|missile| !missile.is_terminal())
            .unwrap_or(false);
        if !missile_live {
            continue;
        }

        if rng.gen_bool(attempt.probability) {
            if let Ok(mut missile) = world.get::<&mut BallisticMissile>(attempt.missile_entity) {
                missile.intercepted = true;
                missile.resolved_tick = Some(current_tick);
            }
            if let Ok(mut interceptor) =
                world.get::<&mut Interceptor>(attempt.interceptor_entity)
            {
                interceptor.status = InterceptorStatus::Hit;
                interceptor.resolved_tick = Some(current_tick);
            }
            events.push(SimEvent::Interception {
                missile_id: attempt.missile_id,
                interceptor_id: attempt.interceptor_id,
                position: attempt.position,
            });
        } else {
            if let Ok(mut interceptor) =
                world.get::<&mut Interceptor>(attempt.interceptor_entity)
            {
                interceptor.status = InterceptorStatus::Missed;
                interceptor.resolved_tick = Some(current_tick);
            }
            events.push(SimEvent::InterceptorMissed {
                interceptor_id: attempt.interceptor_id,
                missile_id: attempt.missile_id,
            });
        }
    }
}
