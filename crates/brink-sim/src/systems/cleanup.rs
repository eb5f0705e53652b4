//! Cleanup system — despawns resolved missiles and interceptors once
//! their linger window has elapsed.

use hecs::{Entity, World};

use brink_core::components::{BallisticMissile, Interceptor};
use brink_core::constants::{DT, LINGER_SECS};

/// Purge entities whose resolution is older than the linger window.
/// Resolved entities stay visible (frozen) until then so observers can
/// render the terminal state.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, current_tick: u64) {
    despawn_buffer.clear();
    let linger_ticks = (LINGER_SECS / DT).round() as u64;

    for (entity, missile) in world.query_mut::<&BallisticMissile>() {
        if let Some(resolved) = missile.resolved_tick {
            if current_tick.saturating_sub(resolved) > linger_ticks {
                despawn_buffer.push(entity);
            }
        }
    }
    for (entity, interceptor) in world.query_mut::<&Interceptor>() {
        if let Some(resolved) = interceptor.resolved_tick {
            if current_tick.saturating_sub(resolved) > linger_ticks {
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
