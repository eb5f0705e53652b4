//! Per-tick simulation systems, run in a fixed five-pass order by the
//! engine: ballistic advance → impact → interceptor advance →
//! intercept resolution → cleanup.

pub mod ballistic;
pub mod cleanup;
pub mod impact;
pub mod intercept;
pub mod interceptor;

use std::collections::HashMap;

use hecs::{Entity, World};

use brink_core::components::{Altitude, BallisticMissile};
use brink_core::types::GeoPosition;

/// Point-in-time copy of a live ballistic target, keyed by missile id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TargetSnapshot {
    pub entity: Entity,
    pub missile: BallisticMissile,
    pub geo: GeoPosition,
    pub altitude: f64,
}

/// Snapshot every non-terminal ballistic missile. Interceptor systems
/// resolve their target ids against this map instead of holding entity
/// references across ticks.
pub(crate) fn live_targets(world: &World) -> HashMap<u32, TargetSnapshot> {
    let mut targets = HashMap::new();
    let mut query = world.query::<(&BallisticMissile, &GeoPosition, &Altitude)>();
    for (entity, (missile, geo, altitude)) in query.iter() {
        if missile.is_terminal() {
            continue;
        }
        targets.insert(
            missile.missile_id,
            TargetSnapshot {
                entity,
                missile: *missile,
                geo: *geo,
                altitude: altitude.units,
            },
        );
    }
    targets
}
