//! Impact resolution system — detonates missiles that completed their
//! arc, applies distance-attenuated damage, and credits score.

use hecs::World;

use brink_core::components::{Altitude, BallisticMissile};
use brink_core::constants::*;
use brink_core::events::SimEvent;
use brink_core::types::GeoPosition;
use brink_core::world::WorldState;

/// Resolve impacts for missiles that just reached the end of their arc.
/// Fires exactly once per missile: the detonated flag is set before any
/// damage is applied, and terminal missiles are skipped up front.
pub fn run(world: &mut World, state: &mut WorldState, events: &mut Vec<SimEvent>, current_tick: u64) {
    let mut impacts: Vec<(u32, u32, GeoPosition)> = Vec::new();

    for (_entity, (missile, geo, altitude)) in
        world.query_mut::<(&mut BallisticMissile, &GeoPosition, &mut Altitude)>()
    {
        if missile.progress < 1.0 || missile.is_terminal() {
            continue;
        }
        missile.detonated = true;
        missile.resolved_tick = Some(current_tick);
        altitude.units = 0.0;
        impacts.push((missile.missile_id, missile.owner_id, *geo));
    }

    for (missile_id, owner_id, position) in impacts {
        let casualties = apply_blast(state, &position, events);

        if let Some(player) = state.players.get_mut(&owner_id) {
            player.score += casualties;
        }

        events.push(SimEvent::Impact {
            missile_id,
            owner_id,
            position,
            casualties,
        });
    }
}

/// Apply one detonation: casualties to cities inside the blast radius
/// (linear falloff from ground zero), destruction of buildings inside
/// the smaller destruction radius. Returns total casualties.
fn apply_blast(state: &mut WorldState, position: &GeoPosition, events: &mut Vec<SimEvent>) -> u64 {
    let mut casualties: u64 = 0;

    for city in state.cities.values_mut() {
        let range = brink_geo::distance(&city.geo, position) * UNITS_PER_RADIAN;
        if range >= BLAST_RADIUS {
            continue;
        }
        let attenuation = 1.0 - range / BLAST_RADIUS;
        let loss =
            ((city.population as f64 * CASUALTY_FACTOR * attenuation) as u64).min(city.population);
        city.population -= loss;
        casualties += loss;
    }

    for silo in state.silos.values_mut() {
        if silo.destroyed {
            continue;
        }
        let range = brink_geo::distance(&silo.geo, position) * UNITS_PER_RADIAN;
        if range < BUILDING_DESTRUCTION_RADIUS {
            silo.destroyed = true;
            events.push(SimEvent::BuildingDestroyed {
                building_id: silo.id,
                position: silo.geo,
            });
        }
    }

    for radar in state.radars.values_mut() {
        if radar.destroyed {
            continue;
        }
        let range = brink_geo::distance(&radar.geo, position) * UNITS_PER_RADIAN;
        if range < BUILDING_DESTRUCTION_RADIUS {
            radar.destroyed = true;
            events.push(SimEvent::BuildingDestroyed {
                building_id: radar.id,
                position: radar.geo,
            });
        }
    }

    casualties
}
