//! Ballistic flight system — advances every non-terminal ICBM along its
//! geodesic with the altitude profile overlay.

use hecs::World;

use brink_core::components::{Altitude, BallisticMissile};
use brink_core::constants::REENTRY_SHARPNESS;
use brink_core::types::GeoPosition;

/// Advance all live ballistic missiles by `dt_secs`.
/// Intercepted or detonated missiles are frozen and never touched.
pub fn run(world: &mut World, dt_secs: f64) {
    for (_entity, (missile, geo, altitude)) in
        world.query_mut::<(&mut BallisticMissile, &mut GeoPosition, &mut Altitude)>()
    {
        if missile.is_terminal() {
            continue;
        }

        missile.progress =
            (missile.progress + dt_secs * 1000.0 / missile.flight_duration_ms).min(1.0);
        *geo = brink_geo::interpolate(&missile.launch_geo, &missile.target_geo, missile.progress);
        altitude.units =
            brink_geo::altitude(missile.progress, missile.apex_height, REENTRY_SHARPNESS);
    }
}
