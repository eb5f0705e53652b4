//! Guidance math shared by the interceptor variants.
//!
//! Provides the iterative rendezvous predictor, the phase/fuel/radar
//! hit-probability model, radar coverage checks, and steering helpers
//! (capped angle approach in degrees, capped vector rotation for the
//! physics variant).

use glam::DVec3;

use brink_core::components::BallisticMissile;
use brink_core::constants::*;
use brink_core::enums::FlightPhase;
use brink_core::types::GeoPosition;
use brink_core::world::WorldState;

/// A predicted rendezvous between an interceptor and its moving target.
#[derive(Debug, Clone, Copy)]
pub struct PredictedIntercept {
    pub geo: GeoPosition,
    pub altitude: f64,
    /// Estimated seconds until rendezvous.
    pub time_secs: f64,
}

/// Project where the target will be `lead_secs` from now.
///
/// Returns `None` once the projected progress passes the catchability
/// limit — the target lands before anything flying at interceptor
/// speeds could reach it.
pub fn target_position_at(target: &BallisticMissile, lead_secs: f64) -> Option<(GeoPosition, f64)> {
    let projected = target.progress + lead_secs * 1000.0 / target.flight_duration_ms;
    if projected > PREDICTOR_MAX_PROGRESS {
        return None;
    }
    let geo = brink_geo::interpolate(&target.launch_geo, &target.target_geo, projected);
    let alt = brink_geo::altitude(projected, target.apex_height, REENTRY_SHARPNESS);
    Some((geo, alt))
}

/// Iterative fixed-point rendezvous prediction.
///
/// Starts from the straight-line time to the target's current position
/// and refines it by re-measuring the distance to where the target will
/// be at the current estimate. Converges (or stops) after a fixed
/// iteration budget.
pub fn predict_intercept(
    from: &GeoPosition,
    from_altitude: f64,
    speed: f64,
    target: &BallisticMissile,
) -> Option<PredictedIntercept> {
    if speed <= 0.0 || target.flight_duration_ms <= 0.0 {
        return None;
    }

    let (current_geo, current_alt) = target_position_at(target, 0.0)?;
    let mut time_secs = brink_geo::slant_range_units(from, from_altitude, &current_geo, current_alt) / speed;

    let mut geo = current_geo;
    let mut alt = current_alt;
    for _ in 0..PREDICTOR_ITERATIONS {
        let (next_geo, next_alt) = target_position_at(target, time_secs)?;
        geo = next_geo;
        alt = next_alt;
        time_secs = brink_geo::slant_range_units(from, from_altitude, &geo, alt) / speed;
    }

    Some(PredictedIntercept {
        geo,
        altitude: alt,
        time_secs,
    })
}

/// Whether any of the listed radars still covers the target.
pub fn radar_coverage_active(
    state: &WorldState,
    radar_ids: &[u32],
    owner_id: u32,
    target_geo: &GeoPosition,
) -> bool {
    tracking_radar_count(state, radar_ids, owner_id, target_geo) > 0
}

/// Count the listed radars that are alive, owned by the interceptor's
/// owner, and whose coverage circle contains the target.
pub fn tracking_radar_count(
    state: &WorldState,
    radar_ids: &[u32],
    owner_id: u32,
    target_geo: &GeoPosition,
) -> usize {
    radar_ids
        .iter()
        .filter_map(|id| state.radars.get(id))
        .filter(|radar| {
            !radar.destroyed
                && radar.owner_id == owner_id
                && brink_geo::distance(&radar.geo, target_geo) * UNITS_PER_RADIAN
                    <= radar.range_units
        })
        .count()
}

/// Assemble the hit probability for one proximity-triggered attempt.
///
/// Additive terms in order: base by target flight phase, tracking radar
/// bonus (guided only), unguided penalty, low-fuel penalty. The result
/// is clamped to the model's floor and ceiling.
pub fn hit_probability(
    target_progress: f64,
    guided: bool,
    tracking_radars: usize,
    fuel_fraction: f64,
) -> f64 {
    let mut p = match brink_geo::flight_phase(target_progress) {
        FlightPhase::Boost => HIT_PROB_BOOST,
        FlightPhase::Midcourse => HIT_PROB_MIDCOURSE,
        FlightPhase::Reentry => HIT_PROB_REENTRY,
    };

    if guided {
        let extra = tracking_radars.saturating_sub(1) as f64;
        p += (extra * RADAR_TRACK_BONUS).min(RADAR_TRACK_BONUS_CAP);
    } else {
        p -= UNGUIDED_PENALTY;
    }

    if fuel_fraction < LOW_FUEL_FRACTION {
        p -= LOW_FUEL_PENALTY;
    }

    p.clamp(HIT_PROB_MIN, HIT_PROB_MAX)
}

/// Move an angle toward a target by at most `max_step` degrees.
/// Non-circular: used for climb angles.
pub fn approach(current: f64, desired: f64, max_step: f64) -> f64 {
    let delta = desired - current;
    current + delta.clamp(-max_step, max_step)
}

/// Turn a heading (degrees) toward a desired heading along the shorter
/// arc, by at most `max_step` degrees.
pub fn turn_toward(current_deg: f64, desired_deg: f64, max_step: f64) -> f64 {
    let mut delta = (desired_deg - current_deg).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    (current_deg + delta.clamp(-max_step, max_step)).rem_euclid(360.0)
}

/// Rotate a unit vector toward a desired direction by at most
/// `max_angle_rad`. Degenerate inputs return the current heading;
/// an anti-parallel pair detours through an arbitrary perpendicular.
pub fn rotate_toward(current: DVec3, desired: DVec3, max_angle_rad: f64) -> DVec3 {
    if current.length_squared() < 1e-12 || desired.length_squared() < 1e-12 {
        return current;
    }
    let current = current.normalize();
    let desired = desired.normalize();

    let angle = current.angle_between(desired);
    if angle <= max_angle_rad {
        return desired;
    }
    if angle >= std::f64::consts::PI - 1e-6 {
        // Directly opposed: pick any perpendicular to start the turn.
        let axis = current.any_orthonormal_vector();
        return (current * max_angle_rad.cos() + axis * max_angle_rad.sin()).normalize();
    }

    let sin_angle = angle.sin();
    let a = ((angle - max_angle_rad).sin()) / sin_angle;
    let b = (max_angle_rad.sin()) / sin_angle;
    (current * a + desired * b).normalize()
}
