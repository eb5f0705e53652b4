//! Great-circle primitives: distance, slerp interpolation, bearing,
//! forward geodesic.

use brink_core::constants::UNITS_PER_RADIAN;
use brink_core::types::GeoPosition;

/// Distance below which two points are treated as coincident (radians).
const COINCIDENT_EPS: f64 = 1e-4;

/// Great-circle distance between two points in radians (haversine).
///
/// The longitude delta is normalized to `(-π, π]` so the shortest path
/// is always taken, and the haversine term is clamped to `[0, 1]` to
/// tolerate floating-point overshoot before `asin`.
pub fn distance(a: &GeoPosition, b: &GeoPosition) -> f64 {
    let lat_a = a.lat_rad();
    let lat_b = b.lat_rad();
    let dlat = lat_b - lat_a;
    let dlng = normalize_rad(b.lng_rad() - a.lng_rad());

    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// 3D separation in simulation units between two points with altitudes.
pub fn slant_range_units(a: &GeoPosition, alt_a: f64, b: &GeoPosition, alt_b: f64) -> f64 {
    let ground = distance(a, b) * UNITS_PER_RADIAN;
    let dalt = alt_b - alt_a;
    (ground * ground + dalt * dalt).sqrt()
}

/// Spherical slerp between `a` and `b` at fraction `t`.
///
/// Returns `a` verbatim for near-coincident endpoints to avoid dividing
/// by a near-zero sine. `t` slightly outside `[0, 1]` extrapolates
/// along the same great circle.
pub fn interpolate(a: &GeoPosition, b: &GeoPosition, t: f64) -> GeoPosition {
    let d = distance(a, b);
    if d < COINCIDENT_EPS {
        return *a;
    }

    let sin_d = d.sin();
    let fa = ((1.0 - t) * d).sin() / sin_d;
    let fb = (t * d).sin() / sin_d;

    let (lat_a, lng_a) = (a.lat_rad(), a.lng_rad());
    let (lat_b, lng_b) = (b.lat_rad(), b.lng_rad());

    let x = fa * lat_a.cos() * lng_a.cos() + fb * lat_b.cos() * lng_b.cos();
    let y = fa * lat_a.cos() * lng_a.sin() + fb * lat_b.cos() * lng_b.sin();
    let z = fa * lat_a.sin() + fb * lat_b.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lng = y.atan2(x);
    GeoPosition::new(lat.to_degrees(), lng.to_degrees())
}

/// Initial bearing from `a` to `b` in degrees `[0, 360)`.
/// Coincident points yield 0.
pub fn bearing(a: &GeoPosition, b: &GeoPosition) -> f64 {
    let lat_a = a.lat_rad();
    let lat_b = b.lat_rad();
    let dlng = normalize_rad(b.lng_rad() - a.lng_rad());

    let y = dlng.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * dlng.cos();
    if x.abs() < 1e-12 && y.abs() < 1e-12 {
        return 0.0;
    }
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Forward geodesic: the point `angular_dist` radians from `origin`
/// along `bearing_deg`.
pub fn destination(origin: &GeoPosition, bearing_deg: f64, angular_dist: f64) -> GeoPosition {
    let lat = origin.lat_rad();
    let lng = origin.lng_rad();
    let brg = bearing_deg.to_radians();

    let sin_lat2 = (lat.sin() * angular_dist.cos() + lat.cos() * angular_dist.sin() * brg.cos())
        .clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lng2 = lng
        + (brg.sin() * angular_dist.sin() * lat.cos())
            .atan2(angular_dist.cos() - lat.sin() * sin_lat2);

    GeoPosition::new(lat2.to_degrees(), normalize_rad(lng2).to_degrees())
}

/// Normalize an angle in radians to `(-π, π]`.
fn normalize_rad(mut rad: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    rad = rad.rem_euclid(tau);
    if rad > std::f64::consts::PI {
        rad -= tau;
    }
    rad
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_identity_and_symmetry() {
        let points = [
            GeoPosition::new(0.0, 0.0),
            GeoPosition::new(51.5, -0.1),
            GeoPosition::new(-33.9, 151.2),
            GeoPosition::new(89.0, 170.0),
        ];
        for a in &points {
            assert!(distance(a, a) < EPS, "distance(a, a) must be 0");
            for b in &points {
                assert!(
                    (distance(a, b) - distance(b, a)).abs() < EPS,
                    "distance must be symmetric"
                );
            }
        }
    }

    #[test]
    fn test_distance_quarter_circle() {
        // Equator to pole is exactly 90 degrees of arc.
        let equator = GeoPosition::new(0.0, 30.0);
        let pole = GeoPosition::new(90.0, 30.0);
        let d = distance(&equator, &pole);
        assert!(
            (d - std::f64::consts::FRAC_PI_2).abs() < 1e-9,
            "equator to pole should be pi/2, got {d}"
        );
    }

    #[test]
    fn test_distance_shortest_path_across_dateline() {
        // 10 degrees apart across the antimeridian, not 350.
        let a = GeoPosition::new(0.0, 175.0);
        let b = GeoPosition::new(0.0, -175.0);
        let d = distance(&a, &b).to_degrees();
        assert!(
            (d - 10.0).abs() < 1e-9,
            "dateline crossing should take the short way: {d} degrees"
        );
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = GeoPosition::new(10.0, -40.0);
        let b = GeoPosition::new(-25.0, 88.0);

        let start = interpolate(&a, &b, 0.0);
        let end = interpolate(&a, &b, 1.0);
        assert!((start.lat - a.lat).abs() < 1e-9 && (start.lng - a.lng).abs() < 1e-9);
        assert!((end.lat - b.lat).abs() < 1e-9 && (end.lng - b.lng).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_equator_midpoint() {
        let a = GeoPosition::new(0.0, -40.0);
        let b = GeoPosition::new(0.0, 40.0);
        let mid = interpolate(&a, &b, 0.5);
        assert!(mid.lat.abs() < 1e-9, "equator path stays on equator");
        assert!(mid.lng.abs() < 1e-9, "midpoint at lng 0, got {}", mid.lng);
    }

    #[test]
    fn test_interpolate_coincident_returns_a() {
        let a = GeoPosition::new(12.345, 67.89);
        let b = GeoPosition::new(12.345, 67.89);
        let mid = interpolate(&a, &b, 0.5);
        assert_eq!(mid, a, "coincident endpoints must return a verbatim");
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoPosition::new(0.0, 0.0);
        let east = GeoPosition::new(0.0, 10.0);
        let north = GeoPosition::new(10.0, 0.0);
        let west = GeoPosition::new(0.0, -10.0);

        assert!((bearing(&origin, &east) - 90.0).abs() < 1e-9);
        assert!(bearing(&origin, &north).abs() < 1e-9);
        assert!((bearing(&origin, &west) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_coincident_is_zero() {
        let a = GeoPosition::new(45.0, 45.0);
        assert_eq!(bearing(&a, &a), 0.0);
    }

    #[test]
    fn test_destination_inverts_bearing_and_distance() {
        let origin = GeoPosition::new(20.0, -60.0);
        let target = GeoPosition::new(35.0, 10.0);
        let d = distance(&origin, &target);
        let brg = bearing(&origin, &target);

        let reached = destination(&origin, brg, d);
        assert!(
            distance(&reached, &target) < 1e-9,
            "destination(bearing, distance) should land on the target"
        );
    }

    #[test]
    fn test_slant_range_includes_altitude() {
        let a = GeoPosition::new(0.0, 0.0);
        let b = GeoPosition::new(0.0, 0.0);
        let r = slant_range_units(&a, 0.0, &b, 5.0);
        assert!(
            (r - 5.0).abs() < 1e-9,
            "pure altitude separation should be the altitude delta"
        );
    }
}
