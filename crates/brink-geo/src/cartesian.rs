//! Geo ↔ Cartesian conversion for the physics guidance leg.
//!
//! Convention: the globe center is the origin, +z through the north
//! pole, +x through (lat 0, lng 0).

use brink_core::types::GeoPosition;
use glam::DVec3;

/// Vector lengths below this are degenerate; conversion falls back to a
/// safe default instead of propagating NaN.
const DEGENERATE_LENGTH: f64 = 1e-9;

/// Convert a geo position plus altitude to a Cartesian point on a globe
/// of the given radius.
pub fn geo_to_cartesian(geo: &GeoPosition, altitude: f64, radius: f64) -> DVec3 {
    let lat = geo.lat_rad();
    let lng = geo.lng_rad();
    let r = radius + altitude;
    DVec3::new(
        r * lat.cos() * lng.cos(),
        r * lat.cos() * lng.sin(),
        r * lat.sin(),
    )
}

/// Convert a Cartesian point back to (geo position, altitude above the
/// globe surface). A near-zero-length vector yields the origin point at
/// surface level rather than NaN.
pub fn cartesian_to_geo(v: DVec3, radius: f64) -> (GeoPosition, f64) {
    let len = v.length();
    if len < DEGENERATE_LENGTH {
        return (GeoPosition::new(0.0, 0.0), 0.0);
    }

    let lat = (v.z / len).clamp(-1.0, 1.0).asin();
    let lng = v.y.atan2(v.x);
    (
        GeoPosition::new(lat.to_degrees(), lng.to_degrees()),
        len - radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use brink_core::constants::GLOBE_RADIUS;

    #[test]
    fn test_cartesian_roundtrip() {
        let geo = GeoPosition::new(37.5, -122.3);
        let alt = 12.0;

        let v = geo_to_cartesian(&geo, alt, GLOBE_RADIUS);
        let (geo2, alt2) = cartesian_to_geo(v, GLOBE_RADIUS);

        assert!((geo.lat - geo2.lat).abs() < 1e-9, "lat roundtrip");
        assert!((geo.lng - geo2.lng).abs() < 1e-9, "lng roundtrip");
        assert!((alt - alt2).abs() < 1e-9, "altitude roundtrip");
    }

    #[test]
    fn test_surface_point_has_globe_radius() {
        let geo = GeoPosition::new(0.0, 0.0);
        let v = geo_to_cartesian(&geo, 0.0, GLOBE_RADIUS);
        assert!((v.length() - GLOBE_RADIUS).abs() < 1e-9);
        assert!((v.x - GLOBE_RADIUS).abs() < 1e-9, "lat 0 lng 0 is +x");
    }

    #[test]
    fn test_degenerate_vector_falls_back() {
        let (geo, alt) = cartesian_to_geo(DVec3::ZERO, GLOBE_RADIUS);
        assert_eq!(geo, GeoPosition::new(0.0, 0.0));
        assert_eq!(alt, 0.0);
        assert!(geo.lat.is_finite() && geo.lng.is_finite());
    }

    #[test]
    fn test_pole_conversion() {
        let pole = GeoPosition::new(90.0, 0.0);
        let v = geo_to_cartesian(&pole, 0.0, GLOBE_RADIUS);
        assert!(v.x.abs() < 1e-9 && v.y.abs() < 1e-9);
        assert!((v.z - GLOBE_RADIUS).abs() < 1e-9);
    }
}
