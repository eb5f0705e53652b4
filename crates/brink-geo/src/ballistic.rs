//! Ballistic altitude profile: the altitude-over-progress curve for
//! ICBM arcs.
//!
//! A raised sine with a sharpness exponent below 1 gives a steep boost
//! and a flatter cruise/shallower reentry than a symmetric parabola, so
//! descent reads differently from ascent. The same progress thresholds
//! classify flight phase for hit-probability lookups.

use brink_core::constants::*;
use brink_core::enums::FlightPhase;

/// Sine values below this are endpoint noise, not altitude.
const ENDPOINT_EPS: f64 = 1e-12;

/// Altitude at arc progress `t ∈ [0, 1]` for a given apex height.
///
/// `altitude = apex * sin(t·π)^sharpness`. The endpoints snap to
/// exactly zero: `sin(π)` lands at ~1e-16 in f64, and a sub-1 exponent
/// amplifies that noise into visible altitude.
pub fn altitude(t: f64, apex: f64, sharpness: f64) -> f64 {
    let base = (t * std::f64::consts::PI).sin();
    if base <= ENDPOINT_EPS {
        return 0.0;
    }
    apex * base.powf(sharpness)
}

/// Apex height for a ballistic arc covering `distance_units` of ground.
pub fn apex_height(distance_units: f64) -> f64 {
    (distance_units * APEX_FACTOR).clamp(APEX_MIN, APEX_MAX)
}

/// Classify a ballistic target's flight phase from its arc progress.
pub fn flight_phase(t: f64) -> FlightPhase {
    if t < BOOST_PHASE_END {
        FlightPhase::Boost
    } else if t > REENTRY_PHASE_START {
        FlightPhase::Reentry
    } else {
        FlightPhase::Midcourse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_zero_at_endpoints() {
        for sharpness in [0.6, 1.0] {
            assert_eq!(altitude(0.0, 10.0, sharpness), 0.0);
            assert_eq!(
                altitude(1.0, 10.0, sharpness),
                0.0,
                "sin(pi) float noise must not leak into the endpoint"
            );
        }
    }

    #[test]
    fn test_altitude_never_negative() {
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let alt = altitude(t, 15.0, REENTRY_SHARPNESS);
            assert!(alt >= 0.0, "altitude({t}) = {alt} must be non-negative");
        }
        // Slight overshoot from progress clamping noise must not go negative.
        assert_eq!(altitude(-1e-12, 15.0, REENTRY_SHARPNESS), 0.0);
        assert_eq!(altitude(1.0 + 1e-12, 15.0, REENTRY_SHARPNESS), 0.0);
    }

    #[test]
    fn test_symmetric_profile_peaks_at_midpoint() {
        let apex = 12.0;
        let mut max_t = 0.0;
        let mut max_alt = 0.0;
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let alt = altitude(t, apex, 1.0);
            if alt > max_alt {
                max_alt = alt;
                max_t = t;
            }
        }
        assert!(
            (max_t - 0.5).abs() < 1e-3,
            "symmetric profile should peak at t=0.5, peaked at {max_t}"
        );
        assert!((max_alt - apex).abs() < 1e-6, "peak should reach the apex");
    }

    #[test]
    fn test_sharpness_flattens_cruise() {
        // With sharpness < 1 the mid-arc sits closer to the apex than the
        // symmetric curve, giving the flatter cruise.
        let symmetric = altitude(0.3, 10.0, 1.0);
        let sharpened = altitude(0.3, 10.0, REENTRY_SHARPNESS);
        assert!(
            sharpened > symmetric,
            "sharpness {REENTRY_SHARPNESS} should lift the shoulder: {sharpened} vs {symmetric}"
        );
    }

    #[test]
    fn test_apex_height_clamped() {
        assert_eq!(apex_height(0.0), APEX_MIN);
        assert_eq!(apex_height(1e6), APEX_MAX);
        let mid = apex_height(100.0);
        assert!((mid - 100.0 * APEX_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn test_flight_phase_thresholds() {
        assert_eq!(flight_phase(0.0), FlightPhase::Boost);
        assert_eq!(flight_phase(0.14), FlightPhase::Boost);
        assert_eq!(flight_phase(0.15), FlightPhase::Midcourse);
        assert_eq!(flight_phase(0.5), FlightPhase::Midcourse);
        assert_eq!(flight_phase(0.80), FlightPhase::Midcourse);
        assert_eq!(flight_phase(0.81), FlightPhase::Reentry);
        assert_eq!(flight_phase(1.0), FlightPhase::Reentry);
    }
}
