//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; the systems in
//! `brink-sim` own all behavior. `GeoPosition` (from `types`) is also
//! attached as a component alongside `Altitude`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GeoPosition;

/// A launched ballistic missile flying a fixed geodesic arc.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallisticMissile {
    pub missile_id: u32,
    pub owner_id: u32,
    /// Silo the missile launched from.
    pub source_silo: u32,
    pub launch_geo: GeoPosition,
    pub target_geo: GeoPosition,
    /// Total flight duration in milliseconds (floored at the minimum).
    pub flight_duration_ms: f64,
    /// Arc progress in [0, 1].
    pub progress: f64,
    /// Peak altitude of the arc (units).
    pub apex_height: f64,
    pub intercepted: bool,
    pub detonated: bool,
    /// Tick at which the missile resolved, for the linger window.
    pub resolved_tick: Option<u64>,
}

impl BallisticMissile {
    /// Once intercepted or detonated the missile is frozen for good.
    pub fn is_terminal(&self) -> bool {
        self.intercepted || self.detonated
    }
}

/// Shared interceptor record; variant-specific state lives in
/// [`GuidanceState`]. The target is referenced by id, not entity:
/// target lifetime is independent of interceptor lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interceptor {
    pub interceptor_id: u32,
    pub owner_id: u32,
    pub source_silo: u32,
    /// Missile id looked up against the live set each tick.
    pub target_missile: u32,
    pub status: InterceptorStatus,
    pub phase: InterceptorPhase,
    pub launch_tick: u64,
    /// Tick at which the current phase began.
    pub phase_start_tick: u64,
    /// Remaining burn time (seconds). Never negative.
    pub fuel_secs: f64,
    pub max_fuel_secs: f64,
    /// Radars contributing tracking data for this engagement.
    pub tracking_radars: Vec<u32>,
    /// Tick at which the interceptor resolved, for the linger window.
    pub resolved_tick: Option<u64>,
}

impl Interceptor {
    pub fn is_terminal(&self) -> bool {
        self.status != InterceptorStatus::Active
    }

    /// Remaining fuel as a fraction of the full load.
    pub fn fuel_fraction(&self) -> f64 {
        if self.max_fuel_secs > 0.0 {
            self.fuel_secs / self.max_fuel_secs
        } else {
            0.0
        }
    }
}

/// Variant-specific guidance state, one per interceptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GuidanceState {
    /// Progress along a fixed arc from launch point to aim point.
    Kinematic {
        launch_geo: GeoPosition,
        aim_geo: GeoPosition,
        flight_duration_ms: f64,
        progress: f64,
        apex_height: f64,
    },
    /// Full Cartesian state on the globe; geo/altitude components are
    /// re-derived from it every tick.
    Physics {
        position: DVec3,
        velocity: DVec3,
        /// Thrust direction, unit length.
        heading: DVec3,
    },
    /// Independent heading and climb angles steered toward the
    /// predicted intercept point.
    Guided {
        heading_deg: f64,
        climb_deg: f64,
        /// Whether a listed tracking radar currently covers the target.
        guided: bool,
    },
}

impl GuidanceState {
    pub fn mode(&self) -> GuidanceMode {
        match self {
            GuidanceState::Kinematic { .. } => GuidanceMode::Kinematic,
            GuidanceState::Physics { .. } => GuidanceMode::Physics,
            GuidanceState::Guided { .. } => GuidanceMode::Guided,
        }
    }
}

/// Altitude above the globe surface (units).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Altitude {
    pub units: f64,
}
