//! Discrete events emitted by the simulation each tick.
//!
//! Serialization of these to a transport is the network layer's
//! responsibility; the engine only produces them.

use serde::{Deserialize, Serialize};

use crate::enums::GuidanceMode;
use crate::types::GeoPosition;

/// One simulation event. Returned in batches from `tick()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ballistic missile left its silo.
    Launch {
        missile_id: u32,
        owner_id: u32,
        source: GeoPosition,
        target: GeoPosition,
    },
    /// An interceptor left its silo.
    InterceptorLaunch {
        interceptor_id: u32,
        owner_id: u32,
        target_missile: u32,
        mode: GuidanceMode,
    },
    /// A ballistic missile reached its target.
    Impact {
        missile_id: u32,
        owner_id: u32,
        position: GeoPosition,
        casualties: u64,
    },
    /// A building was caught inside a detonation.
    BuildingDestroyed {
        building_id: u32,
        position: GeoPosition,
    },
    /// An interceptor destroyed its target.
    Interception {
        missile_id: u32,
        interceptor_id: u32,
        position: GeoPosition,
    },
    /// A proximity attempt failed its hit roll.
    InterceptorMissed {
        interceptor_id: u32,
        missile_id: u32,
    },
    /// Flight-time or coast budget exhausted.
    InterceptorExpired { interceptor_id: u32 },
    /// Ground contact.
    InterceptorCrashed { interceptor_id: u32 },
}
