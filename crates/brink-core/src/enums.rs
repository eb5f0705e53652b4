//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Operating mode of a silo. Strategic launches require `Attack`;
/// interceptor launches require `Defense`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiloMode {
    #[default]
    Attack,
    Defense,
}

/// Guidance strategy selected per interceptor launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidanceMode {
    /// Progress-interpolated arc, low-fidelity play.
    #[default]
    Kinematic,
    /// Thrust + fuel + gravity integration on the Cartesian globe.
    Physics,
    /// Proportional navigation toward a re-predicted intercept point.
    Guided,
}

/// Interceptor lifecycle status. Terminal exactly once: anything other
/// than `Active` ends guidance and movement for good.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptorStatus {
    #[default]
    Active,
    /// Destroyed its target.
    Hit,
    /// Failed its one proximity-triggered hit roll.
    Missed,
    /// Ran out its flight-time or coast budget without resolving.
    Expired,
    /// Hit the ground.
    Crashed,
}

/// Interceptor flight phase. Transitions run forward only, except that
/// flameout or target loss can force an early jump to `Coast`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptorPhase {
    /// High-G climb out of the silo.
    #[default]
    Boost,
    /// Pitch-over toward the predicted intercept point.
    Pitch,
    /// Cruise toward the continuously re-predicted rendezvous.
    Midcourse,
    /// Final approach, estimated time-to-intercept under threshold.
    Terminal,
    /// Ballistic flight, no steering or thrust.
    Coast,
}

/// Flight phase of a ballistic target, classified from arc progress.
/// Drives the base hit probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Accelerating, hard to hit.
    Boost,
    /// Predictable cruise, best intercept window.
    Midcourse,
    /// Fast descent, medium difficulty.
    Reentry,
}
