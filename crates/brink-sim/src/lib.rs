//! Simulation engine for BRINK.
//!
//! Owns the hecs ECS world of live missiles and interceptors plus the
//! world records (silos, radars, cities, players), runs the five-pass
//! tick, and returns discrete events to the caller.

pub mod engine;
pub mod guidance;
pub mod systems;

pub use brink_core as core;
pub use engine::{SimConfig, SimulationEngine};
