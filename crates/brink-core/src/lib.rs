//! Core types and definitions for the BRINK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, constants, enums, events, and the world records (silos,
//! radars, cities, players) the engine mutates each tick. It has no
//! dependency on any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod types;
pub mod world;

#[cfg(test)]
mod tests;
