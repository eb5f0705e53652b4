//! World records the engine reads and mutates: silos, radars, cities,
//! players, and the external DEFCON signal.
//!
//! Stored in `BTreeMap`s keyed by id so iteration order (and therefore
//! damage application and event order) is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{RADAR_RANGE_UNITS, SILO_MAX_AMMO};
use crate::enums::SiloMode;
use crate::types::GeoPosition;

/// A missile silo. Launch preconditions (mode, ammo, cooldown,
/// destruction) are validated by the engine's launch operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Silo {
    pub id: u32,
    pub owner_id: u32,
    pub geo: GeoPosition,
    pub mode: SiloMode,
    pub ammo: u32,
    /// Tick before which the silo may not launch again.
    pub cooldown_until_tick: u64,
    pub destroyed: bool,
}

impl Silo {
    pub fn new(id: u32, owner_id: u32, geo: GeoPosition, mode: SiloMode) -> Self {
        Self {
            id,
            owner_id,
            geo,
            mode,
            ammo: SILO_MAX_AMMO,
            cooldown_until_tick: 0,
            destroyed: false,
        }
    }
}

/// A tracking radar whose coverage circle gates guided interception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Radar {
    pub id: u32,
    pub owner_id: u32,
    pub geo: GeoPosition,
    /// Coverage radius (units).
    pub range_units: f64,
    pub destroyed: bool,
}

impl Radar {
    pub fn new(id: u32, owner_id: u32, geo: GeoPosition) -> Self {
        Self {
            id,
            owner_id,
            geo,
            range_units: RADAR_RANGE_UNITS,
            destroyed: false,
        }
    }
}

/// A population center that takes distance-attenuated casualties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub owner_id: u32,
    pub geo: GeoPosition,
    pub population: u64,
}

/// Per-player score state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: u32,
    /// Casualties inflicted.
    pub score: u64,
}

/// Mutable world state owned by the engine. The DEFCON level is an
/// external signal consumed as an enable/disable gate, never computed
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub silos: BTreeMap<u32, Silo>,
    pub radars: BTreeMap<u32, Radar>,
    pub cities: BTreeMap<u32, City>,
    pub players: BTreeMap<u32, PlayerState>,
    pub defcon: u8,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            silos: BTreeMap::new(),
            radars: BTreeMap::new(),
            cities: BTreeMap::new(),
            players: BTreeMap::new(),
            defcon: 5,
        }
    }
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player so score can be credited to them.
    pub fn add_player(&mut self, id: u32) {
        self.players.insert(id, PlayerState { id, score: 0 });
    }
}
