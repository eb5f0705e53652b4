//! Spherical geometry and ballistic arc math for BRINK.
//!
//! Pure functions, no state. Great-circle routines work in radians and
//! degrees; conversions to simulation units (`radians * 100`) happen at
//! the call sites via `brink_core::constants::UNITS_PER_RADIAN`.

pub mod ballistic;
pub mod cartesian;
pub mod great_circle;

pub use ballistic::{altitude, apex_height, flight_phase};
pub use cartesian::{cartesian_to_geo, geo_to_cartesian};
pub use great_circle::{bearing, destination, distance, interpolate, slant_range_units};
