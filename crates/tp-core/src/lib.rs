//! `tp-core` — foundational types for the `teleport` drive simulator.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, haversine distance, bearing, destination  |
//! | [`position`]  | `Position`: what gets pushed to a location sink        |
//! | [`config`]    | `SimulationConfig`, `EngineConfig`                      |
//! | [`time`]      | `Tick`, `SimClock`, `TICK_PERIOD`                       |
//! | [`error`]     | `ConfigError`, `ConfigResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod position;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, SimulationConfig};
pub use error::{ConfigError, ConfigResult};
pub use geo::{bearing_rad, destination_point, distance_km, Coordinate, EARTH_RADIUS_KM};
pub use position::Position;
pub use time::{SimClock, Tick, TICK_PERIOD};
