//! `tp-route` — the path a simulated drive follows and its progress state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`path`]    | `RoutePath`: total distance, interpolation, overshoot     |
//! | [`state`]   | `RunState`: accumulated distance and tick count for a run |
//!
//! # Movement model
//!
//! A drive is a single straight segment from `start` to `end`:
//!
//! 1. `RoutePath::new` measures the great-circle length once.
//! 2. Each tick `RunState::advance` adds `speed_kmh / 3600` km.
//! 3. `RoutePath::interpolate` turns the accumulated distance into a
//!    coordinate by blending latitude and longitude linearly.
//!
//! The blend is planar on purpose: waypoints must match the reference
//! behaviour exactly, and for the short test routes this tool drives the
//! difference from a true geodesic is negligible.

pub mod path;
pub mod state;


pub use path::RoutePath;
pub use state::RunState;
