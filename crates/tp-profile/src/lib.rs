//! `tp-profile` — named, reusable drive configurations.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`profile`] | `Profile`: a name plus a `SimulationConfig`             |
//! | [`store`]   | `ProfileStore` trait, `MemoryProfileStore`               |
//! | [`loader`]  | `load_profiles_csv`, `load_profiles_reader`, `save_profiles_csv`, `write_profiles` |
//! | [`error`]   | `ProfileError`, `ProfileResult<T>`                       |

pub mod error;
pub mod loader;
pub mod profile;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{ProfileError, ProfileResult};
pub use loader::{load_profiles_csv, load_profiles_reader, save_profiles_csv, write_profiles};
pub use profile::Profile;
pub use store::{MemoryProfileStore, ProfileStore};
