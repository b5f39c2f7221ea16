//! A saved drive.

use tp_core::SimulationConfig;

use crate::{ProfileError, ProfileResult};

/// A `SimulationConfig` stored under a name, e.g. `"commute"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub name:   String,
    pub config: SimulationConfig,
}

impl Profile {
    /// Build a profile, rejecting blank names and invalid configs.
    pub fn new(name: impl Into<String>, config: SimulationConfig) -> ProfileResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::Parse("profile name must not be empty".into()));
        }
        config
            .validate()
            .map_err(|source| ProfileError::Config { name: name.clone(), source })?;
        Ok(Self { name, config })
    }
}
