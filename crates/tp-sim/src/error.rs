use thiserror::Error;
use tp_core::ConfigError;
use tp_sink::SinkError;

use crate::SimState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("cannot {op} while {state}")]
    InvalidTransition {
        op:    &'static str,
        state: SimState,
    },

    #[error("location sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type SimResult<T> = Result<T, SimError>;
