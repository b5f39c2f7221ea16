//! Lifecycle states and read-only run snapshots.

use std::fmt;

use tp_core::{Position, SimulationConfig, Tick};
use tp_route::RunState;

/// Engine lifecycle state.
///
/// ```text
/// Idle ──start──▶ Running ──pause──▶ Paused
///  ▲               │  ▲               │
///  │               │  └────resume─────┘
///  │◀────stop──────┤◀──────stop───────┘
///  │               ▼
///  └──(auto)─── Completed   (arrival)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SimState {
    #[default]
    Idle,
    Running,
    Paused,
    /// Held only while the completion observer runs, then `Idle`.
    Completed,
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimState::Idle      => "idle",
            SimState::Running   => "running",
            SimState::Paused    => "paused",
            SimState::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A copy of the in-progress run, for status displays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSnapshot {
    pub state:             SimState,
    pub config:            SimulationConfig,
    pub traveled_km:       f64,
    pub total_distance_km: f64,
    pub ticks:             Tick,
    /// Fraction of the route covered, `[0.0, 1.0]`.
    pub fraction:          f64,
}

impl RunSnapshot {
    pub(crate) fn capture(state: SimState, run: &RunState) -> Self {
        Self {
            state,
            config:            run.config,
            traveled_km:       run.traveled_km(),
            total_distance_km: run.total_distance_km(),
            ticks:             run.ticks(),
            fraction:          run.fraction(),
        }
    }
}

/// Handed to the completion observer when a run arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedRun {
    pub config:         SimulationConfig,
    /// The overshoot position that was emitted last.
    pub final_position: Position,
    pub ticks:          Tick,
    pub traveled_km:    f64,
}
