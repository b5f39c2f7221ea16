//! Per-run mutable progress.

use tp_core::{Coordinate, SimClock, SimulationConfig, Tick, TICK_PERIOD};

use crate::RoutePath;

/// Everything that changes while a drive is in progress.
///
/// A `RunState` exists only between a successful start and the run's end
/// (stop or arrival).  The engine owns it; `traveled_km` only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// The configuration the run was started with.  Never changes.
    pub config: SimulationConfig,

    /// Geometry derived from `config` at start.
    pub path: RoutePath,

    /// Distance covered so far, km.  Frozen while paused.
    traveled_km: f64,

    /// Ticks applied to this run (not counting paused time).
    clock: SimClock,
}

impl RunState {
    /// Fresh state at the start of the route.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            path: RoutePath::new(config.start, config.end),
            config,
            traveled_km: 0.0,
            clock: SimClock::new(),
        }
    }

    #[inline]
    pub fn traveled_km(&self) -> f64 {
        self.traveled_km
    }

    #[inline]
    pub fn total_distance_km(&self) -> f64 {
        self.path.total_distance_km()
    }

    #[inline]
    pub fn ticks(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Distance added by one tick at the configured speed, km.
    #[inline]
    pub fn step_km(&self) -> f64 {
        self.config.km_per_second() * TICK_PERIOD.as_secs_f64()
    }

    /// Apply one tick of travel.  Returns `true` if the run has arrived.
    pub fn advance(&mut self) -> bool {
        self.traveled_km += self.step_km();
        self.clock.advance();
        self.is_arrived()
    }

    #[inline]
    pub fn is_arrived(&self) -> bool {
        self.path.is_arrived(self.traveled_km)
    }

    #[inline]
    pub fn fraction(&self) -> f64 {
        self.path.fraction(self.traveled_km)
    }

    /// Current interpolated coordinate.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.path.interpolate(self.traveled_km)
    }
}
