//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is always
//! [`TICK_PERIOD`] of simulated (and wall-clock) time:
//!
//!   elapsed = tick * TICK_PERIOD
//!
//! The counter only advances while a run is `Running`; pausing freezes it.

use std::fmt;
use std::time::Duration;

/// Fixed scheduler period.  Not configurable.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Counts ticks for one run and converts them to elapsed simulated time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick.next();
        self.current_tick
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.current_tick.0.saturating_mul(TICK_PERIOD.as_millis() as u64))
    }

    /// Break elapsed time into (hours, minutes, seconds) for log lines.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.elapsed().as_secs();
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({h:02}:{m:02}:{s:02})", self.current_tick)
    }
}
