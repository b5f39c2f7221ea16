//! The 1 Hz periodic driver.
//!
//! A `Ticker` knows nothing about routes or sinks: it calls an async closure
//! once per [`TICK_PERIOD`] and stops when the closure says so or when it is
//! cancelled.  The engine keeps at most one alive and tags each with an
//! epoch so a tick from a replaced ticker can recognise itself as stale.

use std::future::Future;
use std::ops::ControlFlow;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tp_core::TICK_PERIOD;

pub(crate) struct Ticker {
    epoch:  u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker whose first tick fires one period from now.
    ///
    /// Each call to `on_tick` is awaited to completion before the next
    /// period is waited for.  A period that elapses while `on_tick` is still
    /// running is not replayed: the schedule shifts instead, so a slow tick
    /// never causes a burst of catch-up ticks.
    pub(crate) fn spawn<F, Fut>(epoch: u64, mut on_tick: F) -> Self
    where
        F:   FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let first = Instant::now() + TICK_PERIOD;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if on_tick().await.is_break() {
                    break;
                }
            }
        });
        Self { epoch, handle }
    }

    #[inline]
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Stop the ticker.  An in-flight `on_tick` is dropped at its next await
    /// point; callers that need a tick to finish first must serialise with it.
    pub(crate) fn cancel(self) {
        self.handle.abort();
    }
}
