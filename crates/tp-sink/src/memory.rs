//! In-process mock-location provider.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tp_core::Position;
use tracing::debug;

use crate::{LocationSink, SinkError, SinkResult};

#[derive(Default)]
struct Inner {
    enabled: bool,
    last:    Option<Position>,
    history: Vec<Position>,
}

/// A [`LocationSink`] that behaves like a device test provider.
///
/// - `set_position` is rejected with [`SinkError::NotEnabled`] until
///   `enable` has been called.
/// - `disable` clears the current fix, as removing a test provider does.
/// - Every accepted position is appended to a history for inspection.
#[derive(Default)]
pub struct MemorySink {
    inner: Mutex<Inner>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// All positions accepted so far, oldest first.
    pub fn history(&self) -> Vec<Position> {
        self.lock().history.clone()
    }

    /// Number of positions accepted so far.
    pub fn len(&self) -> usize {
        self.lock().history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Never held across an await; a poisoned lock still has usable data.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LocationSink for MemorySink {
    async fn enable(&self) -> SinkResult<()> {
        self.lock().enabled = true;
        debug!("memory sink enabled");
        Ok(())
    }

    async fn disable(&self) -> SinkResult<()> {
        let mut inner = self.lock();
        if inner.enabled {
            inner.enabled = false;
            inner.last = None;
            debug!("memory sink disabled");
        }
        Ok(())
    }

    async fn set_position(&self, position: &Position) -> SinkResult<()> {
        let mut inner = self.lock();
        if !inner.enabled {
            return Err(SinkError::NotEnabled);
        }
        inner.last = Some(*position);
        inner.history.push(*position);
        Ok(())
    }

    async fn get_position(&self) -> SinkResult<Position> {
        self.lock().last.ok_or(SinkError::NoPosition)
    }
}
