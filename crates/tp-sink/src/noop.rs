//! A sink that accepts everything and remembers nothing.

use async_trait::async_trait;
use tp_core::Position;

use crate::{LocationSink, SinkError, SinkResult};

/// A [`LocationSink`] whose writes always succeed and are discarded.
///
/// Useful when only the observer stream matters (dry runs, benchmarks).
/// `get_position` always fails with [`SinkError::NoPosition`].
pub struct NoopSink;

#[async_trait]
impl LocationSink for NoopSink {
    async fn enable(&self) -> SinkResult<()> {
        Ok(())
    }

    async fn disable(&self) -> SinkResult<()> {
        Ok(())
    }

    async fn set_position(&self, _position: &Position) -> SinkResult<()> {
        Ok(())
    }

    async fn get_position(&self) -> SinkResult<Position> {
        Err(SinkError::NoPosition)
    }
}
