//! The `LocationSink` trait: the seam to the device's location subsystem.

use async_trait::async_trait;
use tp_core::Position;

use crate::SinkResult;

/// Accepts simulated positions and makes them the device's reported location.
///
/// All methods are async because real backends cross a process or FFI
/// boundary.  Errors are returned to the engine, which surfaces them to its
/// caller or error observer; it never retries.
///
/// # Thread safety
///
/// The engine shares the sink between its ticker task and the caller, so
/// implementations must be `Send + Sync`.  Use interior mutability for any
/// state.
///
/// # Example
///
/// ```rust,ignore
/// struct StdoutSink;
///
/// #[async_trait]
/// impl LocationSink for StdoutSink {
///     async fn enable(&self) -> SinkResult<()> { Ok(()) }
///     async fn disable(&self) -> SinkResult<()> { Ok(()) }
///     async fn set_position(&self, p: &Position) -> SinkResult<()> {
///         println!("{p}");
///         Ok(())
///     }
///     async fn get_position(&self) -> SinkResult<Position> {
///         Err(SinkError::NoPosition)
///     }
/// }
/// ```
#[async_trait]
pub trait LocationSink: Send + Sync + 'static {
    /// Turn mock-location mode on.  Idempotent.
    async fn enable(&self) -> SinkResult<()>;

    /// Turn mock-location mode off.  Idempotent.
    async fn disable(&self) -> SinkResult<()>;

    /// Report `position` as the current location.
    async fn set_position(&self, position: &Position) -> SinkResult<()>;

    /// Read back the last reported location.  Used by verification tools,
    /// never by the simulation loop.
    async fn get_position(&self) -> SinkResult<Position>;
}
