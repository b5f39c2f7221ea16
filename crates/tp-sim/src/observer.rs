//! Observer hooks for position updates, sink failures, and state changes.

use tokio::sync::mpsc;
use tp_core::{Position, Tick};
use tp_sink::SinkError;

use crate::{CompletedRun, SimState};

/// Callbacks invoked by [`DriveSimulator`][crate::DriveSimulator] as a run
/// progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  They are called while the engine is
/// mid-transition, so they must not block.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_position(&mut self, tick: Tick, position: &Position) {
///         println!("{tick}: {position}");
///     }
/// }
/// ```
pub trait SimObserver: Send + 'static {
    /// A position was emitted.  `Tick(0)` is the start position.
    ///
    /// Called even if the sink rejected the position; the rejection is
    /// reported separately through [`on_error`][Self::on_error].
    fn on_position(&mut self, _tick: Tick, _position: &Position) {}

    /// The sink failed while a tick was reporting its position.  The run
    /// keeps going.
    fn on_error(&mut self, _tick: Tick, _error: &SinkError) {}

    /// The engine moved from `from` to `to`.
    fn on_state_change(&mut self, _from: SimState, _to: SimState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Everything a [`ChannelObserver`] forwards.
#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    Position { tick: Tick, position: Position },
    SinkFailed { tick: Tick, error: SinkError },
    StateChanged { from: SimState, to: SimState },
}

/// A [`SimObserver`] that forwards every event into an unbounded channel.
///
/// This is the subscription point for UIs: keep the receiver, poll it from
/// any task.  Events are dropped silently once the receiver is gone.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<SimEvent>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SimEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SimObserver for ChannelObserver {
    fn on_position(&mut self, tick: Tick, position: &Position) {
        let _ = self.tx.send(SimEvent::Position { tick, position: *position });
    }

    fn on_error(&mut self, tick: Tick, error: &SinkError) {
        let _ = self.tx.send(SimEvent::SinkFailed { tick, error: error.clone() });
    }

    fn on_state_change(&mut self, from: SimState, to: SimState) {
        let _ = self.tx.send(SimEvent::StateChanged { from, to });
    }
}

/// One-shot completion callback.  The engine holds at most one; registering a
/// new one replaces the old, and firing consumes it.
pub type CompletionCallback = Box<dyn FnOnce(CompletedRun) + Send + 'static>;
