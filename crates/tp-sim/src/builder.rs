//! Fluent builder for constructing a [`DriveSimulator`].

use std::sync::Arc;

use tp_core::EngineConfig;
use tp_sink::LocationSink;

use crate::{DriveSimulator, NoopObserver, SimObserver, SimResult};

/// Fluent builder for [`DriveSimulator<S>`].
///
/// # Required inputs
///
/// - `Arc<S>` where `S: LocationSink`, shared so the caller can keep a
///   handle for read-back.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                     |
/// |----------------------|-----------------------------|
/// | `.engine_config(c)`  | `EngineConfig::default()`   |
/// | `.observer(o)`       | `NoopObserver`              |
///
/// # Example
///
/// ```rust,ignore
/// let sink = Arc::new(MemorySink::new());
/// let (observer, mut events) = ChannelObserver::new();
/// let sim = SimBuilder::new(Arc::clone(&sink))
///     .observer(observer)
///     .build()?;
/// sim.start(config).await?;
/// ```
pub struct SimBuilder<S: LocationSink> {
    sink:     Arc<S>,
    config:   Option<EngineConfig>,
    observer: Option<Box<dyn SimObserver>>,
}

impl<S: LocationSink> SimBuilder<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            config:   None,
            observer: None,
        }
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Receive position, error, and state-change callbacks.  Only one
    /// observer is held; fan out inside it if you need more.
    pub fn observer<O: SimObserver>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Validate the engine config and return an idle simulator.
    pub fn build(self) -> SimResult<DriveSimulator<S>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let observer = self.observer.unwrap_or_else(|| Box::new(NoopObserver));
        Ok(DriveSimulator::from_parts(self.sink, config, observer))
    }
}
