//! `tp-sim` — the drive simulation engine.
//!
//! # Lifecycle
//!
//! ```text
//! start(config)
//!   ① validate config, enable sink
//!   ② emit start position                      (tick 0, synchronous)
//!   ③ spawn ticker                             (first tick after 1 s)
//! every tick while Running:
//!   ④ traveled_km += speed_kmh / 3600
//!   ⑤ not arrived → emit interpolated position
//!      arrived     → emit overshoot (20 m past end), fire completion
//!                    observer, back to Idle, re-push overshoot after 200 ms
//! pause  → cancel ticker, keep distance
//! resume → new ticker, same distance
//! stop   → cancel ticker, drop run, disable sink
//! ```
//!
//! All transitions and ticks are serialised through one async mutex, so a
//! `pause` issued while a tick is waiting on a slow sink takes effect right
//! after that tick, never in the middle of it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tp_core::{Coordinate, SimulationConfig};
//! use tp_sim::SimBuilder;
//! use tp_sink::MemorySink;
//!
//! let sim = SimBuilder::new(Arc::new(MemorySink::new())).build()?;
//! sim.on_completion(|run| println!("arrived after {}", run.ticks)).await;
//! sim.start(SimulationConfig::new(
//!     Coordinate::new(40.758, -73.9855),
//!     Coordinate::new(40.748, -73.9855),
//!     60.0,
//! )).await?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod state;

mod ticker;


pub use builder::SimBuilder;
pub use engine::DriveSimulator;
pub use error::{SimError, SimResult};
pub use observer::{ChannelObserver, CompletionCallback, NoopObserver, SimEvent, SimObserver};
pub use state::{CompletedRun, RunSnapshot, SimState};
