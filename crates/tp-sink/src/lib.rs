//! `tp-sink` — where simulated positions go.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`sink`]    | `LocationSink` async trait                                    |
//! | [`memory`]  | `MemorySink`, an in-process mock-location provider + history |
//! | [`noop`]    | `NoopSink`, accepts and discards everything                   |
//! | [`error`]   | `SinkError`, `SinkResult<T>`                                  |
//!
//! # Design notes
//!
//! A real device backend (an OS test-provider, a GPS emulator socket, …)
//! lives outside this workspace and only has to implement [`LocationSink`].
//! The engine calls it from a single logical task and never retries a failed
//! call, so implementations may assume calls do not overlap for one engine.

pub mod error;
pub mod memory;
pub mod noop;
pub mod sink;


pub use error::{SinkError, SinkResult};
pub use memory::MemorySink;
pub use noop::NoopSink;
pub use sink::LocationSink;
