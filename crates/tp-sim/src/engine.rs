//! The `DriveSimulator` state machine and its tick handler.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use tp_core::{EngineConfig, Position, SimulationConfig, Tick};
use tp_route::RunState;
use tp_sink::LocationSink;

use crate::observer::CompletionCallback;
use crate::ticker::Ticker;
use crate::{CompletedRun, RunSnapshot, SimError, SimObserver, SimResult, SimState};

// ── Core ──────────────────────────────────────────────────────────────────────

/// Everything the engine mutates, behind one async mutex.
///
/// Every transition and every tick takes the lock for its whole duration,
/// sink calls included, so no two of them ever interleave.
struct Core<S: LocationSink> {
    sink:        Arc<S>,
    config:      EngineConfig,
    state:       SimState,
    run:         Option<RunState>,
    /// The only live ticker, if any.
    ticker:      Option<Ticker>,
    next_epoch:  u64,
    /// Bumped on every start and stop; lets delayed work detect that the run
    /// it belonged to is gone.  Shared with settle tasks, which may outlive
    /// the engine.
    generation:  Arc<AtomicU64>,
    observer:    Box<dyn SimObserver>,
    on_complete: Option<CompletionCallback>,
    latest:      Option<Position>,
    /// The most recent settle re-push task.
    settle:      Option<JoinHandle<()>>,
}

/// What a tick asks its ticker to do next.
enum TickOutcome<S: LocationSink> {
    Continue,
    /// This ticker was replaced or the engine left `Running`.
    Stale,
    /// The run arrived; the ticker stops and the settle re-push is scheduled.
    Completed(SettlePlan<S>),
}

/// Everything a settle task needs without going through the engine.
struct SettlePlan<S: LocationSink> {
    sink:       Arc<S>,
    position:   Position,
    /// Generation at arrival; the re-push is dropped once `current` moves on.
    generation: u64,
    current:    Arc<AtomicU64>,
    delay:      Duration,
    repushes:   u32,
}

impl<S: LocationSink> Core<S> {
    fn require(&self, expected: SimState, op: &'static str) -> SimResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SimError::InvalidTransition { op, state: self.state })
        }
    }

    fn set_state(&mut self, to: SimState) {
        let from = std::mem::replace(&mut self.state, to);
        if from != to {
            debug!(%from, %to, "state change");
            self.observer.on_state_change(from, to);
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Push `position` to the sink and the observer.  Sink failures are
    /// reported, not returned: a missed fix doesn't end the drive.
    async fn emit(&mut self, tick: Tick, position: Position) {
        let sink = Arc::clone(&self.sink);
        let result = sink.set_position(&position).await;

        self.latest = Some(position);
        self.observer.on_position(tick, &position);

        if let Err(error) = result {
            warn!(%tick, %error, "location sink rejected position");
            self.observer.on_error(tick, &error);
        }
    }

    async fn tick(&mut self, epoch: u64) -> TickOutcome<S> {
        let current = self.ticker.as_ref().map(Ticker::epoch);
        if current != Some(epoch) || self.state != SimState::Running {
            return TickOutcome::Stale;
        }

        let accuracy = self.config.accuracy_m;
        let overshoot_km = self.config.overshoot_km;
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Stale;
        };

        let arrived = run.advance();
        let tick = run.ticks();

        if !arrived {
            let position = Position::at(run.coordinate(), accuracy);
            debug!(
                %tick,
                traveled_km = run.traveled_km(),
                fraction = run.fraction(),
                %position,
                "tick"
            );
            self.emit(tick, position).await;
            return TickOutcome::Continue;
        }

        let position = Position::at(run.path.overshoot(overshoot_km), accuracy);
        self.emit(tick, position).await;
        self.finish(tick, position)
    }

    /// Arrival: tear down the run, notify, return to `Idle`.
    fn finish(&mut self, tick: Tick, position: Position) -> TickOutcome<S> {
        // The caller is this ticker's own task: detach it, don't abort it.
        self.ticker = None;
        let run = self.run.take();
        self.set_state(SimState::Completed);

        if let Some(run) = run {
            info!(clock = %run.clock(), traveled_km = run.traveled_km(), %position, "arrived");
            if let Some(callback) = self.on_complete.take() {
                callback(CompletedRun {
                    config:         run.config,
                    final_position: position,
                    ticks:          tick,
                    traveled_km:    run.traveled_km(),
                });
            }
        }

        self.set_state(SimState::Idle);
        TickOutcome::Completed(SettlePlan {
            sink:       Arc::clone(&self.sink),
            position,
            generation: self.generation.load(Ordering::SeqCst),
            current:    Arc::clone(&self.generation),
            delay:      self.config.settle_delay,
            repushes:   self.config.settle_repushes,
        })
    }
}

// ── DriveSimulator ────────────────────────────────────────────────────────────

/// Drives one simulated vehicle from a start to an end coordinate.
///
/// Methods may be called from any task.  Each takes the engine lock, so a
/// call made while a tick is waiting on the sink completes only after that
/// tick does.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct DriveSimulator<S: LocationSink> {
    core: Arc<Mutex<Core<S>>>,
    sink: Arc<S>,
}

impl<S: LocationSink> DriveSimulator<S> {
    pub(crate) fn from_parts(
        sink:     Arc<S>,
        config:   EngineConfig,
        observer: Box<dyn SimObserver>,
    ) -> Self {
        let core = Core {
            sink:        Arc::clone(&sink),
            config,
            state:       SimState::Idle,
            run:         None,
            ticker:      None,
            next_epoch:  0,
            generation:  Arc::new(AtomicU64::new(0)),
            observer,
            on_complete: None,
            latest:      None,
            settle:      None,
        };
        Self { core: Arc::new(Mutex::new(core)), sink }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Begin a drive.
    ///
    /// Enables the sink, emits the start position, then starts ticking.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidTransition`] unless `Idle`.
    /// - [`SimError::InvalidConfig`] for non-finite or out-of-range input.
    /// - [`SimError::Sink`] if enabling the sink or reporting the start
    ///   position fails.  The engine stays `Idle` with no run, and a sink
    ///   that was enabled is disabled again.
    pub async fn start(&self, config: SimulationConfig) -> SimResult<()> {
        let mut core = self.core.lock().await;
        core.require(SimState::Idle, "start")?;
        config.validate()?;

        let sink = Arc::clone(&core.sink);
        sink.enable().await?;

        let run = RunState::new(config);
        let position = Position::at(config.start, core.config.accuracy_m);
        if let Err(error) = sink.set_position(&position).await {
            if let Err(disable) = sink.disable().await {
                warn!(%disable, "could not disable sink after failed start");
            }
            return Err(error.into());
        }

        info!(
            start = %config.start,
            end = %config.end,
            speed_kmh = config.speed_kmh,
            total_km = run.total_distance_km(),
            "drive started"
        );

        core.latest = Some(position);
        core.observer.on_position(Tick::ZERO, &position);
        core.run = Some(run);
        core.generation.fetch_add(1, Ordering::SeqCst);
        core.set_state(SimState::Running);
        self.spawn_ticker(&mut core);
        Ok(())
    }

    /// Freeze the drive.  Distance covered so far is kept.
    pub async fn pause(&self) -> SimResult<()> {
        let mut core = self.core.lock().await;
        core.require(SimState::Running, "pause")?;
        core.cancel_ticker();
        core.set_state(SimState::Paused);
        if let Some(run) = &core.run {
            info!(clock = %run.clock(), traveled_km = run.traveled_km(), "drive paused");
        }
        Ok(())
    }

    /// Continue a paused drive from where it stopped.  The next position is
    /// emitted by the next tick, one period from now.
    pub async fn resume(&self) -> SimResult<()> {
        let mut core = self.core.lock().await;
        core.require(SimState::Paused, "resume")?;
        core.set_state(SimState::Running);
        self.spawn_ticker(&mut core);
        info!("drive resumed");
        Ok(())
    }

    /// Abandon any drive and disable the sink.
    ///
    /// Safe in every state.  The only possible error is the sink failing to
    /// disable; the engine is `Idle` either way.
    pub async fn stop(&self) -> SimResult<()> {
        let mut core = self.core.lock().await;
        core.cancel_ticker();
        core.generation.fetch_add(1, Ordering::SeqCst);
        if core.run.take().is_some() {
            info!("drive stopped");
        }
        core.set_state(SimState::Idle);

        let sink = Arc::clone(&core.sink);
        sink.disable().await?;
        Ok(())
    }

    // ── Observers ─────────────────────────────────────────────────────────

    /// Register the completion callback, replacing any previous one.
    ///
    /// It fires at most once, on the next arrival, and is then cleared.
    /// Stopping a run does not fire it and does not clear it.
    pub async fn on_completion<F>(&self, callback: F)
    where
        F: FnOnce(CompletedRun) + Send + 'static,
    {
        self.core.lock().await.on_complete = Some(Box::new(callback));
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub async fn state(&self) -> SimState {
        self.core.lock().await.state
    }

    /// The in-progress run, or `None` when idle.
    pub async fn snapshot(&self) -> Option<RunSnapshot> {
        let core = self.core.lock().await;
        core.run.as_ref().map(|run| RunSnapshot::capture(core.state, run))
    }

    /// The last position emitted, surviving the end of the run.
    pub async fn latest_position(&self) -> Option<Position> {
        self.core.lock().await.latest
    }

    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    /// Wait for the latest settle re-push to finish, if one is pending.
    ///
    /// The re-push runs on its own task and completes even if the simulator
    /// is dropped first, but not if the runtime shuts down; call this before
    /// exiting to make sure it landed.
    pub async fn settled(&self) {
        let pending = self.core.lock().await.settle.take();
        if let Some(handle) = pending {
            let _ = handle.await;
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    fn spawn_ticker(&self, core: &mut Core<S>) {
        core.cancel_ticker();
        let epoch = core.next_epoch;
        core.next_epoch += 1;

        let weak = Arc::downgrade(&self.core);
        core.ticker = Some(Ticker::spawn(epoch, move || tick_once(weak.clone(), epoch)));
    }
}

/// One ticker period: lock, tick, and schedule the settle re-push on arrival.
///
/// Holds only a weak reference between ticks so a dropped engine takes its
/// ticker down with it.
async fn tick_once<S: LocationSink>(weak: Weak<Mutex<Core<S>>>, epoch: u64) -> ControlFlow<()> {
    let Some(core) = weak.upgrade() else {
        return ControlFlow::Break(());
    };

    let outcome = {
        let mut guard = core.lock().await;
        guard.tick(epoch).await
    };

    match outcome {
        TickOutcome::Continue => ControlFlow::Continue(()),
        TickOutcome::Stale => ControlFlow::Break(()),
        TickOutcome::Completed(plan) => {
            if let Some(handle) = spawn_settle(weak, plan) {
                core.lock().await.settle = Some(handle);
            }
            ControlFlow::Break(())
        }
    }
}

/// Re-send the final position after a delay, best effort.
///
/// Goes to the sink only: observers already saw it.  Skipped once another
/// start or a stop has happened.  While the engine is alive the re-push takes
/// the engine lock like any tick; after the engine is dropped it goes straight
/// to the sink.
fn spawn_settle<S: LocationSink>(
    weak: Weak<Mutex<Core<S>>>,
    plan: SettlePlan<S>,
) -> Option<JoinHandle<()>> {
    if plan.repushes == 0 {
        return None;
    }
    Some(tokio::spawn(async move {
        for attempt in 1..=plan.repushes {
            tokio::time::sleep(plan.delay).await;

            let core = weak.upgrade();
            let _guard = match &core {
                Some(core) => Some(core.lock().await),
                None => None,
            };
            if plan.current.load(Ordering::SeqCst) != plan.generation {
                debug!(attempt, "run superseded; dropping settle re-push");
                return;
            }

            match plan.sink.set_position(&plan.position).await {
                Ok(()) => debug!(attempt, position = %plan.position, "settle re-push"),
                Err(error) => warn!(attempt, %error, "settle re-push failed"),
            }
        }
    }))
}
