//! Fixed-rate game loop
//!
//! One driver thread ticks, renders, then sleeps out the rest of the tick
//! budget. Pause and stop are cooperative: both are only observed on a tick
//! boundary, so a tick that has started always runs to completion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::consts::TARGET_TPS;

/// Something the loop can drive
pub trait Tickable {
    /// Advance one fixed step. Must not block.
    fn tick(&mut self);

    /// Present the current state
    fn render(&mut self) {}
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("target_tps must be at least 1")]
    ZeroTickRate,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("game loop thread panicked")]
    Panicked,
}

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub target_tps: u32,
    /// Stop by itself after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_tps: TARGET_TPS,
            max_ticks: None,
        }
    }
}

impl LoopConfig {
    /// Wall-clock time allotted to one tick
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_tps.max(1)
    }
}

/// Time left to sleep after a tick that took `elapsed`
pub fn sleep_budget(budget: Duration, elapsed: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}

#[derive(Debug, Default)]
struct Flags {
    paused: bool,
    stopped: bool,
}

#[derive(Debug, Default)]
struct Control {
    flags: Mutex<Flags>,
    wake: Condvar,
    ticks: AtomicU64,
}

impl Control {
    fn flags(&self) -> MutexGuard<'_, Flags> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block while paused. Returns `false` once stopped.
    fn await_tick(&self) -> bool {
        let flags = self.flags();
        let flags = self
            .wake
            .wait_while(flags, |f| f.paused && !f.stopped)
            .unwrap_or_else(PoisonError::into_inner);
        !flags.stopped
    }

    /// Sleep for `duration` unless stopped first
    fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let flags = self.flags();
        let _ = self
            .wake
            .wait_timeout_while(flags, duration, |f| !f.stopped)
            .unwrap_or_else(PoisonError::into_inner);
    }

    fn update(&self, f: impl FnOnce(&mut Flags)) {
        f(&mut self.flags());
        self.wake.notify_all();
    }
}

/// Spawns the driver thread
pub struct GameLoop;

impl GameLoop {
    pub fn spawn<T>(config: LoopConfig, driver: T) -> Result<LoopHandle<T>, LoopError>
    where
        T: Tickable + Send + 'static,
    {
        if config.target_tps == 0 {
            return Err(LoopError::ZeroTickRate);
        }

        let control = Arc::new(Control::default());
        let thread = thread::Builder::new()
            .name("game-loop".into())
            .spawn({
                let control = Arc::clone(&control);
                move || run(config, driver, &control)
            })
            .map_err(LoopError::Spawn)?;

        Ok(LoopHandle { control, thread })
    }
}

fn run<T: Tickable>(config: LoopConfig, mut driver: T, control: &Control) -> T {
    let budget = config.tick_budget();
    log::info!(
        "Game loop started at {} ticks/s ({:?} per tick)",
        config.target_tps,
        budget
    );

    while control.await_tick() {
        let started = Instant::now();

        driver.tick();
        driver.render();

        let ticks = control.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        let elapsed = started.elapsed();
        let remaining = sleep_budget(budget, elapsed);
        if remaining.is_zero() {
            log::warn!("Tick {ticks} overran its budget: {elapsed:?} > {budget:?}");
        }
        control.sleep(remaining);
    }

    log::info!(
        "Game loop stopped after {} ticks",
        control.ticks.load(Ordering::Relaxed)
    );
    driver
}

/// Control side of a running loop
pub struct LoopHandle<T> {
    control: Arc<Control>,
    thread: JoinHandle<T>,
}

impl<T> LoopHandle<T> {
    /// Suspend before the next tick
    pub fn pause(&self) {
        self.control.update(|f| f.paused = true);
        log::debug!("Game loop paused");
    }

    /// Continue from the next tick boundary
    pub fn resume(&self) {
        self.control.update(|f| f.paused = false);
        log::debug!("Game loop resumed");
    }

    /// Finish the current tick and exit
    pub fn stop(&self) {
        self.control.update(|f| f.stopped = true);
    }

    pub fn is_paused(&self) -> bool {
        self.control.flags().paused
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.control.ticks.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to exit and take back the driver
    pub fn join(self) -> Result<T, LoopError> {
        self.thread.join().map_err(|_| LoopError::Panicked)
    }

    /// Stop the loop and take back the driver
    pub fn shutdown(self) -> Result<T, LoopError> {
        self.stop();
        self.join()
    }
}
