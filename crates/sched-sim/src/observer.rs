//! Simulation observer trait for progress reporting and data collection.

use sched_core::Tick;
use sched_process::ProcessMap;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, processes: &ProcessMap) {
///         let running = processes.values().find(|p| p.state().is_executing());
///         println!("{tick}: {:?}", running.map(|p| &p.id));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the policy step of `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the policy step of `tick`, with the successor processes.
    /// Every history has length `tick.0` at this point.
    fn on_tick_end(&mut self, _tick: Tick, _processes: &ProcessMap) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops, either at the
    /// tick cap or because every process finished.
    fn on_sim_end(&mut self, _final_tick: Tick, _all_finished: bool) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
