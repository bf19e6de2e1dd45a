//! The `Sim` struct and its tick loop.

use sched_core::{SimConfig, Tick};
use sched_policy::{QueueSet, SchedulingPolicy, SimState};
use sched_process::Lookahead;

use crate::{HistoryTable, SimObserver};

/// The main simulation runner.
///
/// `Sim<P>` owns the current snapshot and drives the tick loop:
///
/// 1. **Lookahead**: clear the draw cache, so it only ever holds draws made
///    for the current tick.
/// 2. **Step**: the policy consumes the snapshot and returns its successor.
/// 3. **Observe**: the observer sees the successor's processes.
/// 4. **Halt check**: the loop ends once every process is finished.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: SchedulingPolicy> {
    /// Tick cap and seed.
    pub config: SimConfig,

    /// The scheduling policy applied every tick.
    pub policy: P,

    state:    SimState<P::Queue>,
    look:     Lookahead,
    tick:     Tick,
    finished: bool,
}

impl<P: SchedulingPolicy> Sim<P> {
    pub(crate) fn from_state(config: SimConfig, policy: P, state: SimState<P::Queue>) -> Self {
        Self {
            look: Lookahead::new(config.seed),
            config,
            policy,
            state,
            tick: Tick::ZERO,
            finished: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.max_ticks` or until every process is finished,
    /// whichever comes first.
    ///
    /// At least one tick runs on a fresh `Sim`, even if every process
    /// starts out finished (or there are none).  Calling `run` again after
    /// the halt does nothing but repeat `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while !self.finished && self.tick < self.config.end_tick() {
            self.process_tick(observer);
        }

        tracing::info!(
            policy       = self.policy.name(),
            ticks        = self.tick.0,
            all_finished = self.finished,
            cache_hits   = self.look.cache().hits(),
            cache_misses = self.look.cache().misses(),
            "simulation finished",
        );
        observer.on_sim_end(self.tick, self.finished);
    }

    /// Run at most `n` more ticks, ignoring `max_ticks` but still stopping
    /// once every process is finished.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.finished {
                break;
            }
            self.process_tick(observer);
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &SimState<P::Queue> {
        &self.state
    }

    /// The last completed tick; `Tick::ZERO` before the first step.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// `true` once a tick has ended with every process finished.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn lookahead(&self) -> &Lookahead {
        &self.look
    }

    /// Aligned table of every history so far.
    pub fn history_table(&self) -> HistoryTable {
        HistoryTable::from_processes(&self.state.processes)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick.next();
        observer.on_tick_start(now);

        self.look.begin_tick();
        let state = std::mem::take(&mut self.state);
        self.state = self.policy.step(state, &mut self.look);
        self.tick = now;
        self.finished = self.state.all_finished();

        tracing::debug!(
            tick      = now.0,
            executing = self.state.executing().map(|p| p.id.as_str()),
            queued    = self.state.queue.total_len(),
            "tick",
        );
        observer.on_tick_end(now, &self.state.processes);
    }
}
