//! `Lookahead`: the per-tick view of "what will this process do next?".
//!
//! # Why a cache
//!
//! A random-walk proposal is a draw from the process's RNG.  The first draw
//! for a given `(id, state, history)` is recorded in a [`DrawCache`] and any
//! later request for the same key in the same tick reads it back, so a
//! policy may ask about a process more than once without consuming extra
//! draws.  The built-in policies ask about each process at most once per
//! tick, so their runs only ever miss.
//!
//! The driver calls [`Lookahead::begin_tick`] between ticks.  Histories grow
//! every tick, so a stale entry could never be hit anyway; clearing only
//! bounds memory.
//!
//! Plan-driven proposals are pure replays and bypass the cache.

use std::collections::HashMap;

use sched_core::{ProcessId, ProcessRng, ProcessState};

use crate::{Process, Transition};

#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = HashMap<K, V>;
#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;

/// Exact identity of one draw: the process and the snapshot it was drawn for.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct DrawKey {
    id:      ProcessId,
    state:   ProcessState,
    history: Vec<ProcessState>,
}

// ── DrawCache ─────────────────────────────────────────────────────────────────

/// Memoised random-walk draws for the current tick.
#[derive(Default, Debug)]
pub struct DrawCache {
    entries: Map<DrawKey, ProcessState>,
    hits:    u64,
    misses:  u64,
}

impl DrawCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws recorded since the last clear.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lifetime count of requests answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lifetime count of requests that needed a fresh draw.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

// ── Lookahead ─────────────────────────────────────────────────────────────────

/// Owns the per-process RNGs and the per-tick draw cache.
///
/// RNGs are created lazily on a process's first draw, seeded from
/// `(seed, id)`, so creation order has no effect on the draws.
pub struct Lookahead {
    seed:  u64,
    rngs:  HashMap<ProcessId, ProcessRng>,
    cache: DrawCache,
}

impl Lookahead {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rngs:  HashMap::new(),
            cache: DrawCache::new(),
        }
    }

    /// Forget the previous tick's draws.
    pub fn begin_tick(&mut self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &DrawCache {
        &self.cache
    }

    /// The state `process` proposes next, consistent for the whole tick.
    pub fn next_state(&mut self, process: &Process) -> ProcessState {
        match &process.transition {
            Transition::Planned(plan) => plan.next_state(process.history()),
            Transition::RandomWalk => self.draw(process),
        }
    }

    fn draw(&mut self, process: &Process) -> ProcessState {
        let key = DrawKey {
            id:      process.id.clone(),
            state:   process.state(),
            history: process.history().to_vec(),
        };
        if let Some(&cached) = self.cache.entries.get(&key) {
            self.cache.hits += 1;
            return cached;
        }

        let seed = self.seed;
        let rng = self
            .rngs
            .entry(process.id.clone())
            .or_insert_with(|| ProcessRng::new(seed, &process.id));
        let drawn = process.transition.propose(process.state(), process.history(), rng);

        self.cache.misses += 1;
        self.cache.entries.insert(key, drawn);
        drawn
    }
}
