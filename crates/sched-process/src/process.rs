//! The `Process` entity.

use std::collections::BTreeMap;

use sched_core::{ProcessId, ProcessState};

use crate::Transition;

/// Every process of one simulation, keyed (and therefore iterated) by id.
///
/// Iteration order is ascending id, which is the tie-break order the
/// schedulers need; nothing depends on insertion order.
pub type ProcessMap = BTreeMap<ProcessId, Process>;

/// A simulated unit of work.
///
/// A process is plain data: its transition rule is a tagged variant rather
/// than a stored closure, so processes can be cloned, compared and (with
/// the `serde` feature) serialized.
///
/// `history` is append-only and exclusively owned.  Its length is the
/// authoritative tick counter for the process: one entry per tick the
/// process has lived through, including ticks where nothing changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Process {
    pub id:         ProcessId,
    pub transition: Transition,
    /// Static priority in `[0, 100]`.  Only the multi-level queue reads it.
    pub priority:   u8,
    state:          ProcessState,
    history:        Vec<ProcessState>,
}

impl Process {
    /// A fresh process: `ready`, empty history, priority 0.
    pub fn new(id: impl Into<ProcessId>, transition: Transition) -> Self {
        Self {
            id: id.into(),
            transition,
            priority: 0,
            state: ProcessState::Ready,
            history: Vec::new(),
        }
    }

    /// Rebuild a process from a recorded history.  The current state is the
    /// last history entry, or `ready` if the history is empty.
    pub fn resume(
        id:         impl Into<ProcessId>,
        transition: Transition,
        history:    Vec<ProcessState>,
    ) -> Self {
        let state = history.last().copied().unwrap_or_default();
        Self { id: id.into(), transition, priority: 0, state, history }
    }

    /// Set the priority, clamped to 100.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.min(100);
        self
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn history(&self) -> &[ProcessState] {
        &self.history
    }

    /// Number of ticks this process has lived through.
    #[inline]
    pub fn ticks(&self) -> usize {
        self.history.len()
    }

    /// `true` once `finished` is the current state.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Length of the run of identical states at the end of the history.
    pub fn trailing_run(&self, state: ProcessState) -> usize {
        self.history.iter().rev().take_while(|&&s| s == state).count()
    }

    /// Consume this process and return its successor for the next tick,
    /// with `next` as both the new state and the new history entry.
    #[must_use]
    pub fn advance(mut self, next: ProcessState) -> Self {
        self.state = next;
        self.history.push(next);
        self
    }

    /// Successor that keeps the current state, re-emitting it to history.
    #[must_use]
    pub fn hold(self) -> Self {
        let current = self.state;
        self.advance(current)
    }
}
