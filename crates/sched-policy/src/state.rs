//! The per-tick simulation snapshot and its ready queues.

use std::collections::VecDeque;

use sched_core::{ProcessId, ProcessState};
use sched_process::{Process, ProcessMap};

// ── ReadyQueue ────────────────────────────────────────────────────────────────

/// FIFO of process ids awaiting the execution slot.
///
/// Holds ids only; the processes themselves live in the snapshot's
/// [`ProcessMap`].  An id with no matching process is dropped the next time
/// the queue is rebuilt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    ids: VecDeque<ProcessId>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ProcessId) -> bool {
        self.ids.contains(id)
    }

    pub fn front(&self) -> Option<&ProcessId> {
        self.ids.front()
    }

    pub fn push_back(&mut self, id: ProcessId) {
        self.ids.push_back(id);
    }

    pub fn pop_front(&mut self) -> Option<ProcessId> {
        self.ids.pop_front()
    }

    /// Ids in queue order, head first.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessId> + '_ {
        self.ids.iter()
    }
}

impl<I: Into<ProcessId>> FromIterator<I> for ReadyQueue {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self { ids: iter.into_iter().map(Into::into).collect() }
    }
}

// ── QueueSet ──────────────────────────────────────────────────────────────────

/// The queue side of a [`SimState`]: one ready queue, or one per band.
pub trait QueueSet: Clone + Default + std::fmt::Debug {
    /// Total ids queued across all queues.
    fn total_len(&self) -> usize;

    /// `true` if `id` is queued anywhere.
    fn is_queued(&self, id: &ProcessId) -> bool;
}

impl QueueSet for ReadyQueue {
    fn total_len(&self) -> usize {
        self.len()
    }

    fn is_queued(&self, id: &ProcessId) -> bool {
        self.contains(id)
    }
}

// ── SimState ──────────────────────────────────────────────────────────────────

/// One immutable snapshot: queue(s) plus every process.
///
/// Policies take a snapshot by value and return its successor, so no
/// snapshot is ever observed half-updated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimState<Q> {
    pub queue:     Q,
    pub processes: ProcessMap,
}

impl<Q: Default> SimState<Q> {
    /// Initial snapshot with empty queue(s).
    ///
    /// Ids must be unique; a repeated id replaces the earlier process.
    pub fn new(processes: impl IntoIterator<Item = Process>) -> Self {
        Self {
            queue:     Q::default(),
            processes: processes.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

impl<Q> SimState<Q> {
    pub fn with_queue(mut self, queue: Q) -> Self {
        self.queue = queue;
        self
    }

    pub fn process(&self, id: &ProcessId) -> Option<&Process> {
        self.processes.get(id)
    }

    /// The first executing process in id order.
    pub fn executing(&self) -> Option<&Process> {
        self.processes.values().find(|p| p.state().is_executing())
    }

    /// Number of processes currently in `state`.
    pub fn count(&self, state: ProcessState) -> usize {
        self.processes.values().filter(|p| p.state() == state).count()
    }

    /// `true` when every process is finished (vacuously so for none).
    pub fn all_finished(&self) -> bool {
        self.processes.values().all(Process::is_finished)
    }
}
