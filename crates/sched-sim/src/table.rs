//! The aligned history table: the externally consumed result of a run.

use std::collections::BTreeMap;

use sched_core::{ProcessId, ProcessState, Tick};
use sched_process::ProcessMap;

/// Per-tick states of every process, columns in ascending id order.
///
/// Built from a snapshot's process map after a run.  Rows are 1-based
/// [`Tick`]s: row `Tick(t)` holds each process's history entry at index
/// `t - 1`.  Processes advance in lockstep, so every column normally has
/// [`len`](Self::len) entries; a process resumed with a shorter history
/// simply has no cell for the ticks it did not live through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryTable {
    columns: BTreeMap<ProcessId, Vec<ProcessState>>,
    len:     usize,
}

impl HistoryTable {
    pub fn from_processes(processes: &ProcessMap) -> Self {
        let columns: BTreeMap<ProcessId, Vec<ProcessState>> = processes
            .iter()
            .map(|(id, p)| (id.clone(), p.history().to_vec()))
            .collect();
        let len = columns.values().map(Vec::len).max().unwrap_or(0);
        Self { columns, len }
    }

    /// Number of rows (ticks).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Column ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = &ProcessId> + '_ {
        self.columns.keys()
    }

    pub fn cell(&self, tick: Tick, id: &ProcessId) -> Option<ProcessState> {
        let index = tick.history_index()?;
        self.columns.get(id)?.get(index).copied()
    }

    /// The row for `tick`, keyed by id.  Empty for ticks outside the table.
    pub fn row(&self, tick: Tick) -> BTreeMap<&ProcessId, ProcessState> {
        let Some(index) = tick.history_index() else {
            return BTreeMap::new();
        };
        self.columns
            .iter()
            .filter_map(|(id, history)| history.get(index).map(|&s| (id, s)))
            .collect()
    }

    /// Full history of one process.
    pub fn column(&self, id: &ProcessId) -> Option<&[ProcessState]> {
        self.columns.get(id).map(Vec::as_slice)
    }

    /// `(tick, row)` pairs from `Tick(1)` to `Tick(len)`.
    pub fn rows(&self) -> impl Iterator<Item = (Tick, BTreeMap<&ProcessId, ProcessState>)> + '_ {
        (1..=self.len as u64).map(move |t| (Tick(t), self.row(Tick(t))))
    }
}
