//! Plain data row types written by output backends.

use sched_core::{ProcessState, Tick};
use sched_process::ProcessMap;

/// How many processes were in each state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub executing: u64,
    pub ready:     u64,
    pub pending:   u64,
    pub finished:  u64,
}

impl TickSummaryRow {
    pub fn from_processes(tick: Tick, processes: &ProcessMap) -> Self {
        let mut row = Self { tick: tick.0, ..Self::default() };
        for p in processes.values() {
            let slot = match p.state() {
                ProcessState::Executing => &mut row.executing,
                ProcessState::Ready     => &mut row.ready,
                ProcessState::Pending   => &mut row.pending,
                ProcessState::Finished  => &mut row.finished,
            };
            *slot += 1;
        }
        row
    }
}
