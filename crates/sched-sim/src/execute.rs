//! One-call entry point: policy, initial snapshot and tick budget in, table out.

use sched_core::SimConfig;
use sched_policy::{SchedulingPolicy, SimState};

use crate::{HistoryTable, NoopObserver, Sim};

/// Apply `policy` to `initial` up to `config.max_ticks` times, stopping
/// early once every process is finished, and return the aligned table.
///
/// No validation happens here: a zero tick cap returns the table of the
/// initial histories, and duplicate ids cannot occur in a [`SimState`].
/// Use [`SimBuilder`](crate::SimBuilder) for checked construction.
pub fn execute<P: SchedulingPolicy>(
    policy:  P,
    initial: SimState<P::Queue>,
    config:  &SimConfig,
) -> HistoryTable {
    let mut sim = Sim::from_state(config.clone(), policy, initial);
    sim.run(&mut NoopObserver);
    sim.history_table()
}
