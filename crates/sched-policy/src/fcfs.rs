//! First-come-first-served.

use sched_process::Lookahead;

use crate::tick::{tick_group, SlotRule};
use crate::{ReadyQueue, SchedulingPolicy, SimState};

/// Non-preemptive single-queue scheduling.
///
/// A process that gets the slot keeps it until its own transition leaves
/// `executing`; only then is the queue head promoted.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    type Queue = ReadyQueue;

    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn step(&self, state: SimState<ReadyQueue>, look: &mut Lookahead) -> SimState<ReadyQueue> {
        let (queue, processes) = tick_group(state.queue, state.processes, SlotRule::RunToCompletion, look);
        SimState { queue, processes }
    }
}
