//! Round-robin: FCFS with a fixed time slice.

use std::num::NonZeroUsize;

use sched_process::Lookahead;

use crate::tick::{tick_group, SlotRule};
use crate::{ReadyQueue, SchedulingPolicy, SimState};

/// Ticks a process may execute uninterrupted before it can be preempted.
pub const DEFAULT_TIMEOUT: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Round-robin scheduling.
///
/// The executing process is forced back to `ready` when all of these hold:
///
/// - its own transition would keep it executing,
/// - the queue is non-empty after this tick's admissions,
/// - its last `timeout` history entries are all `executing`.
///
/// A preempted process is not queued on the tick it is preempted; being
/// `ready`, it is admitted to the back of the queue on the next tick.
#[derive(Copy, Clone, Debug)]
pub struct RoundRobin {
    timeout: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(timeout: NonZeroUsize) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> NonZeroUsize {
        self.timeout
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SchedulingPolicy for RoundRobin {
    type Queue = ReadyQueue;

    fn name(&self) -> &'static str {
        "rr"
    }

    fn step(&self, state: SimState<ReadyQueue>, look: &mut Lookahead) -> SimState<ReadyQueue> {
        let rule = SlotRule::TimeSlice(self.timeout);
        let (queue, processes) = tick_group(state.queue, state.processes, rule, look);
        SimState { queue, processes }
    }
}
