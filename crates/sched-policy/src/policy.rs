//! The `SchedulingPolicy` trait, the main extension point.

use sched_process::Lookahead;

use crate::{QueueSet, SimState};

/// A scheduling policy: one pure step from a snapshot to its successor.
///
/// # Contract
///
/// - Every process in the input appears in the output with exactly one
///   history entry appended.
/// - At most one process is `executing` in the output.
/// - Ties between otherwise equal candidates are broken by ascending id.
/// - All transition lookahead goes through `look`, so repeated questions
///   about one process within the step get the same answer.
///
/// Steps are infallible.  Inconsistent input (a queued id with no process,
/// no processes at all) is absorbed rather than reported.
///
/// # Example
///
/// ```rust,ignore
/// let policy = RoundRobin::default();
/// let mut look = Lookahead::new(seed);
/// let mut state = SimState::new(processes);
/// for _ in 0..n {
///     look.begin_tick();
///     state = policy.step(state, &mut look);
/// }
/// ```
pub trait SchedulingPolicy {
    /// Queue layout carried between ticks.
    type Queue: QueueSet;

    /// Short identifier for logs and output file names.
    fn name(&self) -> &'static str;

    fn step(&self, state: SimState<Self::Queue>, look: &mut Lookahead) -> SimState<Self::Queue>;
}

impl<P: SchedulingPolicy + ?Sized> SchedulingPolicy for &P {
    type Queue = P::Queue;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn step(&self, state: SimState<Self::Queue>, look: &mut Lookahead) -> SimState<Self::Queue> {
        (**self).step(state, look)
    }
}
