//! Transition variants: how a process proposes its next state.

use sched_core::{ProcessRng, ProcessState};
use sched_plan::Plan;

/// The rule a process follows to propose its next state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Weighted random choice among the legal successors (see [`random_walk`]).
    RandomWalk,
    /// Deterministic replay of a fixed plan (see [`Plan::next_state`]).
    Planned(Plan),
}

impl Transition {
    /// `true` if proposals never consume randomness.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Transition::Planned(_))
    }

    /// The single dispatch point: `(variant, state, history) → state`.
    ///
    /// `rng` is touched only by random-walk processes, and only when more
    /// than one successor is legal.  Callers inside a tick must go through
    /// [`Lookahead`](crate::Lookahead) instead, which memoises the draw.
    pub fn propose(
        &self,
        state:   ProcessState,
        history: &[ProcessState],
        rng:     &mut ProcessRng,
    ) -> ProcessState {
        match self {
            Transition::RandomWalk => random_walk(state, history, rng),
            Transition::Planned(plan) => plan.next_state(history),
        }
    }
}

const FROM_PENDING:   [ProcessState; 3] = [
    ProcessState::Pending,
    ProcessState::Pending,
    ProcessState::Executing,
];
const FROM_EXECUTING: [ProcessState; 4] = [
    ProcessState::Pending,
    ProcessState::Pending,
    ProcessState::Executing,
    ProcessState::Finished,
];

/// Random-walk successor of `state`.
///
/// | From        | To (uniform over entries)                  |
/// |-------------|--------------------------------------------|
/// | `ready`     | `executing`                                |
/// | `pending`   | `pending`, `pending`, `executing`          |
/// | `executing` | `pending`, `pending`, `executing`, `finished` |
/// | `finished`  | `finished`                                 |
///
/// A history containing `finished` forces `finished` whatever `state` says.
pub fn random_walk(
    state:   ProcessState,
    history: &[ProcessState],
    rng:     &mut ProcessRng,
) -> ProcessState {
    if state.is_finished() || history.contains(&ProcessState::Finished) {
        return ProcessState::Finished;
    }
    let candidates: &[ProcessState] = match state {
        ProcessState::Ready     => return ProcessState::Executing,
        ProcessState::Pending   => &FROM_PENDING,
        ProcessState::Executing => &FROM_EXECUTING,
        ProcessState::Finished  => return ProcessState::Finished,
    };
    rng.choose(candidates).copied().unwrap_or(ProcessState::Finished)
}
