//! Plan types: `PlanPhase`, `PlanStep`, and `Plan`.
//!
//! # Replay
//!
//! Plans are never mutated while a simulation runs.  Instead the proposed
//! next state is derived from the process's history on every evaluation by
//! walking a private cursor over the steps:
//!
//! - `ready` entries are skipped (time spent queued is not plan time).
//! - An entry matching the head step's phase consumes one tick of it.
//! - An exhausted head (remaining ≤ 0) is dropped lazily, when the first
//!   entry that does not match it arrives; that entry is then tried against
//!   the new head.  Running off the end means the process is finished.
//! - Entries that match neither are ignored.  This happens when a scheduler
//!   promotes a `ready` process whose plan is currently pending.
//!
//! After the walk one more exhausted head is dropped, and the next state is
//! the head's phase if it still has ticks left, otherwise `finished`.

use sched_core::ProcessState;

// ── PlanPhase ─────────────────────────────────────────────────────────────────

/// The two states a plan can ask for.  `ready` and `finished` are decided by
/// the scheduler, never by a plan.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlanPhase {
    Pending,
    Executing,
}

impl PlanPhase {
    #[inline]
    pub fn state(self) -> ProcessState {
        match self {
            PlanPhase::Pending   => ProcessState::Pending,
            PlanPhase::Executing => ProcessState::Executing,
        }
    }
}

// ── PlanStep ──────────────────────────────────────────────────────────────────

/// One `(phase, duration)` entry of a plan.
///
/// `duration` is in ticks.  The DSL can produce a zero duration (`"0E"`);
/// such a step is kept but is exhausted before it consumes anything.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanStep {
    pub phase:    PlanPhase,
    pub duration: u32,
}

impl PlanStep {
    pub fn executing(duration: u32) -> Self {
        Self { phase: PlanPhase::Executing, duration }
    }

    pub fn pending(duration: u32) -> Self {
        Self { phase: PlanPhase::Pending, duration }
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// An ordered, finite sequence of steps governing one process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    pub fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    /// A plan with no steps.  A process following it is finished on its
    /// very first evaluation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Sum of all step durations.
    pub fn total_duration(&self) -> u64 {
        self.steps.iter().map(|s| s.duration as u64).sum()
    }

    /// The state this plan proposes next, given everything that has
    /// happened to the process so far.
    ///
    /// Pure: the same history always yields the same answer.  Once
    /// `finished` appears in `history` the answer is `finished` forever.
    pub fn next_state(&self, history: &[ProcessState]) -> ProcessState {
        if self.steps.is_empty() || history.contains(&ProcessState::Finished) {
            return ProcessState::Finished;
        }

        let mut cursor = Cursor::new(&self.steps);
        for &entry in history {
            if entry == ProcessState::Ready {
                continue;
            }
            if !cursor.consume(entry) {
                return ProcessState::Finished;
            }
        }
        cursor.settle()
    }
}

impl FromIterator<PlanStep> for Plan {
    fn from_iter<I: IntoIterator<Item = PlanStep>>(iter: I) -> Self {
        Self { steps: iter.into_iter().collect() }
    }
}

// ── Private replay cursor ─────────────────────────────────────────────────────

/// Walks a borrowed step list without copying it.  `remaining` is signed:
/// entries that keep matching an exhausted head drive it below zero.
struct Cursor<'a> {
    steps:     &'a [PlanStep],
    head:      usize,
    remaining: i64,
}

impl<'a> Cursor<'a> {
    fn new(steps: &'a [PlanStep]) -> Self {
        Self { steps, head: 0, remaining: steps[0].duration as i64 }
    }

    #[inline]
    fn head_state(&self) -> ProcessState {
        self.steps[self.head].phase.state()
    }

    /// Drop the head step.  Returns `false` if none are left.
    fn advance(&mut self) -> bool {
        self.head += 1;
        match self.steps.get(self.head) {
            Some(step) => {
                self.remaining = step.duration as i64;
                true
            }
            None => false,
        }
    }

    /// Feed one non-ready history entry.  Returns `false` once the plan has
    /// run out of steps.
    fn consume(&mut self, entry: ProcessState) -> bool {
        if entry == self.head_state() {
            self.remaining -= 1;
            return true;
        }
        if self.remaining <= 0 {
            if !self.advance() {
                return false;
            }
            if entry == self.head_state() {
                self.remaining -= 1;
            }
        }
        true
    }

    fn settle(mut self) -> ProcessState {
        if self.remaining <= 0 && !self.advance() {
            return ProcessState::Finished;
        }
        if self.remaining > 0 {
            self.head_state()
        } else {
            ProcessState::Finished
        }
    }
}
