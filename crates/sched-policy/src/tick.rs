//! The FCFS-family tick shared by every policy.
//!
//! FCFS, round-robin and each band of the multi-level queue differ only in
//! what happens to the process already holding the slot.  That difference
//! is a [`SlotRule`]; everything else (queue rebuild, promotion, re-emission)
//! is [`tick_group`].

use std::num::NonZeroUsize;

use sched_core::{ProcessId, ProcessState};
use sched_process::{Lookahead, Process, ProcessMap};

use crate::ReadyQueue;

/// What happens to the executing process this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SlotRule {
    /// Keep running until its own transition leaves `executing`.
    RunToCompletion,
    /// As `RunToCompletion`, but forced back to `ready` after `timeout`
    /// consecutive executing ticks when someone is waiting.
    TimeSlice(NonZeroUsize),
    /// A higher band holds the slot: never keep running, never promote.
    Decay,
}

impl SlotRule {
    /// Next state of the executing process, given its lookahead proposal.
    fn settle(self, current: &Process, proposed: ProcessState, queue: &ReadyQueue) -> ProcessState {
        if proposed != ProcessState::Executing {
            return proposed;
        }
        match self {
            SlotRule::RunToCompletion => ProcessState::Executing,
            SlotRule::TimeSlice(timeout) => {
                let expired = !queue.is_empty()
                    && current.trailing_run(ProcessState::Executing) >= timeout.get();
                if expired { ProcessState::Ready } else { ProcessState::Executing }
            }
            SlotRule::Decay => ProcessState::Ready,
        }
    }

    #[inline]
    fn promotes(self) -> bool {
        !matches!(self, SlotRule::Decay)
    }
}

/// Run one tick over `processes` with `prev` as the incoming queue.
///
/// Consumes both and returns the successor queue and processes.
pub(crate) fn tick_group(
    prev:          ReadyQueue,
    mut processes: ProcessMap,
    rule:          SlotRule,
    look:          &mut Lookahead,
) -> (ReadyQueue, ProcessMap) {
    let executing: Option<ProcessId> = processes
        .values()
        .find(|p| p.state().is_executing())
        .map(|p| p.id.clone());

    let mut queue = rebuild_queue(&prev, &processes, executing.as_ref(), look);
    let mut next = ProcessMap::new();

    // ── Settle the current occupant ───────────────────────────────────────
    let mut slot_free = true;
    if let Some(current) = executing.and_then(|id| processes.remove(&id)) {
        let proposed = look.next_state(&current);
        let settled = rule.settle(&current, proposed, &queue);
        slot_free = settled != ProcessState::Executing;
        next.insert(current.id.clone(), current.advance(settled));
    }

    // ── Promote the queue head ────────────────────────────────────────────
    if slot_free && rule.promotes() {
        if let Some(head) = queue.front().and_then(|id| processes.remove(id)) {
            queue.pop_front();
            next.insert(head.id.clone(), head.advance(ProcessState::Executing));
        }
    }

    // ── Everyone else ─────────────────────────────────────────────────────
    for (id, process) in processes {
        let successor = if queue.contains(&id) {
            process.advance(ProcessState::Ready)
        } else {
            process.hold()
        };
        next.insert(id, successor);
    }

    (queue, next)
}

/// Carry over still-valid queued ids, then admit newcomers in id order.
///
/// A newcomer is any non-executing process not already queued that is
/// `ready`, or whose lookahead says `executing` (a pending process about to
/// become runnable joins one tick early).
fn rebuild_queue(
    prev:      &ReadyQueue,
    processes: &ProcessMap,
    executing: Option<&ProcessId>,
    look:      &mut Lookahead,
) -> ReadyQueue {
    let mut queue = ReadyQueue::new();

    for id in prev.iter() {
        if Some(id) == executing {
            continue;
        }
        if processes.contains_key(id) {
            queue.push_back(id.clone());
        } else {
            tracing::warn!(id = %id, "dropping queued id with no matching process");
        }
    }

    for process in processes.values() {
        if Some(&process.id) == executing || prev.contains(&process.id) {
            continue;
        }
        if process.state() == ProcessState::Ready
            || look.next_state(process) == ProcessState::Executing
        {
            queue.push_back(process.id.clone());
        }
    }

    queue
}
