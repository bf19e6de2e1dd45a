//! Multi-level queue: strict-priority bands, each an FCFS-like scheduler.
//!
//! # Arbitration
//!
//! Bands are visited `High → Normal → Low`.  Each populated band runs a
//! full tick over its own processes and queue until some band ends its
//! tick with an `executing` process.  Every band visited after that runs a
//! decay tick instead: its queue is rebuilt as usual, but its executing
//! process (if any) is sent back to `ready` and nothing is promoted.  The
//! single execution slot therefore always belongs to the highest band that
//! can use it.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;

use sched_core::ProcessId;
use sched_process::{Lookahead, ProcessMap};

use crate::tick::{tick_group, SlotRule};
use crate::{QueueSet, ReadyQueue, SchedulingPolicy, SimState};

// ── Band ──────────────────────────────────────────────────────────────────────

/// Priority partition.  Declaration order is scheduling order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Band {
    High,
    Normal,
    Low,
}

impl Band {
    /// `> 66 → High`, `> 33 → Normal`, otherwise `Low`.
    pub fn of(priority: u8) -> Band {
        match priority {
            67..=u8::MAX => Band::High,
            34..=66 => Band::Normal,
            _ => Band::Low,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::High   => "high",
            Band::Normal => "normal",
            Band::Low    => "low",
        };
        f.write_str(s)
    }
}

// ── BandQueues ────────────────────────────────────────────────────────────────

/// One ready queue per populated band.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BandQueues {
    queues: BTreeMap<Band, ReadyQueue>,
}

impl BandQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// The queue of `band`, if that band had any processes last tick.
    pub fn get(&self, band: Band) -> Option<&ReadyQueue> {
        self.queues.get(&band)
    }

    pub fn insert(&mut self, band: Band, queue: ReadyQueue) {
        self.queues.insert(band, queue);
    }

    /// `(band, queue)` pairs in scheduling order.
    pub fn iter(&self) -> impl Iterator<Item = (Band, &ReadyQueue)> + '_ {
        self.queues.iter().map(|(&b, q)| (b, q))
    }

    fn take(&mut self, band: Band) -> ReadyQueue {
        self.queues.remove(&band).unwrap_or_default()
    }
}

impl QueueSet for BandQueues {
    fn total_len(&self) -> usize {
        self.queues.values().map(ReadyQueue::len).sum()
    }

    fn is_queued(&self, id: &ProcessId) -> bool {
        self.queues.values().any(|q| q.contains(id))
    }
}

// ── Mlq ───────────────────────────────────────────────────────────────────────

/// Strict-priority multi-level queue.
///
/// Bands run FCFS by default; [`Mlq::with_round_robin_bands`] time-slices
/// within each band instead.  Cross-band arbitration is the same either way.
#[derive(Copy, Clone, Debug)]
pub struct Mlq {
    band_rule: SlotRule,
}

impl Mlq {
    pub fn new() -> Self {
        Self { band_rule: SlotRule::RunToCompletion }
    }

    pub fn with_round_robin_bands(timeout: NonZeroUsize) -> Self {
        Self { band_rule: SlotRule::TimeSlice(timeout) }
    }
}

impl Default for Mlq {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Mlq {
    type Queue = BandQueues;

    fn name(&self) -> &'static str {
        "mlq"
    }

    fn step(&self, state: SimState<BandQueues>, look: &mut Lookahead) -> SimState<BandQueues> {
        let SimState { queue: mut prev_queues, processes } = state;

        let mut groups: BTreeMap<Band, ProcessMap> = BTreeMap::new();
        for (id, process) in processes {
            groups.entry(Band::of(process.priority)).or_default().insert(id, process);
        }

        let mut queues = BandQueues::new();
        let mut next = ProcessMap::new();
        let mut slot_taken = false;

        for (band, group) in groups {
            let rule = if slot_taken { SlotRule::Decay } else { self.band_rule };
            let (queue, group) = tick_group(prev_queues.take(band), group, rule, look);
            tracing::trace!(band = %band, decayed = slot_taken, queued = queue.len(), "band tick");

            slot_taken |= group.values().any(|p| p.state().is_executing());
            queues.insert(band, queue);
            next.extend(group);
        }

        SimState { queue: queues, processes: next }
    }
}
