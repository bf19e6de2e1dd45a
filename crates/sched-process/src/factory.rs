//! Fluent construction of processes with generated ids.
//!
//! # Usage
//!
//! ```rust
//! use sched_core::SequentialIds;
//! use sched_process::ProcessFactory;
//!
//! let mut factory = ProcessFactory::new(SequentialIds::new());
//! let planned = factory.planned_str("3E 2P E").with_priority(80);
//! let randoms = factory.random_batch(3);
//!
//! assert_eq!(planned.id.as_str(), "0001");
//! assert_eq!(randoms[2].id.as_str(), "0004");
//! ```

use sched_core::{IdGenerator, ProcessId, SequentialIds};
use sched_plan::{parse_plan, Plan};

use crate::{Process, Transition};

/// Mints processes whose ids come from an owned [`IdGenerator`].
///
/// Every process starts `ready` with an empty history and priority 0; use
/// [`Process::with_priority`] on the result to change the priority.
pub struct ProcessFactory<G: IdGenerator = SequentialIds> {
    ids: G,
}

impl<G: IdGenerator> ProcessFactory<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// Next id from the generator, for callers assembling processes by hand.
    pub fn next_id(&mut self) -> ProcessId {
        self.ids.next_id()
    }

    pub fn random_walk(&mut self) -> Process {
        Process::new(self.ids.next_id(), Transition::RandomWalk)
    }

    pub fn planned(&mut self, plan: Plan) -> Process {
        Process::new(self.ids.next_id(), Transition::Planned(plan))
    }

    /// Parse `dsl` with [`parse_plan`] and build a plan-driven process.
    pub fn planned_str(&mut self, dsl: &str) -> Process {
        self.planned(parse_plan(dsl))
    }

    /// `count` random-walk processes with consecutive ids.
    pub fn random_batch(&mut self, count: usize) -> Vec<Process> {
        (0..count).map(|_| self.random_walk()).collect()
    }
}

impl Default for ProcessFactory<SequentialIds> {
    fn default() -> Self {
        Self::new(SequentialIds::new())
    }
}
