//! Fluent builder for constructing a [`Sim`].

use sched_core::SimConfig;
use sched_policy::{SchedulingPolicy, SimState};
use sched_process::{Process, ProcessMap};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick cap and seed
/// - `P: SchedulingPolicy`: [`Fcfs`][sched_policy::Fcfs],
///   [`RoundRobin`][sched_policy::RoundRobin] or [`Mlq`][sched_policy::Mlq]
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default            |
/// |-----------------------|--------------------|
/// | `.process(p)`         | No processes       |
/// | `.processes(iter)`    | No processes       |
/// | `.initial_queue(q)`   | Empty queue(s)     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Fcfs)
///     .processes(factory.random_batch(5))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: SchedulingPolicy> {
    config:    SimConfig,
    policy:    P,
    processes: Vec<Process>,
    queue:     Option<P::Queue>,
}

impl<P: SchedulingPolicy> SimBuilder<P> {
    pub fn new(config: SimConfig, policy: P) -> Self {
        Self { config, policy, processes: Vec::new(), queue: None }
    }

    pub fn process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    pub fn processes(mut self, processes: impl IntoIterator<Item = Process>) -> Self {
        self.processes.extend(processes);
        self
    }

    /// Start from a pre-populated queue instead of an empty one.
    ///
    /// Ids with no matching process are not an error; the first tick drops
    /// them.
    pub fn initial_queue(mut self, queue: P::Queue) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Validate the config, reject repeated ids, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut processes = ProcessMap::new();
        for process in self.processes {
            if processes.contains_key(&process.id) {
                return Err(SimError::DuplicateProcess(process.id));
            }
            processes.insert(process.id.clone(), process);
        }

        let state = SimState {
            queue: self.queue.unwrap_or_default(),
            processes,
        };
        Ok(Sim::from_state(self.config, self.policy, state))
    }
}
