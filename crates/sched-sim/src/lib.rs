//! `sched-sim`: the tick driver for the CPU-scheduling simulator.
//!
//! # Tick loop
//!
//! ```text
//! while tick < config.max_ticks:
//!   ① Lookahead, clear last tick's memoised random-walk draws
//!   ② Step     , state = policy.step(state, &mut lookahead)
//!   ③ Observe  , hand the new process map to the observer
//!   ④ Halt     , stop early once every process is finished
//! ```
//!
//! The result of a run is a [`HistoryTable`]: one row per tick, one column
//! per process id in ascending order.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sched_core::SimConfig;
//! use sched_policy::RoundRobin;
//! use sched_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), RoundRobin::default())
//!     .processes(processes)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! let table = sim.history_table();
//! ```

pub mod builder;
pub mod error;
pub mod execute;
pub mod observer;
pub mod sim;
pub mod table;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use execute::execute;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use table::HistoryTable;
