//! `sched-policy`: scheduling policies and the per-tick simulation state.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`state`]       | `SimState<Q>`, `ReadyQueue`, `QueueSet`                    |
//! | [`policy`]      | `SchedulingPolicy` trait                                   |
//! | [`fcfs`]        | `Fcfs`, non-preemptive, single queue                       |
//! | [`round_robin`] | `RoundRobin`, FCFS plus a time-slice preemption rule       |
//! | [`mlq`]         | `Mlq`, `Band`, `BandQueues`, strict-priority bands         |
//!
//! # One tick
//!
//! Every policy is a function `SimState → SimState`.  The previous snapshot
//! is consumed and a fresh one is assembled; each process is moved into its
//! successor with exactly one history entry appended.  At most one process
//! is `executing` at the end of any tick, under every policy.
//!
//! The FCFS-family tick shared by all three policies is:
//!
//! ```text
//! ① find the executing process, if any
//! ② rebuild the queue: keep queued ids that still exist, then admit (in
//!    ascending id order) every other process that is ready or whose
//!    lookahead is executing
//! ③ settle the executing process (policy rule decides its next state)
//! ④ if the slot is free, promote the queue head to executing
//! ⑤ queued processes become ready; everything else re-emits its state
//! ```

pub mod fcfs;
pub mod mlq;
pub mod policy;
pub mod round_robin;
pub mod state;

mod tick;


pub use fcfs::Fcfs;
pub use mlq::{Band, BandQueues, Mlq};
pub use policy::SchedulingPolicy;
pub use round_robin::RoundRobin;
pub use state::{QueueSet, ReadyQueue, SimState};
