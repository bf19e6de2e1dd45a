//! `sched-plan`: deterministic process plans and the plan DSL.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`plan`]   | `PlanPhase`, `PlanStep`, `Plan`, history replay  |
//! | [`parser`] | `parse_plan`, `parse_plan_tokens`                |
//!
//! # Replay model (summary)
//!
//! A plan is an ordered list of `(phase, duration)` steps.  The proposed
//! next state of a plan-driven process is recomputed every tick from its
//! full history:
//!
//! ```text
//! cursor = fresh copy of the plan
//! for each non-ready entry in history:
//!     consume one tick of the head step if the entry matches its phase
//! next_state = head phase, or finished once the plan is exhausted
//! ```

pub mod parser;
pub mod plan;


pub use parser::{parse_plan, parse_plan_tokens};
pub use plan::{Plan, PlanPhase, PlanStep};
