//! `sched-core`: foundational types for the CPU-scheduling simulator.
//!
//! This crate is a dependency of every other `sched-*` crate.  It has no
//! `sched-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ProcessId`, `IdGenerator`, `SequentialIds`, `RandomIds` |
//! | [`state`]   | `ProcessState`                                        |
//! | [`time`]    | `Tick`, `SimConfig`                                   |
//! | [`rng`]     | `ProcessRng` (per-process), `SimRng` (global)         |
//! | [`error`]   | `SchedError`, `SchedResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SchedError, SchedResult};
pub use ids::{IdGenerator, ProcessId, RandomIds, SequentialIds};
pub use rng::{ProcessRng, SimRng};
pub use state::ProcessState;
pub use time::{SimConfig, Tick};
