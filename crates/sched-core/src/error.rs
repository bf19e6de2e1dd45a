//! Framework error type.
//!
//! Scheduling itself never fails.  The only core failure is a bad
//! [`SimConfig`](crate::SimConfig); loading and output errors belong to the
//! crates that do I/O, which wrap `SchedError` where they need it.

use thiserror::Error;

/// The top-level error type for `sched-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SchedError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sched-*` crates.
pub type SchedResult<T> = Result<T, SchedError>;
