//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  There is no wall
//! clock: one tick is one scheduling decision, and a process's history
//! length is the number of ticks it has lived through.
//!
//! Ticks are 1-based when reported: after the driver has run `t` steps,
//! [`Tick(t)`](Tick) is the last completed tick and every history has
//! length `t`.

use std::fmt;

use crate::{SchedError, SchedResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Zero-based history index of this (1-based) tick.
    ///
    /// Returns `None` for `Tick::ZERO`, which has no history entry.
    #[inline]
    pub fn history_index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed
/// to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Hard cap on the number of ticks to run.  The driver stops earlier if
    /// every process reports `finished`.
    pub max_ticks: u64,

    /// Master RNG seed for random-walk transitions.  The same seed always
    /// produces identical histories.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_ticks: 50, seed: 42 }
    }
}

impl SimConfig {
    pub fn new(max_ticks: u64, seed: u64) -> Self {
        Self { max_ticks, seed }
    }

    /// The tick after which the driver stops unconditionally.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    pub fn validate(&self) -> SchedResult<()> {
        if self.max_ticks == 0 {
            return Err(SchedError::Config("max_ticks must be > 0".into()));
        }
        Ok(())
    }
}
