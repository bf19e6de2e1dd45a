//! The four lifecycle states of a simulated process.

use std::fmt;

/// Where a process stands at the end of a tick.
///
/// `Finished` is absorbing: once it appears in a process's history the
/// process never leaves it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProcessState {
    /// Waiting in a ready queue for the execution slot.
    #[default]
    Ready,
    /// Blocked; not eligible for the execution slot.
    Pending,
    /// Holding the execution slot.
    Executing,
    /// Done.
    Finished,
}

impl ProcessState {
    #[inline]
    pub fn is_finished(self) -> bool {
        self == ProcessState::Finished
    }

    #[inline]
    pub fn is_executing(self) -> bool {
        self == ProcessState::Executing
    }

    /// Lowercase name, as used in tables and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessState::Ready     => "ready",
            ProcessState::Pending   => "pending",
            ProcessState::Executing => "executing",
            ProcessState::Finished  => "finished",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
