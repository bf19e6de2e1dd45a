use sched_core::{ProcessId, SchedError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("process id {0} appears more than once")]
    DuplicateProcess(ProcessId),

    #[error(transparent)]
    Core(#[from] SchedError),
}

pub type SimResult<T> = Result<T, SimError>;
