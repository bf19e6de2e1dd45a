use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("process parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProcessResult<T> = Result<T, ProcessError>;
