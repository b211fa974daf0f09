use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown timeout unit: {0}")]
    UnknownTimeoutUnit(String),

    #[error("malformed wait time: {0}")]
    MalformedWaitTime(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
