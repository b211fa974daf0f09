use thiserror::Error;

use veristep_model::ModelError;

/// Failure surfaced by a step invocation.
#[derive(Debug, Error)]
pub enum StepError {
    /// Invalid step or job configuration; fatal to the invocation.
    #[error("configuration error: {0}")]
    Config(#[from] ModelError),

    /// Host-driven interruption of the running build.
    ///
    /// Must travel out of the invocation unmodified so the host keeps its
    /// ability to cancel a build.
    #[error("step interrupted by host")]
    Interrupted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Step-internal failure reported as an error rather than a `false`
    /// outcome.
    #[error("step failed: {0}")]
    Failed(String),
}
