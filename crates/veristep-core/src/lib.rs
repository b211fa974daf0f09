pub mod error;
pub mod listener;
pub mod step;
pub mod timeout;

pub mod prelude {
    pub use crate::error::StepError;
    pub use crate::listener::{BufferListener, BuildListener, NullListener, TracingListener};
    pub use crate::step::{
        BuildHandle, Launcher, RunHandle, Step, StepContext, perform_legacy, perform_pipeline,
    };
    pub use crate::timeout::{Timed, compute_timeout};
}
