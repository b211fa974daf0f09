mod config;
pub use config::{JobSettings, StepConfig, WaitConfig};

mod error;
pub use error::ModelError;

mod timeout;
pub use timeout::{TimeoutMs, TimeoutUnit};
