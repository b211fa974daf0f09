mod settings;
pub use settings::JobSettings;

mod step;
pub use step::StepConfig;

mod wait;
pub use wait::WaitConfig;
