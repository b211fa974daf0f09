//! Build-step abstraction and the two host invocation conventions.
//!
//! A step implements [`Step::execute`] once; the host calls it through
//! either [`perform_pipeline`] (workflow jobs, no return value, failures
//! propagate as errors) or [`perform_legacy`] (classic jobs, boolean
//! outcome). Both adapters build the same [`StepContext`] and invoke the
//! step exactly once.
mod context;
pub use context::{BuildHandle, Launcher, RunHandle, StepContext};

use std::path::Path;

use tracing::trace;

use veristep_model::StepConfig;

use crate::error::StepError;
use crate::listener::BuildListener;

/// A unit of work configured into a CI job.
///
/// Implementations hold their own configuration, at minimum the shared
/// [`StepConfig`], and do the actual work in [`Step::execute`]. The
/// boolean outcome is the legacy convention's success indicator; the
/// pipeline convention ignores it and reacts to errors only.
pub trait Step: Send + Sync {
    /// Shared endpoint/verbosity configuration carried by every step.
    fn config(&self) -> &StepConfig;

    /// Run the step's work against the given invocation context.
    ///
    /// Called exactly once per host invocation, on the host's thread.
    /// Interruption arrives as [`StepError::Interrupted`] and must be
    /// returned, not swallowed.
    fn execute(&self, ctx: &StepContext<'_>) -> Result<bool, StepError>;
}

/// Invoke a step under the pipeline/workflow convention.
///
/// Constructs the invocation context and calls [`Step::execute`] once.
/// The boolean outcome is discarded on this path; failures are signaled
/// by the returned error alone, and interruption propagates unchanged.
pub fn perform_pipeline(
    step: &dyn Step,
    run: &RunHandle,
    workspace: &Path,
    launcher: &Launcher,
    listener: &dyn BuildListener,
) -> Result<(), StepError> {
    trace!(run = %run, workspace = %workspace.display(), "pipeline step invocation");
    let ctx = StepContext::new(run, workspace, launcher, listener);
    step.execute(&ctx)?;
    Ok(())
}

/// Invoke a step under the legacy/classic convention.
///
/// Constructs the same context shape as the pipeline path, reading the
/// workspace from the build handle, and calls [`Step::execute`] once.
/// Returns its boolean outcome; errors propagate unchanged.
pub fn perform_legacy(
    step: &dyn Step,
    build: &BuildHandle,
    launcher: &Launcher,
    listener: &dyn BuildListener,
) -> Result<bool, StepError> {
    trace!(run = %build.run(), workspace = %build.workspace().display(), "legacy step invocation");
    let ctx = StepContext::new(build.run(), build.workspace(), launcher, listener);
    step.execute(&ctx)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use veristep_model::{ModelError, StepConfig};

    use super::{
        BuildHandle, Launcher, RunHandle, Step, StepContext, perform_legacy, perform_pipeline,
    };
    use crate::error::StepError;
    use crate::listener::NullListener;

    struct OutcomeStep {
        config: StepConfig,
        outcome: Result<bool, StepError>,
        calls: AtomicUsize,
    }

    impl OutcomeStep {
        fn new(outcome: Result<bool, StepError>) -> Self {
            Self {
                config: StepConfig::new(),
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Step for OutcomeStep {
        fn config(&self) -> &StepConfig {
            &self.config
        }

        fn execute(&self, _ctx: &StepContext<'_>) -> Result<bool, StepError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(outcome) => Ok(*outcome),
                Err(StepError::Interrupted) => Err(StepError::Interrupted),
                Err(StepError::Failed(msg)) => Err(StepError::Failed(msg.clone())),
                Err(e) => panic!("unsupported test outcome: {e:?}"),
            }
        }
    }

    fn harness() -> (RunHandle, PathBuf, Launcher, NullListener) {
        (
            RunHandle::new("demo", 1),
            PathBuf::from("/ws/demo"),
            Launcher::new(),
            NullListener,
        )
    }

    #[test]
    fn legacy_returns_execute_outcome() {
        let (run, ws, launcher, listener) = harness();
        let build = BuildHandle::new(run, &ws);

        let step = OutcomeStep::new(Ok(true));
        assert!(perform_legacy(&step, &build, &launcher, &listener).unwrap());

        let step = OutcomeStep::new(Ok(false));
        assert!(!perform_legacy(&step, &build, &launcher, &listener).unwrap());
    }

    #[test]
    fn pipeline_completes_when_execute_succeeds() {
        let (run, ws, launcher, listener) = harness();
        let step = OutcomeStep::new(Ok(true));

        perform_pipeline(&step, &run, &ws, &launcher, &listener).unwrap();
    }

    #[test]
    fn pipeline_ignores_false_outcome() {
        // Only errors signal failure on the pipeline path.
        let (run, ws, launcher, listener) = harness();
        let step = OutcomeStep::new(Ok(false));

        perform_pipeline(&step, &run, &ws, &launcher, &listener).unwrap();
    }

    #[test]
    fn pipeline_propagates_failure_unchanged() {
        let (run, ws, launcher, listener) = harness();
        let step = OutcomeStep::new(Err(StepError::Failed("verdict was FAILURE".into())));

        match perform_pipeline(&step, &run, &ws, &launcher, &listener) {
            Err(StepError::Failed(msg)) => assert_eq!(msg, "verdict was FAILURE"),
            other => panic!("expected StepError::Failed, got {other:?}"),
        }
    }

    #[test]
    fn pipeline_passes_interruption_through() {
        let (run, ws, launcher, listener) = harness();
        let step = OutcomeStep::new(Err(StepError::Interrupted));

        let res = perform_pipeline(&step, &run, &ws, &launcher, &listener);
        assert!(matches!(res, Err(StepError::Interrupted)));
    }

    #[test]
    fn legacy_propagates_errors_unchanged() {
        let (run, ws, launcher, listener) = harness();
        let build = BuildHandle::new(run, &ws);
        let step = OutcomeStep::new(Err(StepError::Interrupted));

        let res = perform_legacy(&step, &build, &launcher, &listener);
        assert!(matches!(res, Err(StepError::Interrupted)));
    }

    #[test]
    fn each_convention_invokes_execute_exactly_once() {
        let (run, ws, launcher, listener) = harness();
        let build = BuildHandle::new(run.clone(), &ws);
        let step = OutcomeStep::new(Ok(true));

        perform_pipeline(&step, &run, &ws, &launcher, &listener).unwrap();
        assert_eq!(step.calls(), 1);

        perform_legacy(&step, &build, &launcher, &listener).unwrap();
        assert_eq!(step.calls(), 2);
    }

    #[test]
    fn both_conventions_present_the_same_context() {
        struct CapturingStep {
            config: StepConfig,
            seen: Mutex<Vec<(String, PathBuf)>>,
        }

        impl Step for CapturingStep {
            fn config(&self) -> &StepConfig {
                &self.config
            }

            fn execute(&self, ctx: &StepContext<'_>) -> Result<bool, StepError> {
                self.seen
                    .lock()
                    .unwrap()
                    .push((ctx.run().to_string(), ctx.workspace().to_path_buf()));
                Ok(true)
            }
        }

        let (run, ws, launcher, listener) = harness();
        let build = BuildHandle::new(run.clone(), &ws);
        let step = CapturingStep {
            config: StepConfig::new(),
            seen: Mutex::new(Vec::new()),
        };

        perform_pipeline(&step, &run, &ws, &launcher, &listener).unwrap();
        perform_legacy(&step, &build, &launcher, &listener).unwrap();

        let seen = step.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[0].1, Path::new("/ws/demo"));
    }

    #[test]
    fn workspace_io_errors_surface() {
        struct ReadingStep {
            config: StepConfig,
        }

        impl Step for ReadingStep {
            fn config(&self) -> &StepConfig {
                &self.config
            }

            fn execute(&self, ctx: &StepContext<'_>) -> Result<bool, StepError> {
                std::fs::read(ctx.workspace().join("missing.json"))?;
                Ok(true)
            }
        }

        let (run, ws, launcher, listener) = harness();
        let step = ReadingStep {
            config: StepConfig::new(),
        };

        let res = perform_pipeline(&step, &run, &ws, &launcher, &listener);
        assert!(matches!(res, Err(StepError::Io(_))));
    }

    #[test]
    fn config_errors_surface_through_either_convention() {
        struct MisconfiguredStep {
            config: StepConfig,
        }

        impl Step for MisconfiguredStep {
            fn config(&self) -> &StepConfig {
                &self.config
            }

            fn execute(&self, _ctx: &StepContext<'_>) -> Result<bool, StepError> {
                Err(ModelError::UnknownTimeoutUnit("fortnight".into()).into())
            }
        }

        let (run, ws, launcher, listener) = harness();
        let step = MisconfiguredStep {
            config: StepConfig::new(),
        };

        let res = perform_pipeline(&step, &run, &ws, &launcher, &listener);
        match res {
            Err(StepError::Config(ModelError::UnknownTimeoutUnit(name))) => {
                assert_eq!(name, "fortnight");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}
