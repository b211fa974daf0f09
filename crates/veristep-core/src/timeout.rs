//! Timed-step capability: folding local and global wait configuration
//! into the single millisecond budget handed to the service client.
use tracing::debug;

use veristep_model::{TimeoutMs, TimeoutUnit};

use crate::error::StepError;
use crate::listener::BuildListener;

/// Capability of steps that wait on the remote service.
///
/// A timed step supplies its local wait configuration plus the global
/// default the host stores for the job type; [`compute_timeout`] folds
/// them into one value. Steps without a wait surface simply do not
/// implement this.
pub trait Timed {
    /// Step-local wait value as configured, if any.
    fn wait_time(&self) -> Option<&str>;

    /// Step-local wait unit name as configured, if any.
    fn wait_unit(&self) -> Option<&str>;

    /// Global default timeout in milliseconds from job-type settings.
    fn global_timeout_ms(&self) -> TimeoutMs;
}

/// Resolve the effective timeout for one step invocation.
///
/// Resolution order:
/// 1. read the global default from the step;
/// 2. resolve the configured unit (absent or blank means milliseconds);
/// 3. scale the configured wait value, or fall back to the global default
///    when no local value is set.
///
/// When `verbose` is set, three diagnostic lines go to the listener: the
/// global default, the local configuration (or a notice that none is
/// set), and the resolved total. Those lines are the only effect of
/// `verbose`, and configuration errors abort before any line is written.
///
/// The returned value is not an enforced deadline. Nothing here starts a
/// timer; bounding the actual remote call is the job of the collaborator
/// that owns it.
pub fn compute_timeout(
    step: &dyn Timed,
    listener: &dyn BuildListener,
    verbose: bool,
) -> Result<TimeoutMs, StepError> {
    let global = step.global_timeout_ms();

    let unit = TimeoutUnit::resolve(step.wait_unit())?;
    let total = unit.to_milliseconds(step.wait_time(), global)?;

    if verbose {
        listener.line(&format!(
            "Found global job type timeout configuration: {global} milliseconds"
        ));
        match step.wait_time() {
            Some(time) if !time.trim().is_empty() => {
                listener.line(&format!("Local step timeout configuration: {time} {unit}"));
            }
            _ => listener.line("No local timeout configured for this step"),
        }
        listener.line(&format!("Operation will timeout after {total} milliseconds"));
    }

    debug!(global, total, "step timeout resolved");
    Ok(total)
}
