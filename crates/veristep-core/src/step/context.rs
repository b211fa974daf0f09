use std::fmt;
use std::path::{Path, PathBuf};

use crate::listener::BuildListener;

/// Identity of the run a step executes in.
///
/// The core treats it as opaque; it only surfaces in trace output and
/// step diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHandle {
    job: String,
    number: u64,
}

impl RunHandle {
    /// Create a handle for the given job name and build number.
    pub fn new(job: impl Into<String>, number: u64) -> Self {
        Self {
            job: job.into(),
            number,
        }
    }

    /// Name of the job this run belongs to.
    pub fn job(&self) -> &str {
        &self.job
    }

    /// Build number within the job.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for RunHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.job, self.number)
    }
}

/// Handle passed by the legacy invocation convention.
///
/// Unlike the pipeline convention, the legacy host does not pass the
/// workspace separately: the build handle carries it, and the adapter
/// reads it from here when constructing the context.
#[derive(Debug, Clone)]
pub struct BuildHandle {
    run: RunHandle,
    workspace: PathBuf,
}

impl BuildHandle {
    /// Create a handle bundling a run identity with its workspace.
    pub fn new(run: RunHandle, workspace: impl Into<PathBuf>) -> Self {
        Self {
            run,
            workspace: workspace.into(),
        }
    }

    /// Identity of the run.
    pub fn run(&self) -> &RunHandle {
        &self.run
    }

    /// Workspace the build checked out into.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Process launcher for the node the step runs on.
///
/// Carried through to step implementations unchanged; the core never
/// launches anything itself.
#[derive(Debug, Clone, Default)]
pub struct Launcher {
    node: Option<String>,
}

impl Launcher {
    /// Create a launcher with no node attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the name of the node the launcher targets.
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Node name, if one was attached.
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }
}

/// Invocation context handed to [`Step::execute`](crate::step::Step::execute).
///
/// Bundles the four host-supplied values for one invocation. The core
/// reads nothing out of it except the listener; everything else passes
/// through to the step untouched.
pub struct StepContext<'a> {
    run: &'a RunHandle,
    workspace: &'a Path,
    launcher: &'a Launcher,
    listener: &'a dyn BuildListener,
}

impl<'a> StepContext<'a> {
    /// Bundle the given invocation values.
    pub fn new(
        run: &'a RunHandle,
        workspace: &'a Path,
        launcher: &'a Launcher,
        listener: &'a dyn BuildListener,
    ) -> Self {
        Self {
            run,
            workspace,
            launcher,
            listener,
        }
    }

    /// Identity of the run being built.
    pub fn run(&self) -> &RunHandle {
        self.run
    }

    /// Workspace path for this invocation.
    pub fn workspace(&self) -> &Path {
        self.workspace
    }

    /// Launcher for the node the step runs on.
    pub fn launcher(&self) -> &Launcher {
        self.launcher
    }

    /// Build log sink for diagnostics.
    pub fn listener(&self) -> &dyn BuildListener {
        self.listener
    }
}

impl fmt::Debug for StepContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepContext")
            .field("run", &self.run)
            .field("workspace", &self.workspace)
            .field("launcher", &self.launcher)
            .field("listener", &"<listener>")
            .finish()
    }
}

impl fmt::Display for StepContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepContext({} @ {})", self.run, self.workspace.display())
    }
}
