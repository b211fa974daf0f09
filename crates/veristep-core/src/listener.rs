//! Line-oriented build log sink.
//!
//! Steps write human-readable diagnostics to the listener the host
//! supplies with every invocation. Lines are unstructured and
//! append-only; nothing in the core parses them back.

use std::sync::Mutex;

use tracing::info;

/// Line sink for build diagnostics.
///
/// One listener accompanies each invocation. Implementations must be safe
/// to share between steps running concurrently on different host threads.
pub trait BuildListener: Send + Sync {
    /// Append one line to the build log.
    fn line(&self, msg: &str);
}

/// Listener that forwards build log lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl BuildListener for TracingListener {
    fn line(&self, msg: &str) {
        info!(target: "build_log", "{msg}");
    }
}

/// Listener that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl BuildListener for NullListener {
    #[inline(always)]
    fn line(&self, _: &str) {}
}

/// Listener that captures lines in memory, for harnesses and tests.
#[derive(Debug, Default)]
pub struct BufferListener {
    lines: Mutex<Vec<String>>,
}

impl BufferListener {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("listener buffer poisoned").clone()
    }
}

impl BuildListener for BufferListener {
    fn line(&self, msg: &str) {
        self.lines
            .lock()
            .expect("listener buffer poisoned")
            .push(msg.to_string());
    }
}
