use serde::{Deserialize, Serialize};

use crate::timeout::TimeoutUnit;

/// Step-local wait configuration: an optional numeric value and an
/// optional unit name, both stored exactly as configured.
///
/// Resolution against the global default happens at invocation time; this
/// type only carries the strings so configuration round-trips never alter
/// user input. [`WaitConfig::normalized_unit`] is the one display helper.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitConfig {
    /// Wait value as configured (e.g. "5"), unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_time: Option<String>,
    /// Wait unit name as configured (e.g. "sec"), unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_unit: Option<String>,
}

impl WaitConfig {
    /// Create a configuration with no local wait.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wait value string, stored verbatim.
    pub fn with_wait_time(mut self, value: impl Into<String>) -> Self {
        self.wait_time = Some(value.into());
        self
    }

    /// Set the wait unit name, stored verbatim.
    pub fn with_wait_unit(mut self, unit: impl Into<String>) -> Self {
        self.wait_unit = Some(unit.into());
        self
    }

    /// Configured wait value, if any.
    pub fn wait_time(&self) -> Option<&str> {
        self.wait_time.as_deref()
    }

    /// Configured wait unit name, if any.
    pub fn wait_unit(&self) -> Option<&str> {
        self.wait_unit.as_deref()
    }

    /// Unit name for display and storage round-trips.
    ///
    /// Blank or absent input becomes the canonical milliseconds name;
    /// anything else comes back trimmed and unvalidated (see
    /// [`TimeoutUnit::normalize`]).
    pub fn normalized_unit(&self) -> &str {
        TimeoutUnit::normalize(self.wait_unit())
    }
}
