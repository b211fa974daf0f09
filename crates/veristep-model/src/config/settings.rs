use serde::{Deserialize, Serialize};

use crate::timeout::TimeoutMs;

/// Fallback applied when a step carries no local wait configuration.
const DEFAULT_TIMEOUT_MS: TimeoutMs = 5_000;

/// Job-type level settings stored by the host.
///
/// The host hands the default timeout to steps at invocation time; a step
/// with a local wait configuration overrides it during timeout
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSettings {
    /// Global default timeout in milliseconds.
    pub default_timeout_ms: TimeoutMs,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
