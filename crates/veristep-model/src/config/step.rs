use serde::{Deserialize, Deserializer, Serialize};

/// Configuration carried by every build step: the remote service endpoint
/// and the verbosity flag.
///
/// Both fields are optional strings taken from job configuration.
/// Assignment trims surrounding whitespace and preserves absent values.
/// Nothing else is normalized or validated here; in particular the URL is
/// not checked for well-formedness.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepConfig {
    /// Base URL of the remote service API.
    #[serde(deserialize_with = "trimmed", skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    /// Verbosity flag as configured; "true" enables diagnostics.
    #[serde(deserialize_with = "trimmed", skip_serializing_if = "Option::is_none")]
    verbose: Option<String>,
}

impl StepConfig {
    /// Create an empty configuration with both fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service API URL. The value is trimmed on assignment.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into().trim().to_string());
        self
    }

    /// Set the verbosity flag string. The value is trimmed on assignment.
    pub fn with_verbose(mut self, verbose: impl Into<String>) -> Self {
        self.verbose = Some(verbose.into().trim().to_string());
        self
    }

    /// Configured service URL, if any.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Configured verbosity flag string, if any.
    pub fn verbose(&self) -> Option<&str> {
        self.verbose.as_deref()
    }

    /// Whether verbose diagnostics are enabled.
    ///
    /// Only the literal flag value "true" (any case) enables them; absent
    /// or any other value disables them.
    pub fn is_verbose(&self) -> bool {
        self.verbose
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Trim an optional string during deserialization so the serde path gets
/// the same assignment-time trimming as the builder path.
fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}
