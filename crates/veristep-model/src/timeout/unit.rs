use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::timeout::TimeoutMs;

/// Unit attached to a step-local wait value.
///
/// Steps configure their wait budget as two strings: a numeric value and a
/// unit name. The unit scales the parsed value into milliseconds, the only
/// duration representation the host consumes.
///
/// Units:
/// - `Milliseconds` ("milli"): multiplier 1.
/// - `Seconds` ("sec"): multiplier 1000.
/// - `Minutes` ("min"): multiplier 60000.
///
/// An absent or blank unit name resolves to `Milliseconds` so that older
/// job configurations written before units existed keep their meaning.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeoutUnit {
    /// Wait value is already in milliseconds.
    #[default]
    Milliseconds,
    /// Wait value is in seconds.
    Seconds,
    /// Wait value is in minutes.
    Minutes,
}

/// Closed set of recognized units, in resolution order.
const UNITS: [TimeoutUnit; 3] = [
    TimeoutUnit::Milliseconds,
    TimeoutUnit::Seconds,
    TimeoutUnit::Minutes,
];

impl TimeoutUnit {
    /// Canonical short name used in configuration and diagnostics.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            TimeoutUnit::Milliseconds => "milli",
            TimeoutUnit::Seconds => "sec",
            TimeoutUnit::Minutes => "min",
        }
    }

    /// Factor converting a value in this unit into milliseconds.
    pub const fn multiplier(self) -> TimeoutMs {
        match self {
            TimeoutUnit::Milliseconds => 1,
            TimeoutUnit::Seconds => 1_000,
            TimeoutUnit::Minutes => 60_000,
        }
    }

    /// Resolve a configured unit name into a unit.
    ///
    /// Matching trims the input and compares case-insensitively against the
    /// canonical names. An absent or blank name defaults to
    /// [`TimeoutUnit::Milliseconds`]; any other unmatched name is a
    /// [`ModelError::UnknownTimeoutUnit`] error, never a silent fallback.
    pub fn resolve(name: Option<&str>) -> ModelResult<TimeoutUnit> {
        let name = name.unwrap_or("").trim();
        if name.is_empty() {
            // Units absent from old configurations mean milliseconds.
            return Ok(TimeoutUnit::Milliseconds);
        }
        UNITS
            .into_iter()
            .find(|unit| unit.canonical_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownTimeoutUnit(name.to_string()))
    }

    /// Normalize a unit name for display and storage round-trips.
    ///
    /// Absent or blank input becomes the canonical milliseconds name;
    /// anything else is returned trimmed but otherwise untouched. No
    /// validation happens here: unknown names survive the round-trip and
    /// fail later in [`TimeoutUnit::resolve`].
    pub fn normalize(name: Option<&str>) -> &str {
        match name {
            Some(name) if !name.trim().is_empty() => name.trim(),
            _ => TimeoutUnit::Milliseconds.canonical_name(),
        }
    }

    /// Scale a configured wait value into milliseconds.
    ///
    /// An absent or blank value yields `fallback` verbatim, whatever the
    /// unit. Otherwise the value is parsed as a base-10 integer exactly as
    /// configured (surrounding whitespace is not stripped before parsing)
    /// and multiplied by this unit's factor. Sign and range are
    /// intentionally not validated; the multiplication wraps.
    pub fn to_milliseconds(self, raw: Option<&str>, fallback: TimeoutMs) -> ModelResult<TimeoutMs> {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(fallback),
        };
        let value: TimeoutMs = raw
            .parse()
            .map_err(|_| ModelError::MalformedWaitTime(raw.to_string()))?;
        Ok(value.wrapping_mul(self.multiplier()))
    }
}

impl FromStr for TimeoutUnit {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        TimeoutUnit::resolve(Some(s))
    }
}

impl fmt::Display for TimeoutUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
