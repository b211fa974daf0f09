mod unit;
pub use unit::TimeoutUnit;

/// Timeout value in milliseconds.
///
/// Signed on purpose: wait values are parsed as plain base-10 integers
/// with no sign validation, so a negative configuration flows through
/// arithmetic unchanged.
pub type TimeoutMs = i64;
