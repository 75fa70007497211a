/// Absolute tolerance for matching a running sum against the target
pub const EPSILON: f64 = 1e-9;

/// Rounding scale for keying evaluated values back to tokens: 10
/// decimal digits (10^10)
pub const LEDGER_SCALE: f64 = 1e10;
