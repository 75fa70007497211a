use std::collections::HashMap;

use crate::constants::LEDGER_SCALE;
use crate::token::Token;

/// Key for an evaluated value: the bit pattern of the value rounded at
/// 10 decimal digits. Absorbs the float noise between evaluating a token
/// and seeing its value again in a result, while keeping keys distinct
/// across the full finite range. Values too large for the scaling to be
/// finite key on their own bits (rounding is a no-op at that magnitude).
pub fn ledger_key(value: f64) -> u64 {
    let scaled = value * LEDGER_SCALE;
    if scaled.is_finite() {
        (scaled.round() / LEDGER_SCALE).to_bits()
    } else {
        value.to_bits()
    }
}

/// Value → original-token lookup used to restore result identity after
/// the numeric search. The search itself never consults this.
///
/// Built once per solve as an immutable template; every remap draws from
/// its own fresh copy, so results never compete for tokens.
#[derive(Clone, Debug, Default)]
pub struct ValueLedger {
    entries: HashMap<u64, Vec<Token>>,
}

impl ValueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token under its evaluated value. Insertion order is kept
    /// per value; remap consumes from the tail.
    pub fn insert(&mut self, value: f64, token: Token) {
        self.entries.entry(ledger_key(value)).or_default().push(token);
    }

    /// Reconstruct the token subset for one numeric subset, consuming
    /// tokens from a fresh copy of the ledger. A value with no token
    /// left (rounding mismatch or exhaustion) is skipped with a warning,
    /// so the output can come back shorter than the numeric subset.
    pub fn remap(&self, subset: &[f64]) -> Vec<Token> {
        let mut working = self.entries.clone();
        let mut tokens = Vec::with_capacity(subset.len());
        for &value in subset {
            match working.get_mut(&ledger_key(value)).and_then(|list| list.pop()) {
                Some(token) => tokens.push(token),
                None => tracing::warn!(value, "no token left in ledger, dropping position"),
            }
        }
        tokens
    }
}
