//! The full pipeline for one target: classify, evaluate, enumerate, remap.

use crate::enumerate::enumerate_subsets;
use crate::error::Result;
use crate::ledger::ValueLedger;
use crate::token::Token;

/// Search a token pool for every subset whose evaluated values sum to
/// the target, returning subsets of the original tokens.
///
/// A logarithmic target is matched only against logarithmic tokens; any
/// other target only against non-logarithmic ones. Domain errors from
/// symbolic evaluation propagate; an empty result is a valid no-match
/// outcome, not an error.
pub fn solve(tokens: &[Token], target: Token) -> Result<Vec<Vec<Token>>> {
    let target_value = target.evaluate()?;
    let wants_log = target.is_log();

    let mut ledger = ValueLedger::new();
    let mut values = Vec::new();
    for &token in tokens.iter().filter(|t| t.is_log() == wants_log) {
        let value = token.evaluate()?;
        values.push(value);
        ledger.insert(value, token);
    }

    tracing::debug!(
        pool = values.len(),
        target = target_value,
        "enumerating subsets"
    );
    let numeric = enumerate_subsets(&values, target_value);
    Ok(numeric.iter().map(|subset| ledger.remap(subset)).collect())
}
