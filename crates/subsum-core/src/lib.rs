//! Exhaustive subset-sum enumeration over symbolic tokens.
//!
//! Finds every distinct subset of a token pool whose evaluated values sum
//! to a target within a fixed tolerance. Tokens are plain numbers or
//! symbolic expressions (exponentials, logarithms) that are evaluated
//! before the search and mapped back to their original identity afterwards.
//!
//! The search is backtracking with suffix-sum anchoring and overshoot
//! pruning. Worst case is exponential in the pool size.
//!
//! Zero I/O — pure math engine with no opinions about transport or output.

pub mod constants;
pub mod enumerate;
pub mod error;
pub mod ledger;
pub mod parse;
pub mod solve;
pub mod token;

pub use constants::{EPSILON, LEDGER_SCALE};
pub use enumerate::enumerate_subsets;
pub use error::{Result, SolveError};
pub use ledger::{ValueLedger, ledger_key};
pub use parse::parse_token;
pub use solve::solve;
pub use token::Token;
