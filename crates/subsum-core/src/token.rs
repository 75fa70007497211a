use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};

/// An input element: a plain number or a symbolic numeric expression.
/// Identity matters — two tokens with equal numeric value are distinct
/// entities, and results report original tokens, not evaluated values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Number(f64),
    Exp { base: f64, exponent: f64 },
    Log { base: f64, argument: f64 },
}

impl Token {
    /// Evaluate to a floating-point value.
    /// Logarithms outside their domain fail; the error propagates to the
    /// caller, nothing in the pipeline suppresses it.
    pub fn evaluate(self) -> Result<f64> {
        match self {
            Token::Number(n) => Ok(n),
            Token::Exp { base, exponent } => Ok(base.powf(exponent)),
            Token::Log { base, argument } => {
                if argument <= 0.0 || base <= 0.0 || base == 1.0 {
                    return Err(SolveError::LogDomain { base, argument });
                }
                Ok(argument.log(base))
            }
        }
    }

    /// True iff this is a logarithmic token. The driver partitions the
    /// pool with this: logarithmic targets search only logarithmic
    /// tokens, everything else searches the rest.
    pub fn is_log(self) -> bool {
        matches!(self, Token::Log { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Exp { base, exponent } => write!(f, "exp({base},{exponent})"),
            Token::Log { base, argument } => write!(f, "log({base},{argument})"),
        }
    }
}
