use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Logarithm with a non-positive argument, or a base that is
    /// non-positive or exactly 1.
    LogDomain { base: f64, argument: f64 },
    InvalidToken(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::LogDomain { base, argument } => {
                write!(f, "logarithm domain error: base {base}, argument {argument}")
            }
            SolveError::InvalidToken(text) => write!(f, "invalid token: '{text}'"),
        }
    }
}

impl std::error::Error for SolveError {}

pub type Result<T> = std::result::Result<T, SolveError>;
