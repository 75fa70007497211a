use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SolveError};
use crate::token::Token;

static SYMBOLIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(exp|log)\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)$").unwrap());

/// Parse a token from its text form: a plain float (`3`, `-2.5`, `1e3`),
/// `exp(BASE,EXPONENT)`, or `log(BASE,ARGUMENT)`.
/// Non-finite values are rejected — the search assumes finite inputs.
pub fn parse_token(text: &str) -> Result<Token> {
    let trimmed = text.trim();
    if let Some(caps) = SYMBOLIC.captures(trimmed) {
        let first = parse_number(&caps[2], text)?;
        let second = parse_number(&caps[3], text)?;
        return Ok(match &caps[1] {
            "exp" => Token::Exp { base: first, exponent: second },
            _ => Token::Log { base: first, argument: second },
        });
    }
    Ok(Token::Number(parse_number(trimmed, text)?))
}

fn parse_number(field: &str, whole: &str) -> Result<f64> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| SolveError::InvalidToken(whole.to_string()))?;
    if !value.is_finite() {
        return Err(SolveError::InvalidToken(whole.to_string()));
    }
    Ok(value)
}
