//! Search reports: the human-readable listing and the `--json` shape.

use std::time::Duration;

use serde::Serialize;
use subsum_core::Token;

#[derive(Serialize)]
pub struct Report {
    pub target: String,
    pub matches: usize,
    pub elapsed_secs: f64,
    pub subsets: Vec<Vec<String>>,
}

impl Report {
    pub fn new(target: Token, results: &[Vec<Token>], elapsed: Duration) -> Self {
        Self {
            target: target.to_string(),
            matches: results.len(),
            elapsed_secs: elapsed.as_secs_f64(),
            subsets: results
                .iter()
                .map(|subset| subset.iter().map(Token::to_string).collect())
                .collect(),
        }
    }

    pub fn print(&self) {
        println!("target: {}", self.target);
        println!(
            "found {} valid subsets in {:.6}s:",
            self.matches, self.elapsed_secs
        );
        for subset in &self.subsets {
            println!("  {{{}}}", subset.join(", "));
        }
    }
}
