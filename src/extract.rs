use regex::Regex;

use crate::{BenchCompareError, report::Side};

pub const NUMERIC_PATTERN: &str = r"[0-9.]+";

/// Compiled numeric token pattern, built once and shared by both reports.
#[derive(Clone, Debug)]
pub struct TokenExtractor {
    pattern: Regex,
}

impl TokenExtractor {
    pub fn new() -> Result<Self, BenchCompareError> {
        Self::with_pattern(NUMERIC_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, BenchCompareError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Every maximal numeric run in `line`, left to right. Multi-dot runs such
    /// as `1.2.3` are returned as-is and rejected later by [`parse_tokens`].
    pub fn extract(&self, side: Side, line: &str) -> Result<Vec<String>, BenchCompareError> {
        let tokens: Vec<String> = self
            .pattern
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect();
        if tokens.is_empty() {
            return Err(BenchCompareError::NoNumericData { side });
        }
        log::trace!("{side} tokens: {tokens:?}");
        Ok(tokens)
    }
}

pub fn parse_tokens(side: Side, tokens: &[String]) -> Result<Vec<f64>, BenchCompareError> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| BenchCompareError::NumericParse {
                    side,
                    token: token.clone(),
                })
        })
        .collect()
}
