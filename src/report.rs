use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::BenchCompareError;

pub const BENCHMARK_PREFIX: &str = "Benchmark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// A benchmark report held as an ordered list of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub side: Side,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Report {
    pub fn load(side: Side, path: &Path) -> Result<Self, BenchCompareError> {
        let bytes = fs::read(path).map_err(|source| BenchCompareError::Io {
            side,
            path: path.to_path_buf(),
            source,
        })?;
        // Test logs interleaved with results may carry non-UTF-8 bytes.
        let report = Self::from_text(side, path, &String::from_utf8_lossy(&bytes));
        log::debug!(
            "loaded {side} report {} ({} lines)",
            path.display(),
            report.lines.len()
        );
        Ok(report)
    }

    pub fn from_text(side: Side, path: &Path, text: &str) -> Self {
        Self {
            side,
            path: path.to_path_buf(),
            lines: split_lines(text),
        }
    }

    /// First line starting with [`BENCHMARK_PREFIX`].
    pub fn benchmark_line(&self) -> Result<&str, BenchCompareError> {
        self.line_with_prefix(BENCHMARK_PREFIX)
    }

    pub fn line_with_prefix(&self, prefix: &str) -> Result<&str, BenchCompareError> {
        let line = self
            .lines
            .iter()
            .find(|line| line.starts_with(prefix))
            .ok_or_else(|| BenchCompareError::MissingBenchmarkLine {
                side: self.side,
                prefix: prefix.to_string(),
            })?;
        log::debug!("{} benchmark line: {line}", self.side);
        Ok(line)
    }
}

// CRLF reports split the same way as LF ones.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
