use std::{io, path::PathBuf};

use thiserror::Error;

use crate::report::Side;

#[derive(Debug, Error)]
pub enum BenchCompareError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {side} report {}: {source}", .path.display())]
    Io {
        side: Side,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{side} report does not contain a line starting with {prefix:?}")]
    MissingBenchmarkLine { side: Side, prefix: String },
    #[error("no numeric data inside {side} benchmark results")]
    NoNumericData { side: Side },
    #[error("{side} benchmark token {token:?} is not a valid number")]
    NumericParse { side: Side, token: String },
    #[error("{side} benchmark line has no {field} value at position {position}")]
    FieldIndex {
        field: String,
        position: usize,
        side: Side,
    },
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl BenchCompareError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        BenchCompareError::Usage(msg.into())
    }
}
