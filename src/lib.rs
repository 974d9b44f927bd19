//! Compare two Go-style benchmark reports and report the percentage change
//! in total operations and ns per operation.
//! Run the Criterion benchmark with `cargo bench` to inspect reports under `target/criterion`.

use std::path::Path;

pub mod compare;
pub mod config;
pub mod errors;
pub mod extract;
pub mod report;

pub use crate::compare::{Comparison, FieldDiff, PercentChange, TRACKED_FIELDS};
pub use crate::config::CommandLineConfig;
pub use crate::errors::BenchCompareError;
pub use crate::extract::TokenExtractor;
pub use crate::report::{Report, Side};

/// Loads both reports and compares their tracked fields.
pub fn run_comparison(
    extractor: &TokenExtractor,
    old_path: &Path,
    new_path: &Path,
) -> Result<Comparison, BenchCompareError> {
    let old = Report::load(Side::Old, old_path)?;
    let new = Report::load(Side::New, new_path)?;
    compare_reports(extractor, &old, &new)
}

/// Compares the first benchmark line of each already-loaded report.
pub fn compare_reports(
    extractor: &TokenExtractor,
    old: &Report,
    new: &Report,
) -> Result<Comparison, BenchCompareError> {
    let old_line = old.benchmark_line()?;
    let new_line = new.benchmark_line()?;
    compare_lines(extractor, old_line, new_line)
}

/// Extracts, parses and compares the numeric tokens of two benchmark lines.
pub fn compare_lines(
    extractor: &TokenExtractor,
    old_line: &str,
    new_line: &str,
) -> Result<Comparison, BenchCompareError> {
    let old_raw = extractor.extract(Side::Old, old_line)?;
    let new_raw = extractor.extract(Side::New, new_line)?;
    let old_values = extract::parse_tokens(Side::Old, &old_raw)?;
    let new_values = extract::parse_tokens(Side::New, &new_raw)?;
    compare::compare(
        &TRACKED_FIELDS,
        &compare::Tokens {
            side: Side::Old,
            raw: &old_raw,
            values: &old_values,
        },
        &compare::Tokens {
            side: Side::New,
            raw: &new_raw,
            values: &new_values,
        },
    )
}
