use std::fmt;

use crate::{BenchCompareError, report::Side};

const HUNDRED_PERCENT: f64 = 100.0;

/// A named position in the numeric token sequence of a benchmark line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub position: usize,
}

pub const TOTAL_OPERATIONS: Field = Field {
    name: "Total operations",
    position: 1,
};

pub const NS_PER_OPERATION: Field = Field {
    name: "ns per operation",
    position: 2,
};

pub const TRACKED_FIELDS: [Field; 2] = [TOTAL_OPERATIONS, NS_PER_OPERATION];

/// `new / old * 100`, rebased around 100%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentChange {
    pub ratio: f64,
}

impl PercentChange {
    pub fn between(old: f64, new: f64) -> Self {
        Self {
            ratio: new / old * HUNDRED_PERCENT,
        }
    }

    pub fn is_decrease(&self) -> bool {
        self.ratio < HUNDRED_PERCENT
    }

    /// Unsigned distance from 100%.
    pub fn magnitude(&self) -> f64 {
        if self.is_decrease() {
            HUNDRED_PERCENT - self.ratio
        } else {
            self.ratio - HUNDRED_PERCENT
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_decrease() { '-' } else { '+' };
        write!(f, "{sign}{:.6} %", self.magnitude())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDiff {
    pub field: Field,
    pub old_raw: String,
    pub new_raw: String,
    pub old_value: f64,
    pub new_value: f64,
    pub change: PercentChange,
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference in {}: new results({}) are different from old ({}) on {}",
            self.field.name, self.new_raw, self.old_raw, self.change
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub fields: Vec<FieldDiff>,
}

/// One newline-terminated line per tracked field.
impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diff in &self.fields {
            writeln!(f, "{diff}")?;
        }
        Ok(())
    }
}

/// Token sequences of one report: raw strings and their parsed values.
#[derive(Clone, Copy, Debug)]
pub struct Tokens<'a> {
    pub side: Side,
    pub raw: &'a [String],
    pub values: &'a [f64],
}

impl Tokens<'_> {
    fn at(&self, field: &Field) -> Result<(&str, f64), BenchCompareError> {
        match (self.raw.get(field.position), self.values.get(field.position)) {
            (Some(raw), Some(value)) => Ok((raw.as_str(), *value)),
            _ => Err(BenchCompareError::FieldIndex {
                field: field.name.to_string(),
                position: field.position,
                side: self.side,
            }),
        }
    }
}

pub fn diff_field(
    field: Field,
    old: &Tokens<'_>,
    new: &Tokens<'_>,
) -> Result<FieldDiff, BenchCompareError> {
    let (old_raw, old_value) = old.at(&field)?;
    let (new_raw, new_value) = new.at(&field)?;
    let change = PercentChange::between(old_value, new_value);
    log::debug!("{}: ratio {:.6}%", field.name, change.ratio);
    Ok(FieldDiff {
        field,
        old_raw: old_raw.to_string(),
        new_raw: new_raw.to_string(),
        old_value,
        new_value,
        change,
    })
}

pub fn compare(
    fields: &[Field],
    old: &Tokens<'_>,
    new: &Tokens<'_>,
) -> Result<Comparison, BenchCompareError> {
    let fields = fields
        .iter()
        .map(|field| diff_field(*field, old, new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Comparison { fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_increase_formats_with_plus() {
        assert_eq!(PercentChange::between(100.0, 150.0).to_string(), "+50.000000 %");
    }

    #[test]
    fn test_decrease_formats_with_minus() {
        assert_eq!(PercentChange::between(100.0, 50.0).to_string(), "-50.000000 %");
    }

    #[test]
    fn test_equal_values_format_as_positive_zero() {
        assert_eq!(PercentChange::between(100.0, 100.0).to_string(), "+0.000000 %");
    }

    #[test]
    fn test_zero_baseline_is_infinite() {
        assert_eq!(PercentChange::between(0.0, 5.0).to_string(), "+inf %");
    }

    #[test]
    fn test_diff_line_uses_raw_tokens() {
        let old_raw = strings(&["8", "1000", "250.0"]);
        let new_raw = strings(&["8", "2000", "125.0"]);
        let old = Tokens {
            side: Side::Old,
            raw: &old_raw,
            values: &[8.0, 1000.0, 250.0],
        };
        let new = Tokens {
            side: Side::New,
            raw: &new_raw,
            values: &[8.0, 2000.0, 125.0],
        };
        let comparison = compare(&TRACKED_FIELDS, &old, &new).unwrap();
        let lines: Vec<String> = comparison.fields.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Difference in Total operations: new results(2000) are different from old (1000) on +100.000000 %",
                "Difference in ns per operation: new results(125.0) are different from old (250.0) on -50.000000 %",
            ]
        );
        assert_eq!(comparison.to_string(), format!("{}\n{}\n", lines[0], lines[1]));
    }

    #[test]
    fn test_short_sequence_names_field_and_side() {
        let old_raw = strings(&["8", "1000", "250"]);
        let new_raw = strings(&["8", "2000"]);
        let old = Tokens {
            side: Side::Old,
            raw: &old_raw,
            values: &[8.0, 1000.0, 250.0],
        };
        let new = Tokens {
            side: Side::New,
            raw: &new_raw,
            values: &[8.0, 2000.0],
        };
        let err = compare(&TRACKED_FIELDS, &old, &new).unwrap_err();
        match err {
            BenchCompareError::FieldIndex {
                field,
                position,
                side,
            } => {
                assert_eq!(field, "ns per operation");
                assert_eq!(position, 2);
                assert_eq!(side, Side::New);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
