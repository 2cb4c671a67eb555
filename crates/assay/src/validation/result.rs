//! Check results and the error tally.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Outcome of a date format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatStatus {
    /// Every value parsed with the fixed pattern.
    Consistent,
    /// At least one value failed to parse.
    Inconsistent,
}

impl FormatStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormatStatus::Consistent => "Consistent",
            FormatStatus::Inconsistent => "Inconsistent",
        }
    }
}

/// Value half of a check result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckValue {
    /// Number of defective cells or rows.
    Count(usize),
    /// Column-level format verdict.
    Format(FormatStatus),
    /// Ratio in `[0, ∞)`, displayed as a percentage with two decimals.
    Percentage(f64),
    /// The configured column is not in the dataset.
    ColumnMissing,
}

impl CheckValue {
    /// How much this value adds to the error tally.
    ///
    /// Counts add themselves; a failed format check adds exactly one no matter
    /// how many cells failed.
    pub fn errors(&self) -> usize {
        match self {
            CheckValue::Count(n) => *n,
            CheckValue::Format(FormatStatus::Inconsistent) => 1,
            CheckValue::Format(FormatStatus::Consistent)
            | CheckValue::Percentage(_)
            | CheckValue::ColumnMissing => 0,
        }
    }

    /// Returns true if the value signals a problem worth highlighting.
    pub fn is_problem(&self) -> bool {
        match self {
            CheckValue::ColumnMissing => true,
            CheckValue::Percentage(r) => *r > 0.0,
            _ => self.errors() > 0,
        }
    }
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckValue::Count(n) => write!(f, "{}", n),
            CheckValue::Format(status) => f.write_str(status.label()),
            CheckValue::Percentage(ratio) => write!(f, "{:.2}%", ratio * 100.0),
            CheckValue::ColumnMissing => f.write_str("column missing"),
        }
    }
}

impl Serialize for CheckValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckValue::Count(n) => serializer.serialize_u64(*n as u64),
            other => serializer.collect_str(other),
        }
    }
}

/// A labelled check outcome, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    label: String,
    value: CheckValue,
    errors: usize,
}

impl CheckResult {
    /// Create a result; its tally contribution follows from the value.
    pub fn new(label: impl Into<String>, value: CheckValue) -> Self {
        Self {
            label: label.into(),
            errors: value.errors(),
            value,
        }
    }

    /// Display label, e.g. `"Age Out-of-Range Values"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> CheckValue {
        self.value
    }

    /// Errors this result added to the tally.
    pub fn errors(&self) -> usize {
        self.errors
    }
}

/// Running sum of defect counts for one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorTally {
    total: usize,
}

impl ErrorTally {
    /// Start a fresh tally at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result's contribution.
    pub fn record(&mut self, result: &CheckResult) {
        self.total += result.errors();
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Tally divided by the number of cells; zero when there are no cells.
    pub fn ratio(&self, cells: usize) -> f64 {
        if cells == 0 {
            0.0
        } else {
            self.total as f64 / cells as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        assert_eq!(CheckValue::Count(3).to_string(), "3");
        assert_eq!(
            CheckValue::Format(FormatStatus::Inconsistent).to_string(),
            "Inconsistent"
        );
        assert_eq!(CheckValue::Percentage(2.0 / 6.0).to_string(), "33.33%");
        assert_eq!(CheckValue::Percentage(0.0).to_string(), "0.00%");
        assert_eq!(CheckValue::ColumnMissing.to_string(), "column missing");
    }

    #[test]
    fn test_format_failure_counts_once() {
        assert_eq!(CheckValue::Format(FormatStatus::Inconsistent).errors(), 1);
        assert_eq!(CheckValue::Format(FormatStatus::Consistent).errors(), 0);
        assert_eq!(CheckValue::ColumnMissing.errors(), 0);
    }

    #[test]
    fn test_tally_ratio() {
        let mut tally = ErrorTally::new();
        tally.record(&CheckResult::new("a", CheckValue::Count(2)));
        tally.record(&CheckResult::new("b", CheckValue::Format(FormatStatus::Inconsistent)));
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.ratio(12), 0.25);
        assert_eq!(tally.ratio(0), 0.0);
    }

    #[test]
    fn test_serialize_result() {
        let json = serde_json::to_value(CheckResult::new("Missing Values", CheckValue::Count(4)))
            .unwrap();
        assert_eq!(json["label"], "Missing Values");
        assert_eq!(json["value"], 4);
        assert_eq!(json["errors"], 4);

        let json =
            serde_json::to_value(CheckResult::new("Error Ratio", CheckValue::Percentage(0.5)))
                .unwrap();
        assert_eq!(json["value"], "50.00%");
    }
}
