//! Check rules, one per defect category.
//!
//! Rules are pure: they read a dataset or a column and return a
//! [`CheckValue`]. Labels and ordering belong to the engine.

use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::result::{CheckValue, FormatStatus};
use crate::input::{Column, Dataset, Value};
use crate::schema::RangeBound;

/// The one accepted date layout.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Number of offending values to include in debug logs.
const SAMPLE_SIZE: usize = 5;

/// A check over the whole dataset.
pub trait DatasetRule {
    fn evaluate(&self, dataset: &Dataset) -> CheckValue;
}

/// A check over a single column.
pub trait ColumnRule {
    fn evaluate(&self, column: Column<'_>) -> CheckValue;
}

/// Counts missing cells across all columns.
pub struct MissingValueRule;

impl DatasetRule for MissingValueRule {
    fn evaluate(&self, dataset: &Dataset) -> CheckValue {
        let missing = dataset
            .rows()
            .iter()
            .flatten()
            .filter(|v| v.is_null())
            .count();
        CheckValue::Count(missing)
    }
}

/// Counts rows that repeat an earlier row exactly.
///
/// Missing cells compare equal to each other, so `rows - distinct rows`.
pub struct DuplicateRecordRule;

impl DatasetRule for DuplicateRecordRule {
    fn evaluate(&self, dataset: &Dataset) -> CheckValue {
        let mut seen: HashSet<&[Value]> = HashSet::with_capacity(dataset.row_count());
        let duplicates: Vec<usize> = dataset
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| !seen.insert(row.as_slice()))
            .map(|(idx, _)| idx)
            .collect();

        if !duplicates.is_empty() {
            debug!(
                "Duplicate rows (first {}): {:?}",
                SAMPLE_SIZE,
                &duplicates[..duplicates.len().min(SAMPLE_SIZE)]
            );
        }
        CheckValue::Count(duplicates.len())
    }
}

/// Strictly parses every value with [`DATE_FORMAT`].
///
/// The verdict is for the whole column: one bad value makes it
/// `Inconsistent`. Missing cells are skipped.
pub struct DateFormatRule;

impl DateFormatRule {
    /// Check whether a single value is a valid date in the fixed layout.
    pub fn parses(value: &Value) -> bool {
        match value {
            Value::Date(_) => true,
            Value::Text(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok(),
            Value::Number(_) | Value::Null => false,
        }
    }
}

impl ColumnRule for DateFormatRule {
    fn evaluate(&self, column: Column<'_>) -> CheckValue {
        let failure = column
            .values()
            .enumerate()
            .find(|(_, v)| !v.is_null() && !Self::parses(v));

        match failure {
            Some((row, value)) => {
                debug!(
                    "Column '{}' row {}: '{}' is not a {} date",
                    column.name(),
                    row,
                    value,
                    DATE_FORMAT
                );
                CheckValue::Format(FormatStatus::Inconsistent)
            }
            None => CheckValue::Format(FormatStatus::Consistent),
        }
    }
}

/// Counts numbers outside a closed range.
///
/// Missing cells, NaN, and non-numeric values are not counted.
pub struct RangeRule {
    bound: RangeBound,
}

impl RangeRule {
    pub fn new(bound: RangeBound) -> Self {
        Self { bound }
    }
}

impl Default for RangeRule {
    fn default() -> Self {
        Self::new(RangeBound::default())
    }
}

impl ColumnRule for RangeRule {
    fn evaluate(&self, column: Column<'_>) -> CheckValue {
        let out_of_range: Vec<f64> = column
            .values()
            .filter_map(Value::as_number)
            .filter(|n| !n.is_nan() && !self.bound.contains(*n))
            .collect();

        if !out_of_range.is_empty() {
            debug!(
                "Column '{}': {} values outside [{}, {}], e.g. {:?}",
                column.name(),
                out_of_range.len(),
                self.bound.min,
                self.bound.max,
                &out_of_range[..out_of_range.len().min(SAMPLE_SIZE)]
            );
        }
        CheckValue::Count(out_of_range.len())
    }
}

/// Counts values in excess of the distinct ones: `len - distinct non-null`.
///
/// Missing cells are not distinct values, so each one counts as excess.
pub struct UniquenessRule;

impl ColumnRule for UniquenessRule {
    fn evaluate(&self, column: Column<'_>) -> CheckValue {
        let mut value_counts: IndexMap<&Value, usize> = IndexMap::new();
        for value in column.non_null() {
            *value_counts.entry(value).or_insert(0) += 1;
        }

        let excess = column.len() - value_counts.len();

        if excess > 0 {
            let repeated: Vec<String> = value_counts
                .iter()
                .filter(|(_, count)| **count > 1)
                .take(SAMPLE_SIZE)
                .map(|(value, count)| format!("{} (x{})", value, count))
                .collect();
            debug!(
                "Column '{}': {} non-unique values, repeated: {:?}",
                column.name(),
                excess,
                repeated
            );
        }
        CheckValue::Count(excess)
    }
}

/// Counts values outside an allowed set.
///
/// Only text can match; missing cells count as invalid.
pub struct AllowedValuesRule {
    allowed: IndexSet<String>,
}

impl AllowedValuesRule {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    fn is_allowed(&self, value: &Value) -> bool {
        value.as_text().is_some_and(|s| self.allowed.contains(s))
    }
}

impl ColumnRule for AllowedValuesRule {
    fn evaluate(&self, column: Column<'_>) -> CheckValue {
        let mut invalid: IndexMap<String, usize> = IndexMap::new();
        let mut count = 0;
        for value in column.values().filter(|v| !self.is_allowed(v)) {
            count += 1;
            *invalid.entry(value.to_string()).or_insert(0) += 1;
        }

        if count > 0 {
            debug!(
                "Column '{}': {} values not in {:?}: {:?}",
                column.name(),
                count,
                self.allowed,
                invalid.iter().take(SAMPLE_SIZE).collect::<Vec<_>>()
            );
        }
        CheckValue::Count(count)
    }
}
