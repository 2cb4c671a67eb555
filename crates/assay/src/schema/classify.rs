//! Structural kind inference for columns.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Kind;
use crate::input::{Column, Dataset, Value};

/// Day/month/year shape, matched at the start of the value.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap());

/// Check whether a string starts with the fixed `DD/MM/YYYY` shape.
///
/// This is a shape test only; `31/02/2024` matches and is rejected later by
/// the strict date parse.
pub fn matches_date_pattern(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Infer the kind of a column from the values it holds.
///
/// - `Datetime`: every non-null value is a date, or text matching the date shape
/// - `Numeric`: every non-null value is a number
/// - `Text`: anything else
///
/// A column with no rows is `Text`, and a column whose rows are all null is
/// `Numeric`; neither can be mistaken for a date column. `Categorical` and
/// `Identifier` only come from a schema binding.
pub fn classify(column: Column<'_>) -> Kind {
    if column.is_empty() {
        return Kind::Text;
    }
    if column.non_null().next().is_none() {
        return Kind::Numeric;
    }

    let is_date_like = column.non_null().all(|v| match v {
        Value::Date(_) => true,
        Value::Text(s) => matches_date_pattern(s),
        _ => false,
    });
    if is_date_like {
        return Kind::Datetime;
    }

    if column.non_null().all(|v| matches!(v, Value::Number(_))) {
        return Kind::Numeric;
    }

    Kind::Text
}

/// Classify every column of a dataset, in column order.
pub fn classify_all(dataset: &Dataset) -> IndexMap<String, Kind> {
    dataset
        .columns()
        .map(|column| (column.name().to_string(), classify(column)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn single_column(values: Vec<Value>) -> Dataset {
        Dataset::from_rows(&["c"], values.into_iter().map(|v| vec![v]).collect()).unwrap()
    }

    fn kind_of(values: Vec<Value>) -> Kind {
        let ds = single_column(values);
        classify(ds.column(0).unwrap())
    }

    #[test]
    fn test_date_pattern() {
        assert!(matches_date_pattern("12/05/2023"));
        assert!(matches_date_pattern("31/02/2023"));
        assert!(matches_date_pattern("12/05/2023 10:00"));
        assert!(!matches_date_pattern("2023-05-12"));
        assert!(!matches_date_pattern("1/5/2023"));
        assert!(!matches_date_pattern(" 12/05/2023"));
    }

    #[test]
    fn test_text_dates_are_datetime() {
        let kind = kind_of(vec!["12/05/2023".into(), Value::Null, "01/01/2024".into()]);
        assert_eq!(kind, Kind::Datetime);
    }

    #[test]
    fn test_typed_dates_are_datetime() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(kind_of(vec![d.into(), d.into()]), Kind::Datetime);
    }

    #[test]
    fn test_numbers_are_numeric() {
        assert_eq!(kind_of(vec![25.into(), Value::Null, 1.5.into()]), Kind::Numeric);
    }

    #[test]
    fn test_text_falls_through() {
        assert_eq!(kind_of(vec!["12/05/2023".into(), "soon".into()]), Kind::Text);
        assert_eq!(kind_of(vec!["Alice".into(), "Bob".into()]), Kind::Text);
    }

    #[test]
    fn test_mixed_values_are_text() {
        assert_eq!(kind_of(vec![1.into(), "one".into()]), Kind::Text);
    }

    #[test]
    fn test_empty_column_is_not_datetime() {
        assert_eq!(kind_of(vec![]), Kind::Text);
    }

    #[test]
    fn test_all_null_column_is_not_datetime() {
        assert_eq!(kind_of(vec![Value::Null, Value::Null]), Kind::Numeric);
    }

    #[test]
    fn test_classify_all_keeps_order() {
        let ds = Dataset::from_rows(
            &["Name", "Age", "Joined"],
            vec![vec!["Ann".into(), 30.into(), "01/02/2020".into()]],
        )
        .unwrap();
        let kinds = classify_all(&ds);
        let pairs: Vec<_> = kinds.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Name", Kind::Text),
                ("Age", Kind::Numeric),
                ("Joined", Kind::Datetime)
            ]
        );
    }
}
