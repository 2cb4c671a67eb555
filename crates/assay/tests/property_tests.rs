//! Property-based tests for the check engine.
//!
//! These tests use proptest to generate random datasets and verify that
//! the engine maintains its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p assay --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p assay --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use assay::validation::{ColumnRule, DatasetRule, DuplicateRecordRule, RangeRule};
use assay::{CheckValue, Dataset, Engine, Parser, SchemaConfig, Value};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell drawn from a small domain so duplicates are common.
fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (0i64..4).prop_map(Value::from),
        prop::sample::select(vec!["a", "b", "12/05/2023", "31/02/2023"]).prop_map(Value::from),
    ]
}

/// A dataset with 1-4 columns and 0-30 rows.
fn dataset() -> impl Strategy<Value = Dataset> {
    (1usize..5).prop_flat_map(|cols| {
        prop::collection::vec(prop::collection::vec(cell(), cols), 0..30).prop_map(move |rows| {
            let names: Vec<String> = (0..cols).map(|i| format!("c{}", i)).collect();
            Dataset::new(names, rows).unwrap()
        })
    })
}

fn count(value: CheckValue) -> usize {
    match value {
        CheckValue::Count(n) => n,
        other => panic!("expected a count, got {:?}", other),
    }
}

// =============================================================================
// Engine Invariants
// =============================================================================

proptest! {
    #[test]
    fn duplicates_equal_rows_minus_distinct(ds in dataset()) {
        let distinct: HashSet<&[Value]> = ds.rows().iter().map(Vec::as_slice).collect();
        let duplicates = count(DuplicateRecordRule.evaluate(&ds));
        prop_assert_eq!(duplicates, ds.row_count() - distinct.len());
    }

    #[test]
    fn runs_are_deterministic(ds in dataset()) {
        let engine = Engine::new();
        prop_assert_eq!(engine.run(&ds), engine.run(&ds));
    }

    #[test]
    fn error_ratio_is_last_and_consistent(ds in dataset()) {
        let report = Engine::new().run(&ds);

        let last = report.results.last().unwrap();
        prop_assert_eq!(last.label(), "Error Ratio");

        let summed: usize = report.results.iter().map(|r| r.errors()).sum();
        prop_assert_eq!(summed, report.total_errors);

        if ds.row_count() == 0 {
            prop_assert_eq!(report.error_ratio, 0.0);
        } else {
            let expected = report.total_errors as f64 / ds.cell_count() as f64;
            prop_assert!((report.error_ratio - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn type_driven_emits_one_check_per_column(ds in dataset()) {
        let report = Engine::new().run(&ds);
        prop_assert_eq!(report.results.len(), ds.column_count() + 3);
    }

    #[test]
    fn schema_aware_never_aborts(ds in dataset()) {
        let engine = Engine::schema_aware(SchemaConfig::default()).unwrap();
        let report = engine.run(&ds);
        // Missing, duplicates, two dates, range, identifier, categorical, ratio
        prop_assert_eq!(report.results.len(), 8);
    }

    #[test]
    fn range_counts_values_outside_bound(values in prop::collection::vec(-50i64..200, 0..40)) {
        let expected = values.iter().filter(|v| **v < 0 || **v > 120).count();
        let rows = values.iter().map(|v| vec![Value::from(*v)]).collect();
        let ds = Dataset::from_rows(&["n"], rows).unwrap();

        let got = count(RangeRule::default().evaluate(ds.column(0).unwrap()));
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn parser_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = Parser::new().parse_bytes(&data);
    }
}
