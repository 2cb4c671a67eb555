//! The aggregator: runs rules in a fixed order and computes the error ratio.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::{Column, Dataset};
use crate::schema::{Kind, RangeBound, SchemaBinding, SchemaConfig, classify, classify_all};
use crate::validation::{
    AllowedValuesRule, CheckResult, CheckValue, ColumnRule, DatasetRule, DateFormatRule,
    DuplicateRecordRule, ErrorTally, MissingValueRule, RangeRule, UniquenessRule,
};

/// Label of the summary entry that closes every report.
pub const ERROR_RATIO_LABEL: &str = "Error Ratio";

/// How rules are selected for columns.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineMode {
    /// One rule per column, chosen from the inferred kind.
    TypeDriven,
    /// Rules bound to the named columns of a fixed schema.
    SchemaAware(SchemaConfig),
}

/// Configuration for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rule selection mode.
    pub mode: EngineMode,
    /// Valid range for numeric columns in type-driven mode.
    pub numeric_range: RangeBound,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::TypeDriven,
            numeric_range: RangeBound::default(),
        }
    }
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Check results in evaluation order; the error ratio is last.
    pub results: Vec<CheckResult>,
    /// Kind used for each column, in column order.
    pub kinds: IndexMap<String, Kind>,
    /// Sum of all errors contributed by the checks.
    pub total_errors: usize,
    /// Rows x columns.
    pub total_cells: usize,
    /// `total_errors / total_cells`, or 0 for an empty dataset.
    pub error_ratio: f64,
}

impl Report {
    /// Look up a result by label.
    pub fn get(&self, label: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.label() == label)
    }

    /// The `(label, display value)` pairs handed to a report sink.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.results
            .iter()
            .map(|r| (r.label(), r.value().to_string()))
            .collect()
    }
}

/// Collects results and keeps the tally in step with them.
struct ReportBuilder {
    results: Vec<CheckResult>,
    tally: ErrorTally,
}

impl ReportBuilder {
    fn new() -> Self {
        Self {
            results: Vec::new(),
            tally: ErrorTally::new(),
        }
    }

    fn push(&mut self, result: CheckResult) {
        debug!("{}: {}", result.label(), result.value());
        self.tally.record(&result);
        self.results.push(result);
    }

    fn finish(mut self, dataset: &Dataset, kinds: IndexMap<String, Kind>) -> Report {
        let total_cells = dataset.cell_count();
        let error_ratio = self.tally.ratio(total_cells);
        self.results.push(CheckResult::new(
            ERROR_RATIO_LABEL,
            CheckValue::Percentage(error_ratio),
        ));

        Report {
            results: self.results,
            kinds,
            total_errors: self.tally.total(),
            total_cells,
            error_ratio,
        }
    }
}

/// The data quality checking engine.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a type-driven engine with the default numeric range.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with custom configuration, validating any schema.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        if let EngineMode::SchemaAware(schema) = &config.mode {
            schema.validate()?;
        }
        Ok(Self { config })
    }

    /// Create a schema-aware engine.
    pub fn schema_aware(schema: SchemaConfig) -> Result<Self> {
        Self::with_config(EngineConfig {
            mode: EngineMode::SchemaAware(schema),
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every applicable check over the dataset.
    ///
    /// Dataset-level checks come first, then column checks, then the error
    /// ratio. Each call starts from an empty result list and a zero tally.
    pub fn run(&self, dataset: &Dataset) -> Report {
        let mut builder = ReportBuilder::new();

        builder.push(CheckResult::new(
            "Missing Values",
            MissingValueRule.evaluate(dataset),
        ));
        builder.push(CheckResult::new(
            "Duplicate Records",
            DuplicateRecordRule.evaluate(dataset),
        ));

        let kinds = match &self.config.mode {
            EngineMode::TypeDriven => self.run_type_driven(dataset, &mut builder),
            EngineMode::SchemaAware(schema) => Self::run_schema_aware(schema, dataset, &mut builder),
        };

        let report = builder.finish(dataset, kinds);
        info!(
            "Checked {} rows x {} columns: {} errors ({:.2}%)",
            dataset.row_count(),
            dataset.column_count(),
            report.total_errors,
            report.error_ratio * 100.0
        );
        report
    }

    fn run_type_driven(
        &self,
        dataset: &Dataset,
        builder: &mut ReportBuilder,
    ) -> IndexMap<String, Kind> {
        let kinds = classify_all(dataset);
        for (column, kind) in dataset.columns().zip(kinds.values()) {
            if let Some(result) = self.check_by_kind(column, *kind) {
                builder.push(result);
            }
        }
        kinds
    }

    /// The single rule applied to a column of the given kind, if any.
    fn check_by_kind(&self, column: Column<'_>, kind: Kind) -> Option<CheckResult> {
        let name = column.name();
        match kind {
            Kind::Datetime => Some(CheckResult::new(
                format!("{} Date Format", name),
                DateFormatRule.evaluate(column),
            )),
            Kind::Numeric => Some(CheckResult::new(
                format!("{} Out-of-Range Values", name),
                RangeRule::new(self.config.numeric_range).evaluate(column),
            )),
            Kind::Text => Some(CheckResult::new(
                format!("{} Non-Unique Text Values", name),
                UniquenessRule.evaluate(column),
            )),
            Kind::Categorical | Kind::Identifier => None,
        }
    }

    fn run_schema_aware(
        schema: &SchemaConfig,
        dataset: &Dataset,
        builder: &mut ReportBuilder,
    ) -> IndexMap<String, Kind> {
        let binding = SchemaBinding::resolve(schema, dataset);
        for name in binding.missing_columns() {
            warn!("Configured column '{}' not found in dataset", name);
        }

        for (name, column) in &binding.dates {
            builder.push(bound_check(
                format!("'{}' Date Format", name),
                *column,
                &DateFormatRule,
            ));
        }

        builder.push(bound_check(
            format!("Out-of-range {} Values", schema.numeric.column),
            binding.numeric,
            &RangeRule::new(schema.numeric.range),
        ));

        builder.push(bound_check(
            format!("Non-unique {}s", schema.identifier),
            binding.identifier,
            &UniquenessRule,
        ));

        builder.push(bound_check(
            format!("Invalid {}s", schema.categorical.column),
            binding.categorical,
            &AllowedValuesRule::new(schema.categorical.allowed.iter().cloned()),
        ));

        dataset
            .columns()
            .map(|column| {
                let kind = binding
                    .role_of(column.position())
                    .map(Kind::from_role)
                    .unwrap_or_else(|| classify(column));
                (column.name().to_string(), kind)
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a rule on a bound column, or report the column as missing.
fn bound_check(label: String, column: Option<Column<'_>>, rule: &dyn ColumnRule) -> CheckResult {
    match column {
        Some(column) => CheckResult::new(label, rule.evaluate(column)),
        None => CheckResult::new(label, CheckValue::ColumnMissing),
    }
}
