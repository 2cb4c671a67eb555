//! Fixed column schema for the schema-aware engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::Role;
use crate::error::{AssayError, Result};
use crate::input::{Column, Dataset};

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub min: f64,
    pub max: f64,
}

impl RangeBound {
    /// Create a new bound.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a value lies inside the bound (both ends inclusive).
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AssayError::Config(format!(
                "range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(AssayError::Config(format!(
                "range min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for RangeBound {
    fn default() -> Self {
        Self::new(0.0, 120.0)
    }
}

/// Numeric column with its valid range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub column: String,
    #[serde(flatten)]
    pub range: RangeBound,
}

/// Categorical column with its allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    pub allowed: Vec<String>,
}

/// Which logical role maps to which column name.
///
/// Loaded from JSON:
///
/// ```json
/// {
///   "identifier": "User ID",
///   "date_columns": ["Join Date", "Last Payment Date"],
///   "numeric": { "column": "Age", "min": 0, "max": 120 },
///   "categorical": { "column": "Subscription Type", "allowed": ["Basic", "Standard", "Premium"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub identifier: String,
    #[serde(default)]
    pub date_columns: Vec<String>,
    pub numeric: NumericColumn,
    pub categorical: CategoricalColumn,
}

impl Default for SchemaConfig {
    /// The subscription user-base schema.
    fn default() -> Self {
        Self {
            identifier: "User ID".to_string(),
            date_columns: vec!["Join Date".to_string(), "Last Payment Date".to_string()],
            numeric: NumericColumn {
                column: "Age".to_string(),
                range: RangeBound::default(),
            },
            categorical: CategoricalColumn {
                column: "Subscription Type".to_string(),
                allowed: vec![
                    "Basic".to_string(),
                    "Standard".to_string(),
                    "Premium".to_string(),
                ],
            },
        }
    }
}

impl SchemaConfig {
    /// Parse and validate a schema from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SchemaConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a schema from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text)
    }

    /// Check the schema for blank names, bad ranges, and empty allowed sets.
    pub fn validate(&self) -> Result<()> {
        let names = std::iter::once(("identifier", &self.identifier))
            .chain(self.date_columns.iter().map(|c| ("date column", c)))
            .chain(std::iter::once(("numeric column", &self.numeric.column)))
            .chain(std::iter::once(("categorical column", &self.categorical.column)));
        for (what, name) in names {
            if name.trim().is_empty() {
                return Err(AssayError::Config(format!("{} name is empty", what)));
            }
        }

        self.numeric.range.validate()?;

        if self.categorical.allowed.is_empty() {
            return Err(AssayError::Config(format!(
                "allowed value set for '{}' is empty",
                self.categorical.column
            )));
        }
        Ok(())
    }
}

/// A schema resolved against one dataset.
///
/// Each role is looked up once; a configured name absent from the dataset
/// resolves to `None` and its check reports the column as missing.
#[derive(Debug, Clone)]
pub struct SchemaBinding<'a> {
    pub config: &'a SchemaConfig,
    pub identifier: Option<Column<'a>>,
    pub dates: Vec<(&'a str, Option<Column<'a>>)>,
    pub numeric: Option<Column<'a>>,
    pub categorical: Option<Column<'a>>,
}

impl<'a> SchemaBinding<'a> {
    /// Resolve every configured column name against the dataset.
    pub fn resolve(config: &'a SchemaConfig, dataset: &'a Dataset) -> Self {
        Self {
            config,
            identifier: dataset.column_by_name(&config.identifier),
            dates: config
                .date_columns
                .iter()
                .map(|name| (name.as_str(), dataset.column_by_name(name)))
                .collect(),
            numeric: dataset.column_by_name(&config.numeric.column),
            categorical: dataset.column_by_name(&config.categorical.column),
        }
    }

    /// Configured column names that the dataset does not have.
    pub fn missing_columns(&self) -> Vec<&'a str> {
        let mut missing = Vec::new();
        for (name, column) in &self.dates {
            if column.is_none() {
                missing.push(*name);
            }
        }
        if self.numeric.is_none() {
            missing.push(self.config.numeric.column.as_str());
        }
        if self.identifier.is_none() {
            missing.push(self.config.identifier.as_str());
        }
        if self.categorical.is_none() {
            missing.push(self.config.categorical.column.as_str());
        }
        missing
    }

    /// Role bound to the column at `position`, if any.
    ///
    /// Later roles win when one column is bound twice, in check order:
    /// date, numeric, identifier, categorical.
    pub fn role_of(&self, position: usize) -> Option<Role> {
        let at = |c: &Option<Column<'_>>| c.is_some_and(|c| c.position() == position);
        if at(&self.categorical) {
            Some(Role::Categorical)
        } else if at(&self.identifier) {
            Some(Role::Identifier)
        } else if at(&self.numeric) {
            Some(Role::Numeric)
        } else if self.dates.iter().any(|(_, c)| at(c)) {
            Some(Role::Date)
        } else {
            None
        }
    }
}
