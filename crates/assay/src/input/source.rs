//! Dataset abstraction and source metadata.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;
use crate::error::{AssayError, Result};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Parsed tabular data: named, ordered columns and rows of typed values.
///
/// Every row holds exactly one value per column; [`Dataset::new`] rejects
/// anything else, so the column set is fixed once the dataset exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset, checking that names are unique and rows are rectangular.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(AssayError::DuplicateColumn(name.clone()));
            }
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns.len() {
                return Err(AssayError::RaggedRow {
                    row,
                    expected: columns.len(),
                    found: values.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Convenience constructor from borrowed column names.
    pub fn from_rows(columns: &[&str], rows: Vec<Vec<Value>>) -> Result<Self> {
        Self::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells (rows x columns).
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// A row as an ordered mapping from column name to value.
    pub fn row(&self, index: usize) -> Option<IndexMap<&str, &Value>> {
        let values = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(values.iter())
                .collect(),
        )
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a column view by position.
    pub fn column(&self, position: usize) -> Option<Column<'_>> {
        let name = self.columns.get(position)?;
        Some(Column {
            name,
            position,
            dataset: self,
        })
    }

    /// Get a column view by name.
    pub fn column_by_name(&self, name: &str) -> Option<Column<'_>> {
        let position = self.columns.iter().position(|c| c == name)?;
        self.column(position)
    }

    /// Iterate over all columns in order.
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> {
        (0..self.columns.len()).filter_map(move |i| self.column(i))
    }
}

/// A view over one named field across all rows.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    name: &'a str,
    position: usize,
    dataset: &'a Dataset,
}

impl<'a> Column<'a> {
    /// Column name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Zero-based position in the dataset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of values (one per row).
    pub fn len(&self) -> usize {
        self.dataset.row_count()
    }

    /// Returns true when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All values in row order, including nulls.
    pub fn values(self) -> impl Iterator<Item = &'a Value> {
        let Column {
            position, dataset, ..
        } = self;
        dataset.rows.iter().map(move |row| &row[position])
    }

    /// Values in row order, skipping nulls.
    pub fn non_null(self) -> impl Iterator<Item = &'a Value> {
        self.values().filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_rows(
            &["User ID", "Age"],
            vec![
                vec!["U1".into(), 25.into()],
                vec!["U2".into(), Value::Null],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Dataset::from_rows(&["a", "b"], vec![vec![1.into()]]).unwrap_err();
        assert!(matches!(
            err,
            AssayError::RaggedRow {
                row: 0,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = Dataset::from_rows(&["a", "a"], vec![]).unwrap_err();
        assert!(matches!(err, AssayError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_row_mapping_preserves_order() {
        let ds = sample();
        let row = ds.row(0).unwrap();
        let keys: Vec<_> = row.keys().copied().collect();
        assert_eq!(keys, vec!["User ID", "Age"]);
        assert_eq!(row["Age"], &Value::Number(25.0));
        assert!(ds.row(5).is_none());
    }

    #[test]
    fn test_column_views() {
        let ds = sample();
        let age = ds.column_by_name("Age").unwrap();
        assert_eq!(age.position(), 1);
        assert_eq!(age.len(), 2);
        assert_eq!(age.non_null().count(), 1);
        assert!(ds.column_by_name("Missing").is_none());
        assert_eq!(ds.columns().count(), 2);
        assert_eq!(ds.cell_count(), 4);
    }
}
