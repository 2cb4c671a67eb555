//! Host-owned state: the loaded dataset and the last report.

use std::path::Path;

use tracing::info;

use crate::engine::{Engine, Report};
use crate::error::{AssayError, Result};
use crate::input::{Dataset, Parser, SourceMetadata};

/// The current dataset and the report of the most recent run.
///
/// Loading a new dataset discards the previous report; running checks
/// replaces it wholesale.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    source: Option<SourceMetadata>,
    report: Option<Report>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an in-memory dataset current.
    pub fn load(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.source = None;
        self.report = None;
    }

    /// Parse a file and make it the current dataset.
    pub fn load_file(&mut self, parser: &Parser, path: impl AsRef<Path>) -> Result<&Dataset> {
        let (dataset, source) = parser.parse_file(path)?;
        info!(
            "Loaded {} ({} rows, {} columns)",
            source.file, source.row_count, source.column_count
        );
        self.report = None;
        self.source = Some(source);
        Ok(self.dataset.insert(dataset))
    }

    /// Run the engine over the current dataset.
    ///
    /// Fails with [`AssayError::NoDatasetLoaded`] if nothing is loaded, in
    /// which case the previous report is left untouched.
    pub fn run_checks(&mut self, engine: &Engine) -> Result<&Report> {
        let dataset = self.dataset.as_ref().ok_or(AssayError::NoDatasetLoaded)?;
        let report = engine.run(dataset);
        Ok(self.report.insert(report))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Metadata of the loaded file, if the dataset came from disk.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }
}
