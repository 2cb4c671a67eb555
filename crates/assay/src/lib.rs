//! Assay: data-quality checks for tabular datasets.
//!
//! Assay loads a delimited file into a typed [`Dataset`], picks checks for
//! each column, and reports defect counts with a single error ratio.
//!
//! # Engine modes
//!
//! - **Type-driven**: every column gets one check chosen from its inferred
//!   [`Kind`], independent of column names.
//! - **Schema-aware**: checks are bound to named columns from a
//!   [`SchemaConfig`]; absent columns are reported, not fatal.
//!
//! # Example
//!
//! ```no_run
//! use assay::{Engine, Parser, Session};
//!
//! let mut session = Session::new();
//! session.load_file(&Parser::new(), "users.csv").unwrap();
//!
//! let report = session.run_checks(&Engine::new()).unwrap();
//! for (label, value) in report.pairs() {
//!     println!("{}: {}", label, value);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod input;
pub mod schema;
pub mod validation;

mod session;

pub use engine::{ERROR_RATIO_LABEL, Engine, EngineConfig, EngineMode, Report};
pub use error::{AssayError, Result};
pub use input::{Column, Dataset, Parser, ParserConfig, SourceMetadata, Value};
pub use schema::{Kind, RangeBound, Role, SchemaConfig, classify, classify_all};
pub use session::Session;
pub use validation::{CheckResult, CheckValue, ErrorTally, FormatStatus};
