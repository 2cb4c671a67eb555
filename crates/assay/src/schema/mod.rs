//! Column kinds, kind inference, and the fixed-schema configuration.

mod classify;
mod config;
mod types;

pub use classify::{classify, classify_all, matches_date_pattern};
pub use config::{CategoricalColumn, NumericColumn, RangeBound, SchemaBinding, SchemaConfig};
pub use types::{Kind, Role};
