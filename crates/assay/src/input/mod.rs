//! Input loading and the in-memory dataset model.

mod parser;
mod source;
mod value;

pub use parser::{Parser, ParserConfig};
pub use source::{Column, Dataset, SourceMetadata};
pub use value::Value;
