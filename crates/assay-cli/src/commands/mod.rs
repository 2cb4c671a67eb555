//! CLI command implementations.

pub mod check;
pub mod kinds;

use std::path::Path;

use assay::{Parser, ParserConfig, Session};

/// Build a parser from the shared loading flags.
pub(crate) fn parser(
    delimiter: Option<char>,
    max_rows: Option<usize>,
) -> Result<Parser, Box<dyn std::error::Error>> {
    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => return Err(format!("Delimiter must be a single ASCII character, got '{}'", c).into()),
        None => None,
    };

    Ok(Parser::with_config(ParserConfig {
        delimiter,
        max_rows,
        ..ParserConfig::default()
    }))
}

/// Load a file into a fresh session.
pub(crate) fn load(parser: &Parser, file: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.load_file(parser, file)?;
    Ok(session)
}
