//! Check command - run the checks and print the report.

use std::path::{Path, PathBuf};

use assay::{Engine, EngineConfig, EngineMode, SchemaConfig};
use colored::Colorize;
use tracing::info;

use crate::render;

/// Arguments for `assay check`.
pub struct CheckArgs {
    pub file: PathBuf,
    pub schema: Option<PathBuf>,
    pub default_schema: bool,
    pub json: bool,
    pub delimiter: Option<char>,
    pub max_rows: Option<usize>,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parser = super::parser(args.delimiter, args.max_rows)?;
    let engine = Engine::with_config(EngineConfig {
        mode: mode(args.schema.as_deref(), args.default_schema)?,
        ..EngineConfig::default()
    })?;

    let mut session = super::load(&parser, &args.file)?;
    let report = session.run_checks(&engine)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if let Some(source) = session.source() {
        println!(
            "{} {} ({} rows, {} columns)",
            "Checked".cyan().bold(),
            source.file.white(),
            source.row_count,
            source.column_count
        );
        println!();
    }

    let report = session.report().ok_or("no report produced")?;
    print!("{}", render::table(report));
    println!();
    println!("{}", render::summary(report).dimmed());

    Ok(())
}

/// Pick the engine mode from the schema flags.
fn mode(
    schema: Option<&Path>,
    default_schema: bool,
) -> Result<EngineMode, Box<dyn std::error::Error>> {
    if let Some(path) = schema {
        info!("Using schema from {}", path.display());
        return Ok(EngineMode::SchemaAware(SchemaConfig::load(path)?));
    }
    if default_schema {
        return Ok(EngineMode::SchemaAware(SchemaConfig::default()));
    }
    Ok(EngineMode::TypeDriven)
}
