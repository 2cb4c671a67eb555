//! Kinds command - show the inferred kind of every column.

use std::path::PathBuf;

use assay::classify_all;
use colored::Colorize;

pub fn run(file: PathBuf, delimiter: Option<char>) -> Result<(), Box<dyn std::error::Error>> {
    let parser = super::parser(delimiter, None)?;
    let session = super::load(&parser, &file)?;
    let dataset = session.dataset().ok_or("no dataset loaded")?;

    let kinds = classify_all(dataset);
    let width = kinds.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    println!("{}", "Column kinds:".yellow().bold());
    for (name, kind) in &kinds {
        println!("  {:<width$}  {}", name, kind.label().cyan());
    }

    Ok(())
}
