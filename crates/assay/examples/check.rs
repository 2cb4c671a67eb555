//! Example: Check a tabular data file with Assay.
//!
//! Usage:
//!   cargo run --example check -- <file_path> [--schema]
//!
//! With `--schema` the built-in subscription schema is used; otherwise
//! checks are chosen from each column's inferred kind.

use std::env;

use assay::{Engine, Parser, SchemaConfig, Session};

fn main() -> assay::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example check -- <file_path> [--schema]");
        std::process::exit(1);
    }

    let engine = if args.iter().any(|a| a == "--schema") {
        Engine::schema_aware(SchemaConfig::default())?
    } else {
        Engine::new()
    };

    let mut session = Session::new();
    session.load_file(&Parser::new(), &args[1])?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Assay Check: {}", args[1]);
    println!("{}", separator);

    let report = session.run_checks(&engine)?;

    println!("## Column Kinds");
    for (name, kind) in &report.kinds {
        println!("  {:<30} {}", name, kind);
    }
    println!();

    println!("## Results");
    for (label, value) in report.pairs() {
        println!("  {:<40} {}", label, value);
    }

    Ok(())
}
