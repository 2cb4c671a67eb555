//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Assay: data quality checks for tabular files
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run data quality checks and print the report
    Check {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON schema binding checks to named columns
        #[arg(short, long, value_name = "SCHEMA", conflicts_with = "default_schema")]
        schema: Option<PathBuf>,

        /// Use the built-in subscription schema (User ID, Join Date, Age, ...)
        #[arg(long)]
        default_schema: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Only check the first N rows
        #[arg(long, value_name = "N")]
        max_rows: Option<usize>,
    },

    /// Show the inferred kind of every column
    Kinds {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_flags() {
        let cli = Cli::try_parse_from([
            "assay", "check", "users.csv", "--default-schema", "--json", "-d", ";",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                default_schema,
                json,
                delimiter,
                schema,
                ..
            } => {
                assert!(default_schema);
                assert!(json);
                assert_eq!(delimiter, Some(';'));
                assert!(schema.is_none());
            }
            Commands::Kinds { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn test_schema_conflicts_with_default() {
        let result = Cli::try_parse_from([
            "assay",
            "check",
            "users.csv",
            "--schema",
            "s.json",
            "--default-schema",
        ]);
        assert!(result.is_err());
    }
}
