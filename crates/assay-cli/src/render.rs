//! Terminal rendering of a check report.

use assay::{CheckValue, FormatStatus, Report};
use colored::{ColoredString, Colorize};

const LABEL_HEADER: &str = "Data Quality Check";
const VALUE_HEADER: &str = "Result";

/// Render the report as a two-column table.
///
/// Rows alternate background shading; problems are red and missing
/// columns yellow.
pub fn table(report: &Report) -> String {
    let label_width = report
        .results
        .iter()
        .map(|r| r.label().chars().count())
        .chain(std::iter::once(LABEL_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = report
        .results
        .iter()
        .map(|r| r.value().to_string().chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        format!("{:<label_width$}", LABEL_HEADER).bold(),
        format!("{:<value_width$}", VALUE_HEADER).bold()
    ));
    out.push_str(&format!(
        "{}  {}\n",
        "─".repeat(label_width).dimmed(),
        "─".repeat(value_width).dimmed()
    ));

    for (i, result) in report.results.iter().enumerate() {
        let label = format!("{:<label_width$}", result.label());
        let value = styled_value(result.value(), value_width);
        let (label, value) = if i % 2 == 1 {
            (label.on_bright_black(), value.on_bright_black())
        } else {
            (label.normal(), value)
        };
        out.push_str(&format!("{}  {}\n", label, value));
    }

    out
}

fn styled_value(value: CheckValue, width: usize) -> ColoredString {
    let text = format!("{:<width$}", value.to_string());
    match value {
        CheckValue::ColumnMissing => text.yellow(),
        CheckValue::Format(FormatStatus::Inconsistent) => text.red().bold(),
        CheckValue::Percentage(_) => {
            if value.is_problem() {
                text.red().bold()
            } else {
                text.green().bold()
            }
        }
        _ if value.is_problem() => text.red(),
        _ => text.normal(),
    }
}

/// One line summary printed under the table.
pub fn summary(report: &Report) -> String {
    format!(
        "{} errors across {} cells",
        report.total_errors, report.total_cells
    )
}
