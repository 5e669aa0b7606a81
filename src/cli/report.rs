//! Summary printing, kept out of the library so it can be used without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stderr.
pub fn print(result: &RunResult) {
    print_to(result, &mut io::stderr().lock());
}

pub fn print_to<W: Write>(result: &RunResult, writer: &mut W) {
    let summary = &result.translated.summary;

    let _ = writeln!(
        writer,
        "{} {}: {} {} replaced with {} {}",
        SUCCESS_MARK.green(),
        result.input.display(),
        summary.matches,
        plural(summary.matches, "literal", "literals"),
        summary.labels,
        plural(summary.labels, "label", "labels"),
    );
    let _ = writeln!(writer, "  prefix: {}", result.translated.prefix);

    if let Some(config) = &result.config_path {
        let _ = writeln!(writer, "  config: {}", config.display());
    }
    if summary.skipped > 0 {
        let _ = writeln!(
            writer,
            "  {} non-text {} skipped",
            summary.skipped,
            plural(summary.skipped, "value", "values")
        );
    }
    if !summary.dropped.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {} dropped",
            summary.dropped.len().to_string().yellow(),
            plural(summary.dropped.len(), "translation", "translations")
        );
    }
    if let Some(output) = &result.output {
        let _ = writeln!(writer, "  written to {}", output.display());
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
