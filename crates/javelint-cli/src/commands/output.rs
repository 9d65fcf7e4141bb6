//! Output formatting for check results.

use anyhow::Result;
use javelint_core::{LintResult, Severity};

use crate::OutputFormat;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Prints a lint result in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => CYAN,
    }
}

fn print_text(result: &LintResult) {
    if result.violations.is_empty() {
        println!(
            "{GREEN}✓{RESET} No issues found in {} file(s)",
            result.files_checked
        );
        return;
    }

    for violation in &result.violations {
        let color = severity_color(violation.severity);
        println!(
            "{color}{}{RESET} [{}] {}: {}",
            violation.severity, violation.code, violation.location, violation.message
        );
        if let Some(suggestion) = &violation.suggestion {
            println!("  {CYAN}= help:{RESET} {}", suggestion.message);
        }
    }

    let (errors, warnings, infos) = result.count_by_severity();
    println!();
    println!(
        "{BOLD}Found {} issue(s){RESET} ({errors} error(s), {warnings} warning(s), {infos} info) in {} file(s)",
        result.violations.len(),
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!(
            "{}:{}:{}: {} {} {}",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
            violation.severity,
            violation.code,
            violation.message
        );
    }
}
