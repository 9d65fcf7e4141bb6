//! Violation types and analysis results.

use crate::tree::{NodeId, SyntaxTree};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Severity level of a violation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding.
    Info,
    /// Should be fixed but does not fail the build by default.
    Warning,
    /// Fails the build.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source position of a violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File the violation was found in, relative to the analysis root.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
    /// Byte offset of the flagged source, when known.
    pub offset: usize,
    /// Byte length of the flagged source, when known.
    pub length: usize,
}

impl Location {
    /// Creates a location without span information.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a location pointing at `node` of `tree`, carrying the byte
    /// span the front end recorded for it.
    #[must_use]
    pub fn from_node(file: impl Into<PathBuf>, tree: &SyntaxTree, node: NodeId) -> Self {
        Self::new(file, tree.line(node), tree.column(node))
            .with_span(tree.offset(node), tree.length(node))
    }

    /// Attaches a byte span.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A suggested remediation attached to a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What the author of the flagged code should do instead.
    pub message: String,
}

impl Suggestion {
    /// Creates a suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g. "JL001").
    pub code: String,
    /// Rule name (e.g. "signature-declare-throws-exception").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable description of what is wrong.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a violation without a suggestion.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches a remediation hint.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Miette-compatible diagnostic view of a violation.
///
/// Lets embedders surface violations through `miette` report handlers
/// alongside their own diagnostics.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(violation: &Violation) -> Self {
        Self {
            message: format!(
                "{} [{}] {}",
                violation.location, violation.code, violation.message
            ),
            help: violation
                .suggestion
                .as_ref()
                .map(|suggestion| suggestion.message.clone()),
        }
    }
}

/// Outcome of an analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files that were checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any violation has [`Severity::Error`].
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Whether any violation is at or above `severity`.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.severity >= severity)
    }

    /// Violation counts as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;
        for violation in &self.violations {
            match violation.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        (errors, warnings, infos)
    }

    /// Appends all violations from `other`.
    pub fn extend(&mut self, other: LintResult) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }

    /// Sorts violations by file, then line, then column.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}
