//! Rule trait for defining lint rules.

use crate::context::UnitContext;
use crate::tree::SyntaxTree;
use crate::types::{Severity, Violation};

/// A lint rule over Java compilation units.
///
/// `check` receives one unit read-only and returns the violations it
/// found. Implementations must keep all per-unit state inside `check`,
/// typically in a visitor constructed there, so one rule value can serve
/// any number of units in any order without state leaking between them.
///
/// # Example
///
/// ```ignore
/// use javelint_core::{Rule, Severity, SyntaxTree, UnitContext, Violation};
///
/// #[derive(Debug, Default)]
/// struct NoNestedTypes;
///
/// impl Rule for NoNestedTypes {
///     fn name(&self) -> &'static str {
///         "no-nested-types"
///     }
///
///     fn code(&self) -> &'static str {
///         "JL999"
///     }
///
///     fn check(&self, ctx: &UnitContext<'_>, tree: &SyntaxTree) -> Vec<Violation> {
///         // Walk the tree with a visitor built here and collect findings.
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Kebab-case rule name (e.g. "signature-declare-throws-exception").
    fn name(&self) -> &'static str;

    /// Rule code (e.g. "JL001").
    fn code(&self) -> &'static str;

    /// Brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single compilation unit and returns any violations found.
    fn check(&self, ctx: &UnitContext<'_>, tree: &SyntaxTree) -> Vec<Violation>;
}

/// Boxed rule trait object.
pub type RuleBox = Box<dyn Rule>;
