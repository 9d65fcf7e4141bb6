//! Analyzer orchestrating rule execution over compilation units.

use crate::config::Config;
use crate::context::UnitContext;
use crate::rule::{Rule, RuleBox};
use crate::tree::SyntaxTree;
use crate::types::Violation;
use tracing::debug;

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Config,
}

impl AnalyzerBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers an already boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Finishes building.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config,
        }
    }
}

/// Runs registered rules over compilation units handed to it.
///
/// The analyzer never touches the filesystem; discovery and parsing
/// belong to the host. Disabled rules are skipped and configured severity
/// overrides are applied to whatever the remaining rules report.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Number of registered rules, disabled ones included.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks one unit with every enabled rule, in registration order.
    ///
    /// Rules build their per-unit state inside `check`, so units may be
    /// passed in any order without earlier units influencing later ones.
    #[must_use]
    pub fn check_unit(&self, ctx: &UnitContext<'_>, tree: &SyntaxTree) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            let mut found = rule.check(ctx, tree);
            if let Some(severity) = self.config.rule_severity(rule.name()) {
                for violation in &mut found {
                    violation.severity = severity;
                }
            }
            violations.extend(found);
        }
        debug!(
            "{}: {} violation(s)",
            ctx.relative_path.display(),
            violations.len()
        );
        violations
    }
}
