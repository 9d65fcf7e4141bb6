//! # javelint-rules
//!
//! Built-in lint rules for javelint.
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | JL001 | `signature-declare-throws-exception` | Forbids declaring the generic `Exception` in throws clauses |
//!
//! ## Usage
//!
//! ```ignore
//! use javelint_core::Analyzer;
//! use javelint_rules::SignatureDeclareThrowsException;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(SignatureDeclareThrowsException::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod signature_declare_throws_exception;

pub use signature_declare_throws_exception::SignatureDeclareThrowsException;

/// Re-export of the core types rules are written against.
pub use javelint_core::{Rule, RuleBox, Severity, Violation};

/// Returns every built-in rule with default settings.
#[must_use]
pub fn builtin_rules() -> Vec<RuleBox> {
    vec![Box::new(SignatureDeclareThrowsException::new())]
}
