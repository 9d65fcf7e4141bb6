//! # javelint-core
//!
//! Core library for linting Java compilation units.
//!
//! The crate defines the pieces a lint run is assembled from:
//!
//! - [`SyntaxTree`] and [`TreeBuilder`]: the arena-backed tree model a
//!   front end lowers Java source into
//! - [`TypeIndex`]: resolved class metadata from an optional external
//!   resolver, seeded with `java.lang.Object`
//! - [`Visitor`] and [`walk_tree`]: depth-first dispatch over a unit
//! - [`Rule`]: the trait lint rules implement
//! - [`Analyzer`]: runs configured rules over units and collects
//!   [`Violation`]s
//!
//! ## Example
//!
//! ```ignore
//! use javelint_core::{Analyzer, Config, TypeIndex, UnitContext};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(SomeRule::new())
//!     .config(Config::default())
//!     .build();
//!
//! let types = TypeIndex::new();
//! let ctx = UnitContext::new(path, root, &types);
//! let violations = analyzer.check_unit(&ctx, &tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod resolve;
mod rule;
mod tree;
mod types;
mod walk;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::UnitContext;
pub use resolve::{ClassId, TypeIndex, TypeResolution};
pub use rule::{Rule, RuleBox};
pub use tree::{NodeId, NodeKind, SyntaxTree, TreeBuilder};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use walk::{walk_tree, Visitor};
