//! # javelint-java
//!
//! Java front end for javelint: parses Java source with Tree-sitter and
//! lowers the CST into the `javelint-core` syntax-tree model rules run
//! over.
//!
//! The front end performs no type resolution. Every type reference in
//! the trees it produces is unresolved, so rules take their name-based
//! paths unless the host supplies a populated
//! [`TypeIndex`](javelint_core::TypeIndex) alongside.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;

pub use parser::{JavaParser, ParseError};
