//! Per-unit context threaded through rule execution.

use crate::resolve::TypeIndex;
use std::path::{Path, PathBuf};

/// Facts about the compilation unit being checked.
///
/// Built once per unit by the host and shared read-only by every rule.
/// Nothing in here is mutated during a check; rules keep their working
/// state in visitors of their own.
#[derive(Debug, Clone)]
pub struct UnitContext<'a> {
    /// Path of the source file as handed to the host.
    pub path: &'a Path,
    /// Path relative to the analysis root, used in reported locations.
    pub relative_path: PathBuf,
    /// Resolved class metadata for this session. Holds only the universal
    /// root when no resolver ran.
    pub types: &'a TypeIndex,
}

impl<'a> UnitContext<'a> {
    /// Creates a context for `path`, relativizing it against `root`.
    ///
    /// Paths outside `root` are kept as given.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path, types: &'a TypeIndex) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            relative_path,
            types,
        }
    }
}
