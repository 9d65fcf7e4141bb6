//! Locates the configuration file a run should use.
//!
//! An explicit `--config` path always wins. Otherwise the first existing
//! candidate is taken: `javelint.toml` before `.javelint.toml` next to the
//! checked path, and finally `config.toml` under the global directory
//! (`$JAVELINT_CONFIG_DIR`, defaulting to `~/.javelint`). When nothing
//! exists the run proceeds on built-in defaults.

use std::path::{Path, PathBuf};

/// Project-level file names, visible one first.
const PROJECT_FILES: [&str; 2] = ["javelint.toml", ".javelint.toml"];

/// File name inside the global directory.
const GLOBAL_FILE: &str = "config.toml";

/// Environment override for the global directory.
const GLOBAL_DIR_ENV: &str = "JAVELINT_CONFIG_DIR";

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`. Taken verbatim; a missing file is the
    /// loader's error to report.
    Explicit(PathBuf),
    /// A project file next to the checked path.
    Project(PathBuf),
    /// The shared file under the global directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// Path to load, if this source carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Project(path) | Self::Global(path) => Some(path),
            Self::Default => None,
        }
    }

    /// Whether this source is the global fallback.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the configuration source for a run on `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    first_existing(candidates(project_dir, global_dir().as_deref()))
}

/// Ordered candidate list for one run.
fn candidates(project_dir: &Path, global: Option<&Path>) -> Vec<ConfigSource> {
    let mut list: Vec<ConfigSource> = PROJECT_FILES
        .into_iter()
        .map(|name| ConfigSource::Project(project_dir.join(name)))
        .collect();
    if let Some(dir) = global {
        list.push(ConfigSource::Global(dir.join(GLOBAL_FILE)));
    }
    list
}

/// First candidate whose file exists, or [`ConfigSource::Default`].
fn first_existing(candidates: Vec<ConfigSource>) -> ConfigSource {
    for candidate in candidates {
        match candidate.path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using config: {}", path.display());
                return candidate;
            }
            _ => {}
        }
    }
    ConfigSource::Default
}

fn global_dir() -> Option<PathBuf> {
    std::env::var_os(GLOBAL_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".javelint")))
}
