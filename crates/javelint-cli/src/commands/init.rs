//! Init command implementation.

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "javelint.toml";

const DEFAULT_CONFIG: &str = r#"# javelint configuration
# Severity that makes the check command exit non-zero.
# One of: error, warning, info. Defaults to error.
# fail_on = "error"

[analyzer]
# Directory to scan, relative to the checked path.
# root = "."
exclude = ["**/target/**", "**/build/**", "**/generated/**"]
respect_gitignore = true

[rules.signature-declare-throws-exception]
enabled = true
# severity = "error"
"#;

/// Creates a starter configuration file in the current directory.
pub fn run(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists. Use --force to overwrite.");
    }

    fs::write(path, DEFAULT_CONFIG)?;

    println!("Created {CONFIG_FILE}");
    println!();
    println!("Next steps:");
    println!("  1. Adjust [analyzer] exclude patterns for your project layout");
    println!("  2. Run `javelint check` to analyze the current directory");
    println!("  3. Run `javelint list-rules` to see what can be configured");

    Ok(())
}
