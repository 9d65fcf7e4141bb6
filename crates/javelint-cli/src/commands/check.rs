//! Check command implementation.

use anyhow::{Context, Result};
use javelint_core::{Analyzer, Config, LintResult, RuleBox, Severity, TypeIndex, UnitContext};
use javelint_java::JavaParser;
use javelint_rules::{builtin_rules, SignatureDeclareThrowsException};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let fail_on = resolve_fail_on(&config)?;

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };

    let mut exclude_patterns = exclude;
    exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
    let respect_gitignore = config.analyzer.respect_gitignore;

    let mut builder = Analyzer::builder().config(config);
    for rule in selected_rules(rules_filter) {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build();

    let files = discover_files(&root, &exclude_patterns, respect_gitignore)?;

    tracing::info!(
        "Analyzing {} Java file(s) with {} rule(s)",
        files.len(),
        analyzer.rule_count()
    );

    let parser = JavaParser::new();
    let types = TypeIndex::new();
    let mut result = LintResult::new();

    for file_path in &files {
        let source_text = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let tree = match parser.parse(&source_text) {
            Ok(tree) => tree,
            Err(error) => {
                tracing::warn!("Skipping {}: {}", file_path.display(), error);
                continue;
            }
        };

        let ctx = UnitContext::new(file_path, &root, &types);
        result.violations.extend(analyzer.check_unit(&ctx, &tree));
        result.files_checked += 1;
    }

    result.sort();

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load {}", p.display()))
        }
    }
}

fn resolve_fail_on(config: &Config) -> Result<Severity> {
    match config.fail_on.as_deref() {
        None | Some("error") => Ok(Severity::Error),
        Some("warning") => Ok(Severity::Warning),
        Some("info") => Ok(Severity::Info),
        Some(other) => {
            anyhow::bail!("Unknown fail_on value `{other}`. Valid values: error, warning, info")
        }
    }
}

fn selected_rules(filter: Option<&str>) -> Vec<RuleBox> {
    let Some(filter) = filter else {
        return builtin_rules();
    };

    let mut rules: Vec<RuleBox> = Vec::new();
    for name in filter.split(',').map(str::trim) {
        match name {
            "signature-declare-throws-exception" | "JL001" => {
                rules.push(Box::new(SignatureDeclareThrowsException::new()));
            }
            unknown => tracing::warn!("Unknown rule: {unknown}"),
        }
    }
    rules
}

fn discover_files(
    root: &Path,
    exclude: &[String],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some("java") {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
