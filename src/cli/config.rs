//! `rbz.json` project configuration.
//!
//! ```json
//! { "checkerOptions": { "parallel": true, "redeclareVariancedMembers": false,
//!                       "reportUnresolvedAncestors": true, "threads": 4 } }
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::checker::CheckerOptions;
use crate::cli::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "rbz.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbzConfig {
    #[serde(default)]
    pub checker_options: Option<CheckerOptionsConfig>,
}

/// `checkerOptions` as written; unset keys fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerOptionsConfig {
    #[serde(default)]
    pub parallel: Option<bool>,
    #[serde(default)]
    pub redeclare_varianced_members: Option<bool>,
    #[serde(default)]
    pub report_unresolved_ancestors: Option<bool>,
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Options after merging defaults, `rbz.json` and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub checker: CheckerOptions,
    pub threads: Option<usize>,
}

pub fn parse_config(source: &str) -> Result<RbzConfig> {
    serde_json::from_str(source).context("failed to parse rbz.json")
}

pub fn load_config(path: &Path) -> Result<RbzConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid config: {}", path.display()))
}

/// `rbz.json` in `dir`, if present.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Resolve an explicit `--config` value, which may name a file or a directory.
pub fn resolve_config_path(cwd: &Path, explicit: &Path) -> Result<PathBuf> {
    let mut candidate = if explicit.is_absolute() {
        explicit.to_path_buf()
    } else {
        cwd.join(explicit)
    };
    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }
    if !candidate.is_file() {
        bail!("config not found at {}", candidate.display());
    }
    Ok(candidate)
}

pub fn resolve_options(config: Option<&RbzConfig>, args: &CliArgs) -> ResolvedOptions {
    let mut checker = CheckerOptions::default();
    let mut threads = None;

    if let Some(file) = config.and_then(|config| config.checker_options.as_ref()) {
        if let Some(parallel) = file.parallel {
            checker.parallel = parallel;
        }
        if let Some(redeclare) = file.redeclare_varianced_members {
            checker.redeclare_varianced_members = redeclare;
        }
        if let Some(report) = file.report_unresolved_ancestors {
            checker.report_unresolved_ancestors = report;
        }
        threads = file.threads;
    }

    if args.sequential {
        checker.parallel = false;
    }
    if args.redeclare_varianced_members {
        checker.redeclare_varianced_members = true;
    }
    if args.allow_unresolved {
        checker.report_unresolved_ancestors = false;
    }
    if args.threads.is_some() {
        threads = args.threads;
    }

    ResolvedOptions { checker, threads }
}
