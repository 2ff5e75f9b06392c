//! Load a snapshot, resolve options, run the checker.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::checker::check_program;
use crate::cli::args::CliArgs;
use crate::cli::config::{ResolvedOptions, find_config, load_config, resolve_config_path, resolve_options};
use crate::common::Diagnostic;
use crate::symbols::{ProgramSnapshot, SymbolTable};

pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Directory relative diagnostic file names are resolved against.
    pub base_dir: PathBuf,
    pub class_count: usize,
    pub options: ResolvedOptions,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub fn check(args: &CliArgs, cwd: &Path) -> Result<CheckResult> {
    let snapshot_path = if args.snapshot.is_absolute() {
        args.snapshot.clone()
    } else {
        cwd.join(&args.snapshot)
    };
    let base_dir = snapshot_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    let config_path = match &args.config {
        Some(explicit) => Some(resolve_config_path(cwd, explicit)?),
        None => find_config(&base_dir),
    };
    let config = config_path.as_deref().map(load_config).transpose()?;
    let options = resolve_options(config.as_ref(), args);
    debug!(config = ?config_path, ?options, "options resolved");

    let table = load_snapshot(&snapshot_path)?;
    let diagnostics = run(&table, &options)?;
    info!(
        classes = table.len(),
        diagnostics = diagnostics.len(),
        "check finished"
    );

    Ok(CheckResult {
        diagnostics,
        base_dir,
        class_count: table.len(),
        options,
    })
}

pub fn load_snapshot(path: &Path) -> Result<SymbolTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    let snapshot = ProgramSnapshot::from_json(&text)
        .with_context(|| format!("failed to parse snapshot: {}", path.display()))?;
    snapshot
        .into_symbol_table()
        .with_context(|| format!("malformed program in {}", path.display()))
}

/// Check on a dedicated pool when a thread count is configured.
pub fn run(table: &SymbolTable, options: &ResolvedOptions) -> Result<Vec<Diagnostic>> {
    match options.threads {
        Some(threads) if options.checker.parallel => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("failed to build checker thread pool")?;
            Ok(pool.install(|| check_program(table, &options.checker)))
        }
        _ => Ok(check_program(table, &options.checker)),
    }
}
