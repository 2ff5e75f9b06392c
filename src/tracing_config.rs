//! Logging setup for the rbz binary.
//!
//! Filtering comes from `RBZ_LOG` (or `RUST_LOG`) when set, otherwise from
//! the `-v` count on the command line. Output always goes to stderr; the
//! layout is chosen with `RBZ_LOG_FORMAT`:
//!
//! - `text` (default): one compact line per event, no timestamps
//! - `tree`: spans nested per checked class, via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! rbz -vv program.json
//! RBZ_LOG=rbz_checker=trace RBZ_LOG_FORMAT=tree rbz program.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Targets that `-v` turns on.
pub const RBZ_TARGETS: [&str; 4] = ["rbz", "rbz_common", "rbz_symbols", "rbz_checker"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives for `-v` (debug) and `-vv` or more (trace).
pub fn verbosity_directives(verbose: u8) -> Option<String> {
    let level = match verbose {
        0 => return None,
        1 => "debug",
        _ => "trace",
    };
    let directives: Vec<String> = RBZ_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    Some(directives.join(","))
}

/// `RBZ_LOG` wins over `RUST_LOG`, which wins over `-v`.
fn build_filter(verbose: u8) -> Option<EnvFilter> {
    if let Ok(val) = std::env::var("RBZ_LOG") {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    verbosity_directives(verbose).map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Install the global subscriber. Nothing is installed without a filter.
pub fn init_tracing(verbose: u8) {
    let Some(filter) = build_filter(verbose) else {
        return;
    };

    let format = LogFormat::parse(&std::env::var("RBZ_LOG_FORMAT").unwrap_or_default());
    match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_bracketed_fields(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            let text_layer = fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_verbosity_installs_nothing() {
        assert_eq!(verbosity_directives(0), None);
    }

    #[test]
    fn verbosity_scopes_to_rbz_targets() {
        assert_eq!(
            verbosity_directives(1).as_deref(),
            Some("rbz=debug,rbz_common=debug,rbz_symbols=debug,rbz_checker=debug")
        );
        let trace = verbosity_directives(3).expect("directives");
        assert!(trace.split(',').all(|directive| directive.ends_with("=trace")));
    }

    #[test]
    fn log_format_falls_back_to_text() {
        assert_eq!(LogFormat::parse("TREE"), LogFormat::Tree);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }
}
