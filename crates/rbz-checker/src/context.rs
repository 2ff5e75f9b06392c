//! Checker Options
//!
//! Knobs that change what the checker reports or how it schedules work. The
//! defaults are what the CLI uses when no `rbz.json` is present.

use serde::Deserialize;

/// Options for one check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerOptions {
    /// Fan per-class checks out over the rayon pool.
    pub parallel: bool,
    /// Require concrete classes to re-declare `:in`/`:out` inherited type
    /// members too, not only invariant ones.
    pub redeclare_varianced_members: bool,
    /// Report superclass/mixin references that name no declaration.
    pub report_unresolved_ancestors: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            redeclare_varianced_members: false,
            report_unresolved_ancestors: true,
        }
    }
}

impl CheckerOptions {
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
