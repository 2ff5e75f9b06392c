//! Centralized limits for the checker.
//!
//! Ancestry walks are the only unbounded recursion in rbz: everything else is
//! a loop over one class's own declarations.

/// Maximum depth of a single ancestor chain walk.
///
/// Chains deeper than this are truncated (with a `tracing::warn!`) rather
/// than risking stack exhaustion on pathological generated hierarchies.
/// Real hierarchies stay well below a few dozen levels.
pub const MAX_ANCESTOR_DEPTH: usize = 512;

