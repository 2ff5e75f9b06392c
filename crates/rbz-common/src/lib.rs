//! Common types and utilities for the rbz signature checker.
//!
//! This crate provides foundational types used across all rbz crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticKind`, codes and message templates)
//! - Source locations (`SourceLocation`) and line/column mapping (`LineMap`)
//! - Checker limits and thresholds

// Diagnostic model shared by the resolver, the checkers and the reporter
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticKind};

// Source locations (byte offsets) and line maps
pub mod position;
pub use position::{LineMap, Position, SourceLocation};

// Centralized limits
pub mod limits;
