//! rbz: checks method override modifiers and type-member declarations over a
//! mixin-aware ancestor linearization.
//!
//! The checking core lives in the workspace crates; this crate adds the
//! command-line front end and the tracing setup.

pub use rbz_checker as checker;
pub use rbz_common as common;
pub use rbz_symbols as symbols;

pub mod cli;
pub mod tracing_config;
