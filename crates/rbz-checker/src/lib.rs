//! Override-modifier and type-member checker.
//!
//! - `hierarchy` - ancestor linearization and lookups (`ClassHierarchy`)
//! - `override_checker` - method modifier compatibility
//! - `type_member_checker` - type-member variance, keys and ordering
//! - `program` - whole-program driver, parallel over classes

pub mod context;
pub mod hierarchy;
pub mod override_checker;
pub mod program;
pub mod state;
pub mod type_member_checker;

pub use context::CheckerOptions;
pub use hierarchy::{ClassHierarchy, TypeMemberNames};
pub use override_checker::{ChildColumn, ParentRow, override_verdict};
pub use program::{check_class, check_hierarchy, check_program};
pub use state::ClassCheckState;
