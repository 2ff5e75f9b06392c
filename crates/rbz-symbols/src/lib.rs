//! Symbol table for the rbz signature checker.
//!
//! Front ends describe classes and modules as declarations (`decl`). The
//! `SymbolTableBuilder` merges reopened declarations, resolves ancestor
//! references by name and freezes everything into a `SymbolTable` that the
//! checker reads without synchronization.
//!
//! - `decl` - declaration input (also the JSON snapshot shape)
//! - `symbols` - frozen `ClassSymbol` / `MethodSignature` / `TypeMember`
//! - `builder` - finalize phase and structural errors
//! - `snapshot` - JSON program snapshot loading

pub mod builder;
pub mod decl;
pub mod snapshot;
pub mod symbols;

pub use builder::{SymbolTableBuilder, SymbolTableError};
pub use decl::{
    ClassDecl, DeclArg, DeclOption, ExprKind, MethodDecl, NameRef, OptionValue, TypeMemberDecl,
    TypeMemberValue,
};
pub use snapshot::ProgramSnapshot;
pub use symbols::{
    AncestorRef, ClassId, ClassKind, ClassSymbol, MethodSignature, Modifier, Modifiers,
    SymbolTable, TypeMember, TypeMemberBounds, Variance,
};
