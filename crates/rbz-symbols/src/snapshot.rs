//! JSON program snapshots.
//!
//! A snapshot is the whole program's declarations as produced by an external
//! front end:
//!
//! ```json
//! {
//!   "classes": [
//!     { "name": "Parent", "typeMembers": [
//!         { "name": "Elem", "value": { "kind": "typeMember" } } ] },
//!     { "name": "Child", "superclass": { "name": "Parent" },
//!       "methods": [ { "name": "each", "modifiers": ["override"] } ] }
//!   ]
//! }
//! ```

use crate::builder::{SymbolTableBuilder, SymbolTableError};
use crate::decl::ClassDecl;
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl ProgramSnapshot {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn into_symbol_table(self) -> Result<SymbolTable, SymbolTableError> {
        let mut builder = SymbolTableBuilder::new();
        builder.extend(self.classes);
        builder.finalize()
    }
}
