//! Finalize phase: merge declarations into a frozen `SymbolTable`.
//!
//! Classes may be reopened, so several `ClassDecl`s can share a name. They
//! are merged in the order they were added:
//! - mixins append in inclusion order
//! - a later method definition replaces an earlier one with the same name
//! - type members append (a repeated name is a structural error)
//! - `abstract` / `final` flags are OR-ed together
//! - a superclass may be written on any reopening but must agree
//!
//! Ancestor names that match no declaration become `AncestorRef::Unresolved`
//! markers; reporting them is the resolver's job, not a build failure.

use crate::decl::{ClassDecl, NameRef};
use crate::symbols::{
    AncestorRef, ClassId, ClassKind, ClassSymbol, MethodSignature, SymbolTable, TypeMember,
};
use indexmap::IndexMap;
use rbz_common::SourceLocation;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// A structural problem that prevents checking the table at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolTableError {
    #[error("class declared without a name at {file}:{start}", file = .loc.file, start = .loc.start)]
    EmptyClassName { loc: SourceLocation },

    #[error("`{name}` is declared as a {} and reopened as a {}", .first.keyword(), .later.keyword())]
    KindMismatch {
        name: String,
        first: ClassKind,
        later: ClassKind,
    },

    #[error("module `{name}` cannot have a superclass")]
    SuperclassOnModule { name: String },

    #[error("superclass of `{name}` redefined: `{first}` vs `{second}`")]
    SuperclassMismatch {
        name: String,
        first: String,
        second: String,
    },

    #[error("type member `{member}` is declared twice in `{class}`")]
    DuplicateTypeMember { class: String, member: String },
}

/// Collects declarations and freezes them into a `SymbolTable`.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    decls: IndexMap<String, Vec<ClassDecl>>,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, decl: ClassDecl) -> &mut Self {
        self.decls.entry(decl.name.clone()).or_default().push(decl);
        self
    }

    #[must_use]
    pub fn with(mut self, decl: ClassDecl) -> Self {
        self.add(decl);
        self
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = ClassDecl>) -> &mut Self {
        for decl in decls {
            self.add(decl);
        }
        self
    }

    /// Merge, resolve and freeze.
    pub fn finalize(self) -> Result<SymbolTable, SymbolTableError> {
        let ids: FxHashMap<&str, ClassId> = self
            .decls
            .keys()
            .enumerate()
            .map(|(index, name)| (name.as_str(), ClassId(index as u32)))
            .collect();

        let mut classes = Vec::with_capacity(self.decls.len());
        for (index, (name, parts)) in self.decls.iter().enumerate() {
            let id = ClassId(index as u32);
            let class = merge_class(id, name, parts, &ids)?;
            trace!(
                class = %class.name,
                methods = class.methods.len(),
                type_members = class.type_members.len(),
                "finalized class"
            );
            classes.push(class);
        }

        debug!(classes = classes.len(), "symbol table finalized");
        Ok(SymbolTable::from_classes(classes))
    }
}

fn resolve(reference: &NameRef, ids: &FxHashMap<&str, ClassId>) -> AncestorRef {
    match ids.get(reference.name.as_str()) {
        Some(&id) => AncestorRef::Resolved {
            id,
            loc: reference.loc.clone(),
        },
        None => AncestorRef::Unresolved {
            name: reference.name.clone(),
            loc: reference.loc.clone(),
        },
    }
}

fn merge_class(
    id: ClassId,
    name: &str,
    parts: &[ClassDecl],
    ids: &FxHashMap<&str, ClassId>,
) -> Result<ClassSymbol, SymbolTableError> {
    let Some(first) = parts.first() else {
        unreachable!("builder never stores an empty declaration list")
    };
    if name.is_empty() {
        return Err(SymbolTableError::EmptyClassName {
            loc: first.loc.clone(),
        });
    }

    let kind = first.kind;
    let mut superclass: Option<&NameRef> = None;
    let mut mixins = Vec::new();
    let mut methods: IndexMap<String, MethodSignature> = IndexMap::new();
    let mut type_members: Vec<TypeMember> = Vec::new();
    let mut is_abstract = false;
    let mut is_final = false;

    for part in parts {
        if part.kind != kind {
            return Err(SymbolTableError::KindMismatch {
                name: name.to_string(),
                first: kind,
                later: part.kind,
            });
        }
        if let Some(reference) = &part.superclass {
            if kind == ClassKind::Module {
                return Err(SymbolTableError::SuperclassOnModule {
                    name: name.to_string(),
                });
            }
            match superclass {
                Some(existing) if existing.name != reference.name => {
                    return Err(SymbolTableError::SuperclassMismatch {
                        name: name.to_string(),
                        first: existing.name.clone(),
                        second: reference.name.clone(),
                    });
                }
                Some(_) => {}
                None => superclass = Some(reference),
            }
        }
        mixins.extend(part.mixins.iter().map(|mixin| resolve(mixin, ids)));

        for method in &part.methods {
            let signature = MethodSignature {
                owner: id,
                name: method.name.clone(),
                has_sig: method.has_sig,
                modifiers: method.modifiers.iter().copied().collect(),
                loc: method.loc.clone(),
            };
            if methods.insert(method.name.clone(), signature).is_some() {
                debug!(class = name, method = %method.name, "method redefined; keeping the later definition");
            }
        }

        for decl in &part.type_members {
            if type_members.iter().any(|member| member.name == decl.name) {
                return Err(SymbolTableError::DuplicateTypeMember {
                    class: name.to_string(),
                    member: decl.name.clone(),
                });
            }
            let position = type_members.len() as u32;
            type_members.push(TypeMember::register(id, position, decl.clone()));
        }

        is_abstract |= part.is_abstract;
        is_final |= part.is_final;
    }

    Ok(ClassSymbol {
        id,
        name: name.to_string(),
        kind,
        superclass: superclass.map(|reference| resolve(reference, ids)),
        mixins,
        type_members,
        methods,
        is_final,
        is_abstract,
        loc: first.loc.clone(),
    })
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
