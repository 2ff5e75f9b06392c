//! Frozen symbols.
//!
//! Everything here is created once by `SymbolTableBuilder::finalize` and only
//! read afterwards, so `SymbolTable` is `Send + Sync` and can be shared by
//! reference across checker workers.

use crate::decl::{DeclArg, OptionValue, TypeMemberDecl, TypeMemberValue};
use bitflags::bitflags;
use indexmap::IndexMap;
use rbz_common::SourceLocation;
use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Index of a class in its `SymbolTable`, in first-declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassKind {
    #[default]
    Class,
    Module,
}

impl ClassKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Module => "module",
        }
    }
}

/// A superclass or mixin reference after name resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AncestorRef {
    Resolved { id: ClassId, loc: SourceLocation },
    Unresolved { name: String, loc: SourceLocation },
}

impl AncestorRef {
    pub fn resolved(&self) -> Option<ClassId> {
        match self {
            Self::Resolved { id, .. } => Some(*id),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Resolved { loc, .. } | Self::Unresolved { loc, .. } => loc,
        }
    }
}

// =============================================================================
// Methods
// =============================================================================

bitflags! {
    /// Signature modifiers. Any combination may be written; the checker
    /// decides which combinations are legal.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const OVERRIDABLE = 1 << 0;
        const OVERRIDE = 1 << 1;
        const ABSTRACT = 1 << 2;
        const IMPLEMENTATION = 1 << 3;
        const FINAL = 1 << 4;
    }
}

/// A single modifier as written in a signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modifier {
    Overridable,
    Override,
    Abstract,
    Implementation,
    Final,
}

impl Modifier {
    pub const fn flag(self) -> Modifiers {
        match self {
            Self::Overridable => Modifiers::OVERRIDABLE,
            Self::Override => Modifiers::OVERRIDE,
            Self::Abstract => Modifiers::ABSTRACT,
            Self::Implementation => Modifiers::IMPLEMENTATION,
            Self::Final => Modifiers::FINAL,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Overridable => "overridable",
            Self::Override => "override",
            Self::Abstract => "abstract",
            Self::Implementation => "implementation",
            Self::Final => "final",
        }
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Modifiers::empty(), |acc, modifier| acc | modifier.flag())
    }
}

/// One method definition in one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub owner: ClassId,
    pub name: String,
    pub has_sig: bool,
    pub modifiers: Modifiers,
    pub loc: SourceLocation,
}

impl MethodSignature {
    pub fn is_abstract(&self) -> bool {
        self.has_sig && self.modifiers.contains(Modifiers::ABSTRACT)
    }

    pub fn is_implementation(&self) -> bool {
        self.has_sig && self.modifiers.contains(Modifiers::IMPLEMENTATION)
    }

    pub fn is_final(&self) -> bool {
        self.has_sig && self.modifiers.contains(Modifiers::FINAL)
    }
}

// =============================================================================
// Type members
// =============================================================================

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variance {
    #[default]
    Invariant,
    /// `:out`
    Covariant,
    /// `:in`
    Contravariant,
}

impl Variance {
    /// Parse a variance symbol. Returns `None` for unsupported tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "out" => Some(Self::Covariant),
            "in" => Some(Self::Contravariant),
            _ => None,
        }
    }

    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Invariant => None,
            Self::Covariant => Some("out"),
            Self::Contravariant => Some("in"),
        }
    }

    pub const fn is_invariant(self) -> bool {
        matches!(self, Self::Invariant)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeMemberBounds {
    pub fixed: Option<String>,
    pub lower: Option<String>,
    pub upper: Option<String>,
}

/// A registered type member.
///
/// `variance` and `bounds` are the best-effort reading of `decl`; malformed
/// arguments fall back to invariant/unbounded and are reported by the checker
/// from `decl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMember {
    pub owner: ClassId,
    pub name: String,
    pub variance: Variance,
    /// 0-based position among the owner's own type members.
    pub position: u32,
    pub bounds: TypeMemberBounds,
    pub loc: SourceLocation,
    pub decl: TypeMemberDecl,
}

impl TypeMember {
    pub(crate) fn register(owner: ClassId, position: u32, decl: TypeMemberDecl) -> Self {
        let mut variance = Variance::Invariant;
        let mut bounds = TypeMemberBounds::default();
        if let TypeMemberValue::TypeMember { args, options } = &decl.value {
            if let Some(DeclArg::Symbol { name, .. }) = args.first() {
                variance = Variance::from_token(name).unwrap_or_default();
            }
            for option in options.iter().flatten() {
                let OptionValue::Type { name, .. } = &option.value else {
                    continue;
                };
                let slot = match option.key.as_str() {
                    "fixed" => &mut bounds.fixed,
                    "lower" => &mut bounds.lower,
                    "upper" => &mut bounds.upper,
                    _ => continue,
                };
                *slot = Some(name.clone());
            }
        }
        Self {
            owner,
            name: decl.name.clone(),
            variance,
            position,
            bounds,
            loc: decl.loc.clone(),
            decl,
        }
    }

    /// Whether `decl` is a `type_member(...)` call at all.
    pub fn is_declaration(&self) -> bool {
        matches!(self.decl.value, TypeMemberValue::TypeMember { .. })
    }
}

// =============================================================================
// Classes
// =============================================================================

#[derive(Clone, Debug)]
pub struct ClassSymbol {
    pub id: ClassId,
    pub name: String,
    pub kind: ClassKind,
    pub superclass: Option<AncestorRef>,
    /// Mixins in inclusion order.
    pub mixins: Vec<AncestorRef>,
    pub type_members: Vec<TypeMember>,
    /// Methods in first-definition order.
    pub methods: IndexMap<String, MethodSignature>,
    pub is_final: bool,
    /// Whether abstract members may be left unimplemented.
    pub is_abstract: bool,
    pub loc: SourceLocation,
}

impl ClassSymbol {
    /// A class that must implement every inherited abstract method.
    pub fn is_concrete(&self) -> bool {
        self.kind == ClassKind::Class && !self.is_abstract
    }

    pub fn method(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.get(name)
    }

    pub fn type_member(&self, name: &str) -> Option<&TypeMember> {
        self.type_members.iter().find(|member| member.name == name)
    }

    /// Superclass first, then mixins in inclusion order.
    pub fn ancestor_refs(&self) -> impl Iterator<Item = &AncestorRef> {
        self.superclass.iter().chain(self.mixins.iter())
    }
}

/// The frozen program-wide symbol table.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    classes: Vec<ClassSymbol>,
}

impl SymbolTable {
    pub(crate) fn from_classes(classes: Vec<ClassSymbol>) -> Self {
        Self { classes }
    }

    /// # Panics
    /// If `id` did not come from this table.
    pub fn class(&self, id: ClassId) -> &ClassSymbol {
        &self.classes[id.index()]
    }

    pub fn classes(&self) -> &[ClassSymbol] {
        &self.classes
    }

    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.classes.iter().map(|class| class.id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn name(&self, id: ClassId) -> &str {
        &self.class(id).name
    }
}

#[cfg(test)]
#[path = "tests/symbols_tests.rs"]
mod tests;
