//! Override Compatibility Checking
//!
//! Validates each method signature of a class against the nearest ancestor
//! definition of the same name:
//! - the (parent row, child column) compatibility table
//! - `override`/`implementation` with nothing to override
//! - redefinition of `final` methods and inheritance from `final` classes
//! - `abstract` + `implementation` on one signature
//! - abstract methods a concrete class never implements

use indexmap::IndexMap;
use rbz_common::diagnostics::{Diagnostic, diagnostic_codes, diagnostic_messages, format_message};
use rbz_symbols::{MethodSignature, Modifier, Modifiers};
use tracing::trace;

use crate::state::ClassCheckState;

// =============================================================================
// Compatibility table
// =============================================================================

/// How the nearest ancestor definition constrains redefinition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParentRow {
    NoSig,
    Standard,
    Overridable,
    Override,
    Implementation,
    Abstract,
}

impl ParentRow {
    pub const ALL: [Self; 6] = [
        Self::NoSig,
        Self::Standard,
        Self::Overridable,
        Self::Override,
        Self::Implementation,
        Self::Abstract,
    ];

    /// `abstract` wins over `overridable`, which wins over `override`, which
    /// wins over `implementation`.
    pub fn of(method: &MethodSignature) -> Self {
        if !method.has_sig {
            return Self::NoSig;
        }
        let modifiers = method.modifiers;
        if modifiers.contains(Modifiers::ABSTRACT) {
            Self::Abstract
        } else if modifiers.contains(Modifiers::OVERRIDABLE) {
            Self::Overridable
        } else if modifiers.contains(Modifiers::OVERRIDE) {
            Self::Override
        } else if modifiers.contains(Modifiers::IMPLEMENTATION) {
            Self::Implementation
        } else {
            Self::Standard
        }
    }
}

/// What a redefinition claims about the definition it replaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChildColumn {
    NoSig,
    Standard,
    Override,
    Implementation,
}

impl ChildColumn {
    pub const ALL: [Self; 4] = [
        Self::NoSig,
        Self::Standard,
        Self::Override,
        Self::Implementation,
    ];

    pub fn of(method: &MethodSignature) -> Self {
        if !method.has_sig {
            Self::NoSig
        } else if method.modifiers.contains(Modifiers::IMPLEMENTATION) {
            Self::Implementation
        } else if method.modifiers.contains(Modifiers::OVERRIDE) {
            Self::Override
        } else {
            Self::Standard
        }
    }
}

/// The message template for an illegal (parent, child) pair, `None` if legal.
///
/// Templates take the method name as `{0}` and the parent's owner as `{1}`.
#[must_use]
pub const fn override_verdict(parent: ParentRow, child: ChildColumn) -> Option<&'static str> {
    use ChildColumn as C;
    use ParentRow as P;
    use diagnostic_messages as m;
    match (parent, child) {
        (_, C::NoSig) => None,
        (P::Abstract, C::Implementation) => None,
        (_, C::Implementation) => Some(m::IMPLEMENTATION_OF_NON_ABSTRACT),
        (P::Abstract, C::Standard | C::Override) => Some(m::MISSING_IMPLEMENTATION_MODIFIER),
        (P::NoSig | P::Overridable | P::Override, C::Override) => None,
        (P::Standard | P::Implementation, C::Override) => Some(m::OVERRIDE_OF_NON_OVERRIDABLE),
        (P::NoSig | P::Standard, C::Standard) => None,
        (P::Overridable | P::Override, C::Standard) => Some(m::MISSING_OVERRIDE_MODIFIER),
        (P::Implementation, C::Standard) => Some(m::REDEFINES_NON_OVERRIDABLE_IMPLEMENTATION),
    }
}

// =============================================================================
// Class checks
// =============================================================================

impl<'a> ClassCheckState<'a> {
    /// Superclasses and mixins must not be declared `final`.
    pub(crate) fn check_final_ancestors(&mut self) {
        let class = self.class;
        let references = class
            .superclass
            .iter()
            .map(|reference| (reference, "inherited"))
            .chain(class.mixins.iter().map(|reference| (reference, "included")));
        for (reference, how) in references {
            let Some(id) = reference.resolved() else {
                continue;
            };
            let ancestor = self.hierarchy.class(id);
            if ancestor.is_final {
                self.error(
                    reference.loc(),
                    diagnostic_messages::FINAL_ANCESTOR,
                    &[&ancestor.name, how, &class.name],
                    diagnostic_codes::FINAL_VIOLATION,
                );
            }
        }
    }

    /// Check every method of the class in definition order.
    pub(crate) fn check_methods(&mut self) {
        let class = self.class;
        for method in class.methods.values() {
            self.check_method_modifiers(method);
            if !self.has_ancestry() {
                continue;
            }
            match self.hierarchy.lookup_inherited_method(class.id, &method.name) {
                Some(parent) => self.check_redefinition(parent, method),
                None => self.check_overrides_something(method),
            }
        }
    }

    /// Modifier combinations that are wrong regardless of ancestry.
    fn check_method_modifiers(&mut self, method: &MethodSignature) {
        let class = self.class;
        if !method.has_sig {
            return;
        }
        if method
            .modifiers
            .contains(Modifiers::ABSTRACT | Modifiers::IMPLEMENTATION)
        {
            self.error(
                &method.loc,
                diagnostic_messages::ABSTRACT_AND_IMPLEMENTATION,
                &[&method.name],
                diagnostic_codes::INVALID_OVERRIDE_MODIFIER,
            );
        }
        if method.is_abstract() && class.is_concrete() {
            self.error(
                &method.loc,
                diagnostic_messages::ABSTRACT_IN_CONCRETE_CLASS,
                &[&method.name, &class.name],
                diagnostic_codes::ABSTRACT_IN_CONCRETE_CLASS,
            );
        }
    }

    fn check_overrides_something(&mut self, method: &MethodSignature) {
        if !method.has_sig {
            return;
        }
        let Some(modifier) = [Modifier::Override, Modifier::Implementation]
            .into_iter()
            .find(|modifier| method.modifiers.contains(modifier.flag()))
        else {
            return;
        };
        self.error(
            &method.loc,
            diagnostic_messages::OVERRIDES_NOTHING,
            &[&method.name, modifier.keyword()],
            diagnostic_codes::OVERRIDES_NOTHING,
        );
    }

    fn check_redefinition(&mut self, parent: &MethodSignature, child: &MethodSignature) {
        let class = self.class;

        // A final definition anywhere up the chain forbids this one, even
        // when a nearer ancestor already redefined it.
        let table = self.hierarchy.table();
        let final_parent = self
            .hierarchy
            .ancestors_of(class.id)
            .iter()
            .find_map(|&ancestor| {
                table
                    .class(ancestor)
                    .method(&child.name)
                    .filter(|method| method.is_final())
            });
        if let Some(final_parent) = final_parent {
            let owner = self.class_name(final_parent.owner);
            let diagnostic = Diagnostic::error(
                &child.loc,
                format_message(
                    diagnostic_messages::FINAL_METHOD_REDEFINED,
                    &[&child.name, owner, &class.name],
                ),
                diagnostic_codes::FINAL_VIOLATION,
            )
            .with_related(
                &final_parent.loc,
                format!("`{owner}#{}` is declared final here", final_parent.name),
            );
            self.diagnostics.push(diagnostic);
            return;
        }

        let owner = self.class_name(parent.owner);
        let row = ParentRow::of(parent);
        let column = ChildColumn::of(child);
        trace!(method = %child.name, ?row, ?column, parent = owner, "override pair");
        if let Some(template) = override_verdict(row, column) {
            let diagnostic = Diagnostic::error(
                &child.loc,
                format_message(template, &[&child.name, owner]),
                diagnostic_codes::INVALID_OVERRIDE_MODIFIER,
            )
            .with_related(&parent.loc, format!("`{owner}#{}` is defined here", parent.name));
            self.diagnostics.push(diagnostic);
        }
    }

    /// A concrete class needs an `implementation` for every inherited
    /// abstract method, somewhere on itself or its ancestors.
    pub(crate) fn check_missing_implementations(&mut self) {
        let class = self.class;
        if !class.is_concrete() || !self.has_ancestry() {
            return;
        }
        let table = self.hierarchy.table();
        let ancestors = self.hierarchy.ancestors_of(class.id);

        // Root-most introduction first.
        let mut abstract_methods: IndexMap<&str, &MethodSignature> = IndexMap::new();
        for &ancestor in ancestors.iter().rev() {
            for method in table.class(ancestor).methods.values() {
                if method.is_abstract() {
                    abstract_methods.entry(method.name.as_str()).or_insert(method);
                }
            }
        }

        let is_implemented = |name: &str| {
            class.method(name).is_some_and(MethodSignature::is_implementation)
                || ancestors.iter().any(|&ancestor| {
                    table
                        .class(ancestor)
                        .method(name)
                        .is_some_and(MethodSignature::is_implementation)
                })
        };
        let missing: Vec<&MethodSignature> = abstract_methods
            .into_values()
            .filter(|method| !is_implemented(&method.name))
            .collect();
        if missing.is_empty() {
            return;
        }

        let qualified: Vec<String> = missing
            .iter()
            .map(|method| format!("{}#{}", table.name(method.owner), method.name))
            .collect();
        let message = match qualified.as_slice() {
            [single] => format_message(
                diagnostic_messages::MISSING_IMPLEMENTATION,
                &[single, &class.name],
            ),
            _ => {
                let list = qualified
                    .iter()
                    .map(|name| format!("`{name}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format_message(
                    diagnostic_messages::MISSING_IMPLEMENTATIONS,
                    &[&class.name, &list],
                )
            }
        };
        let mut diagnostic =
            Diagnostic::error(&class.loc, message, diagnostic_codes::MISSING_IMPLEMENTATION);
        for (method, name) in missing.iter().zip(&qualified) {
            diagnostic = diagnostic.with_related(&method.loc, format!("`{name}` is declared abstract here"));
        }
        self.diagnostics.push(diagnostic);
    }
}
