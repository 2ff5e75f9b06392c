//! Class Hierarchy Resolution
//!
//! Builds the ancestor linearization of every class once per frozen table and
//! answers method/type-member lookups against it.
//!
//! Linearization (most specific first, self excluded):
//! - mixins in reverse inclusion order, each followed by its own ancestors
//! - then the superclass, followed by its ancestors
//! - a class or module that appears twice keeps only its last occurrence, so a
//!   mixin already included higher up the superclass chain is not re-inserted
//!
//! Cycle detection runs BEFORE linearization. A class that can reach itself
//! gets an empty chain and one `CyclicInheritance` diagnostic; classes that
//! merely inherit from a cyclic class keep it as a leaf ancestor.

use rbz_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use rbz_common::limits::MAX_ANCESTOR_DEPTH;
use rbz_symbols::{AncestorRef, ClassId, ClassSymbol, MethodSignature, SymbolTable, TypeMember};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::context::CheckerOptions;

/// Type-member names, deduplicated, in inherited-then-own order.
pub type TypeMemberNames<'a> = SmallVec<[&'a str; 4]>;

/// Precomputed ancestry for every class of one `SymbolTable`.
///
/// Immutable after `build`, so it can be shared by reference across workers
/// and queried by tooling while checks run.
pub struct ClassHierarchy<'a> {
    table: &'a SymbolTable,
    chains: Vec<Vec<ClassId>>,
    cyclic: Vec<bool>,
    resolver_diagnostics: Vec<Vec<Diagnostic>>,
}

impl<'a> ClassHierarchy<'a> {
    pub fn build(table: &'a SymbolTable, options: &CheckerOptions) -> Self {
        let cyclic: Vec<bool> = table.ids().map(|id| is_on_cycle(table, id)).collect();

        let mut memo: Vec<Option<Vec<ClassId>>> = vec![None; table.len()];
        let chains: Vec<Vec<ClassId>> = table
            .ids()
            .map(|id| linearize(table, &cyclic, &mut memo, id, 0))
            .collect();

        let resolver_diagnostics = table
            .classes()
            .iter()
            .map(|class| resolver_diagnostics_for(class, cyclic[class.id.index()], options))
            .collect();

        debug!(
            classes = table.len(),
            cyclic = cyclic.iter().filter(|&&c| c).count(),
            "class hierarchy built"
        );

        Self {
            table,
            chains,
            cyclic,
            resolver_diagnostics,
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    pub fn class(&self, id: ClassId) -> &'a ClassSymbol {
        self.table.class(id)
    }

    /// Ancestors of `id`, most specific first, excluding `id` itself.
    pub fn ancestors_of(&self, id: ClassId) -> &[ClassId] {
        &self.chains[id.index()]
    }

    pub fn is_cyclic(&self, id: ClassId) -> bool {
        self.cyclic[id.index()]
    }

    /// Method resolution as a caller sees it: `id` itself, then its ancestors.
    pub fn lookup_method(&self, id: ClassId, name: &str) -> Option<&'a MethodSignature> {
        self.class(id)
            .method(name)
            .or_else(|| self.lookup_inherited_method(id, name))
    }

    /// The nearest definition of `name` among the ancestors of `id`.
    pub fn lookup_inherited_method(&self, id: ClassId, name: &str) -> Option<&'a MethodSignature> {
        let table = self.table;
        self.ancestors_of(id)
            .iter()
            .find_map(|&ancestor| table.class(ancestor).method(name))
    }

    /// Every type member visible in `id`: root-most ancestor first, each
    /// ancestor's own members in declaration order, then `id`'s own members.
    pub fn lookup_type_members(&self, id: ClassId) -> Vec<&'a TypeMember> {
        let table = self.table;
        self.ancestors_of(id)
            .iter()
            .rev()
            .chain(std::iter::once(&id))
            .flat_map(|&class| table.class(class).type_members.iter())
            .collect()
    }

    /// Names from `lookup_type_members`, first occurrence kept.
    pub fn type_member_names(&self, id: ClassId) -> TypeMemberNames<'a> {
        let mut names = TypeMemberNames::new();
        for member in self.lookup_type_members(id) {
            if !names.contains(&member.name.as_str()) {
                names.push(member.name.as_str());
            }
        }
        names
    }

    /// Names declared by any ancestor of `id`, root-most first, first occurrence kept.
    pub fn inherited_type_member_names(&self, id: ClassId) -> TypeMemberNames<'a> {
        let table = self.table;
        let mut names = TypeMemberNames::new();
        let members = self
            .ancestors_of(id)
            .iter()
            .rev()
            .flat_map(|&ancestor| table.class(ancestor).type_members.iter());
        for member in members {
            if !names.contains(&member.name.as_str()) {
                names.push(member.name.as_str());
            }
        }
        names
    }

    /// The most specific ancestor with any visible type members, and its names.
    pub fn nearest_type_member_source(&self, id: ClassId) -> Option<(ClassId, TypeMemberNames<'a>)> {
        self.ancestors_of(id).iter().find_map(|&ancestor| {
            let names = self.type_member_names(ancestor);
            (!names.is_empty()).then_some((ancestor, names))
        })
    }

    /// The nearest ancestor of `id` that itself declares type member `name`.
    pub fn nearest_type_member_declaration(
        &self,
        id: ClassId,
        name: &str,
    ) -> Option<&'a TypeMember> {
        let table = self.table;
        self.ancestors_of(id)
            .iter()
            .find_map(|&ancestor| table.class(ancestor).type_member(name))
    }

    /// Cycle and unresolved-reference diagnostics for one class.
    pub fn resolver_diagnostics(&self, id: ClassId) -> &[Diagnostic] {
        &self.resolver_diagnostics[id.index()]
    }

    /// All resolver diagnostics in class declaration order.
    pub fn all_resolver_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.resolver_diagnostics.iter().flatten()
    }
}

/// Whether `id` can reach itself through superclass/mixin edges.
fn is_on_cycle(table: &SymbolTable, id: ClassId) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack: Vec<ClassId> = direct_parents(table.class(id)).collect();
    while let Some(current) = stack.pop() {
        if current == id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        stack.extend(direct_parents(table.class(current)));
    }
    false
}

fn direct_parents(class: &ClassSymbol) -> impl Iterator<Item = ClassId> + '_ {
    class.ancestor_refs().filter_map(AncestorRef::resolved)
}

fn linearize(
    table: &SymbolTable,
    cyclic: &[bool],
    memo: &mut Vec<Option<Vec<ClassId>>>,
    id: ClassId,
    depth: usize,
) -> Vec<ClassId> {
    if cyclic[id.index()] {
        return Vec::new();
    }
    if let Some(chain) = &memo[id.index()] {
        return chain.clone();
    }
    if depth > MAX_ANCESTOR_DEPTH {
        warn!(class = %table.name(id), depth, "ancestor chain too deep; truncating");
        return Vec::new();
    }

    let class = table.class(id);
    let mut order = Vec::new();
    let parents = class
        .mixins
        .iter()
        .rev()
        .chain(class.superclass.iter())
        .filter_map(AncestorRef::resolved);
    for ancestor in parents {
        order.push(ancestor);
        order.extend(linearize(table, cyclic, memo, ancestor, depth + 1));
    }

    // Keep the last occurrence of each ancestor.
    let mut seen = FxHashSet::default();
    let mut chain: Vec<ClassId> = order
        .into_iter()
        .rev()
        .filter(|&ancestor| ancestor != id && seen.insert(ancestor))
        .collect();
    chain.reverse();

    trace!(class = %class.name, ancestors = chain.len(), "linearized");
    memo[id.index()] = Some(chain.clone());
    chain
}

fn resolver_diagnostics_for(
    class: &ClassSymbol,
    cyclic: bool,
    options: &CheckerOptions,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if cyclic {
        debug!(class = %class.name, "circular inheritance");
        diagnostics.push(Diagnostic::error(
            &class.loc,
            format_message(diagnostic_messages::CYCLIC_INHERITANCE, &[&class.name]),
            diagnostic_codes::CYCLIC_INHERITANCE,
        ));
    }
    if options.report_unresolved_ancestors {
        for reference in class.ancestor_refs() {
            if let AncestorRef::Unresolved { name, loc } = reference {
                diagnostics.push(Diagnostic::error(
                    loc,
                    format_message(diagnostic_messages::UNRESOLVED_ANCESTOR, &[name, &class.name]),
                    diagnostic_codes::UNRESOLVED_ANCESTOR,
                ));
            }
        }
    }
    diagnostics
}

#[cfg(test)]
#[path = "tests/hierarchy_tests.rs"]
mod tests;
