//! Whole-program entry points.
//!
//! The hierarchy is built once; per-class checks then fan out over rayon and
//! are merged back in class declaration order, so parallel and sequential
//! runs produce the same sequence.

use rayon::prelude::*;
use rbz_common::Diagnostic;
use rbz_symbols::{ClassId, SymbolTable};
use tracing::{debug, debug_span, info_span};

use crate::context::CheckerOptions;
use crate::hierarchy::ClassHierarchy;
use crate::state::ClassCheckState;

/// Check every class of a frozen table.
pub fn check_program(table: &SymbolTable, options: &CheckerOptions) -> Vec<Diagnostic> {
    let hierarchy = ClassHierarchy::build(table, options);
    check_hierarchy(&hierarchy, options)
}

/// Check every class against an already built hierarchy.
///
/// Resolver diagnostics for all classes come first, then each class's own
/// diagnostics in declaration order.
pub fn check_hierarchy(hierarchy: &ClassHierarchy<'_>, options: &CheckerOptions) -> Vec<Diagnostic> {
    let _span = info_span!("check_hierarchy", classes = hierarchy.table().len()).entered();
    let ids: Vec<ClassId> = hierarchy.table().ids().collect();
    let per_class: Vec<Vec<Diagnostic>> = if options.parallel {
        ids.par_iter()
            .map(|&id| check_class(hierarchy, options, id))
            .collect()
    } else {
        ids.iter()
            .map(|&id| check_class(hierarchy, options, id))
            .collect()
    };

    let mut diagnostics: Vec<Diagnostic> = hierarchy.all_resolver_diagnostics().cloned().collect();
    diagnostics.extend(per_class.into_iter().flatten());
    debug!(
        classes = ids.len(),
        diagnostics = diagnostics.len(),
        parallel = options.parallel,
        "program checked"
    );
    diagnostics
}

/// Diagnostics for a single class, excluding resolver diagnostics.
pub fn check_class<'a>(
    hierarchy: &'a ClassHierarchy<'a>,
    options: &'a CheckerOptions,
    id: ClassId,
) -> Vec<Diagnostic> {
    let _span = debug_span!("check_class", class = %hierarchy.table().name(id)).entered();
    ClassCheckState::new(hierarchy, options, id).check()
}
