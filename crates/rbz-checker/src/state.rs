//! Per-class checking state.
//!
//! A `ClassCheckState` borrows the frozen hierarchy and owns the diagnostic
//! buffer for exactly one class. The override and type-member checks extend
//! it with `impl` blocks in their own modules.

use rbz_common::SourceLocation;
use rbz_common::diagnostics::{Diagnostic, format_message};
use rbz_symbols::{ClassId, ClassSymbol};

use crate::context::CheckerOptions;
use crate::hierarchy::ClassHierarchy;

pub struct ClassCheckState<'a> {
    pub hierarchy: &'a ClassHierarchy<'a>,
    pub options: &'a CheckerOptions,
    pub class: &'a ClassSymbol,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ClassCheckState<'a> {
    pub fn new(
        hierarchy: &'a ClassHierarchy<'a>,
        options: &'a CheckerOptions,
        id: ClassId,
    ) -> Self {
        Self {
            hierarchy,
            options,
            class: hierarchy.class(id),
            diagnostics: Vec::new(),
        }
    }

    /// Run every per-class check in reporting order and hand back the buffer.
    pub fn check(mut self) -> Vec<Diagnostic> {
        self.check_final_ancestors();
        self.check_methods();
        self.check_missing_implementations();
        self.check_type_member_declarations();
        self.check_type_member_order();
        self.diagnostics
    }

    /// Cyclic classes have no usable ancestry; only declaration-local checks run.
    pub(crate) fn has_ancestry(&self) -> bool {
        !self.hierarchy.is_cyclic(self.class.id)
    }

    pub(crate) fn class_name(&self, id: ClassId) -> &'a str {
        self.hierarchy.table().name(id)
    }

    pub(crate) fn error(&mut self, loc: &SourceLocation, template: &str, args: &[&str], code: u32) {
        self.diagnostics
            .push(Diagnostic::error(loc, format_message(template, args), code));
    }
}
