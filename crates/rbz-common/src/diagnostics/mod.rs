//! Diagnostic types and message lookup for the signature checker.
//!
//! Message templates and codes live in `data.rs`. Templates use `{0}`, `{1}`,
//! ... placeholders filled by [`format_message`].

use crate::position::SourceLocation;
use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
///
/// The checker core only ever produces `Error`; the other categories exist for
/// related-information entries and for sinks that merge in other sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// The kind of problem a diagnostic reports.
///
/// Each kind maps to exactly one stable numeric code in
/// [`diagnostic_codes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    CyclicInheritance,
    UnresolvedAncestor,
    InvalidOverrideModifier,
    OverridesNothing,
    MissingImplementation,
    FinalViolation,
    AbstractInConcreteClass,
    InvalidVariance,
    InvalidTypeMemberArgument,
    MissingRequiredParam,
    UnrecognizedParam,
    TypeMembersWrongOrder,
    TypeMemberMustBeRedeclared,
    CovarianceNotAllowed,
}

impl DiagnosticKind {
    pub const ALL: [Self; 14] = [
        Self::CyclicInheritance,
        Self::UnresolvedAncestor,
        Self::InvalidOverrideModifier,
        Self::OverridesNothing,
        Self::MissingImplementation,
        Self::FinalViolation,
        Self::AbstractInConcreteClass,
        Self::InvalidVariance,
        Self::InvalidTypeMemberArgument,
        Self::MissingRequiredParam,
        Self::UnrecognizedParam,
        Self::TypeMembersWrongOrder,
        Self::TypeMemberMustBeRedeclared,
        Self::CovarianceNotAllowed,
    ];

    #[must_use]
    pub const fn code(self) -> u32 {
        use diagnostic_codes as c;
        match self {
            Self::CyclicInheritance => c::CYCLIC_INHERITANCE,
            Self::UnresolvedAncestor => c::UNRESOLVED_ANCESTOR,
            Self::InvalidOverrideModifier => c::INVALID_OVERRIDE_MODIFIER,
            Self::OverridesNothing => c::OVERRIDES_NOTHING,
            Self::MissingImplementation => c::MISSING_IMPLEMENTATION,
            Self::FinalViolation => c::FINAL_VIOLATION,
            Self::AbstractInConcreteClass => c::ABSTRACT_IN_CONCRETE_CLASS,
            Self::InvalidVariance => c::INVALID_VARIANCE,
            Self::InvalidTypeMemberArgument => c::INVALID_TYPE_MEMBER_ARGUMENT,
            Self::MissingRequiredParam => c::MISSING_REQUIRED_PARAM,
            Self::UnrecognizedParam => c::UNRECOGNIZED_PARAM,
            Self::TypeMembersWrongOrder => c::TYPE_MEMBERS_WRONG_ORDER,
            Self::TypeMemberMustBeRedeclared => c::TYPE_MEMBER_MUST_BE_REDECLARED,
            Self::CovarianceNotAllowed => c::COVARIANCE_NOT_ALLOWED,
        }
    }

    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// Related information for a diagnostic (e.g. where an abstract method was declared).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A checker diagnostic with optional related information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Related information spans (e.g., where an inherited member was declared)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a new error diagnostic at `loc`.
    #[must_use]
    pub fn error(loc: &SourceLocation, message: String, code: u32) -> Self {
        Self {
            file: loc.file.clone(),
            start: loc.start,
            length: loc.length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            related_information: Vec::new(),
        }
    }

    /// Create an error diagnostic of `kind` from its message template.
    #[must_use]
    pub fn from_kind(kind: DiagnosticKind, loc: &SourceLocation, args: &[&str]) -> Self {
        let template = get_message_template(kind.code()).unwrap_or_default();
        Self::error(loc, format_message(template, args), kind.code())
    }

    /// Add related information to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, loc: &SourceLocation, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            file: loc.file.clone(),
            start: loc.start,
            length: loc.length,
            message_text: message,
            category: DiagnosticCategory::Message,
            code: 0,
        });
        self
    }

    /// The kind this diagnostic's code belongs to.
    #[must_use]
    pub fn kind(&self) -> Option<DiagnosticKind> {
        DiagnosticKind::from_code(self.code)
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
