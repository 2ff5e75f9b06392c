//! Diagnostic codes and message templates.
//!
//! Codes in the 4xxx range come from ancestry resolution; 5xxx codes come
//! from the override and type-member checkers. Several templates may share a
//! code when one kind of problem has more than one wording.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const CYCLIC_INHERITANCE: u32 = 4001;
    pub const UNRESOLVED_ANCESTOR: u32 = 4002;

    pub const INVALID_OVERRIDE_MODIFIER: u32 = 5001;
    pub const OVERRIDES_NOTHING: u32 = 5002;
    pub const MISSING_IMPLEMENTATION: u32 = 5003;
    pub const FINAL_VIOLATION: u32 = 5004;
    pub const ABSTRACT_IN_CONCRETE_CLASS: u32 = 5005;

    pub const INVALID_VARIANCE: u32 = 5010;
    pub const INVALID_TYPE_MEMBER_ARGUMENT: u32 = 5011;
    pub const MISSING_REQUIRED_PARAM: u32 = 5012;
    pub const UNRECOGNIZED_PARAM: u32 = 5013;
    pub const TYPE_MEMBERS_WRONG_ORDER: u32 = 5014;
    pub const TYPE_MEMBER_MUST_BE_REDECLARED: u32 = 5015;
    pub const COVARIANCE_NOT_ALLOWED: u32 = 5016;
}

pub mod diagnostic_messages {
    pub const CYCLIC_INHERITANCE: &str = "Circular inheritance: `{0}` is an ancestor of itself";
    pub const UNRESOLVED_ANCESTOR: &str = "Unable to resolve ancestor `{0}` of `{1}`";

    pub const OVERRIDE_OF_NON_OVERRIDABLE: &str =
        "Method `{0}` is marked `override` but `{1}#{0}` is not declared `overridable` or `override`";
    pub const MISSING_OVERRIDE_MODIFIER: &str =
        "Method `{0}` overrides an overridable method `{1}#{0}` but is not declared with `override`";
    pub const REDEFINES_NON_OVERRIDABLE_IMPLEMENTATION: &str =
        "Method `{0}` redefines the implementation `{1}#{0}`, which is not declared `overridable`";
    pub const MISSING_IMPLEMENTATION_MODIFIER: &str =
        "Method `{0}` implements an abstract method `{1}#{0}` but is not declared with `implementation`";
    pub const IMPLEMENTATION_OF_NON_ABSTRACT: &str =
        "Method `{0}` is marked `implementation` but `{1}#{0}` is not declared `abstract`";
    pub const ABSTRACT_AND_IMPLEMENTATION: &str =
        "Method `{0}` cannot be both `abstract` and `implementation`";

    pub const OVERRIDES_NOTHING: &str = "Method `{0}` is marked `{1}` but does not override anything";

    pub const MISSING_IMPLEMENTATION: &str = "Missing definition for abstract method `{0}` in `{1}`";
    pub const MISSING_IMPLEMENTATIONS: &str =
        "Class `{0}` is missing definitions for the following abstract methods: {1}";

    pub const FINAL_METHOD_REDEFINED: &str =
        "`{1}#{0}` was declared as final and cannot be redefined in `{2}`";
    pub const FINAL_ANCESTOR: &str = "`{0}` was declared as final and cannot be {1} by `{2}`";

    pub const ABSTRACT_IN_CONCRETE_CLASS: &str =
        "Method `{0}` is declared `abstract` but `{1}` is not declared abstract";

    pub const INVALID_VARIANCE: &str =
        "Invalid variance kind `:{0}`, only `:in` and `:out` are supported";

    pub const NOT_A_NAME_TOKEN: &str =
        "Invalid argument to `type_member`: found {0}, but it must be a declared name token";
    pub const TOO_MANY_TYPE_MEMBER_ARGS: &str =
        "Too many arguments to `type_member`: expected at most one variance token";
    pub const NOT_A_TYPE_MEMBER_DECLARATION: &str =
        "Type member `{0}` must be declared with `type_member`";
    pub const UNSUPPORTED_PARAM_VALUE: &str =
        "Unsupported value for `{0}`: found {1}, but it must be a type";

    pub const MISSING_REQUIRED_PARAM: &str = "Missing required param `{0}` in `type_member`";
    pub const UNRECOGNIZED_PARAM: &str = "Unknown key `{0}` provided to `type_member`";

    pub const TYPE_MEMBERS_WRONG_ORDER: &str =
        "Type members in wrong order: `{0}` is inherited from `{1}` and must be re-declared at position {2}";
    pub const TYPE_MEMBER_MUST_BE_REDECLARED: &str =
        "Type member `{0}` declared by `{1}` must be re-declared in `{2}`";
    pub const COVARIANCE_NOT_ALLOWED: &str =
        "Classes can only have invariant type members; `{0}` is declared `:{1}`";
}

/// Primary template for each code.
pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::CYCLIC_INHERITANCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CYCLIC_INHERITANCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNRESOLVED_ANCESTOR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNRESOLVED_ANCESTOR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_OVERRIDE_MODIFIER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::OVERRIDE_OF_NON_OVERRIDABLE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::OVERRIDES_NOTHING,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::OVERRIDES_NOTHING,
    },
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_IMPLEMENTATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MISSING_IMPLEMENTATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::FINAL_VIOLATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::FINAL_METHOD_REDEFINED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ABSTRACT_IN_CONCRETE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ABSTRACT_IN_CONCRETE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_VARIANCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_VARIANCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_TYPE_MEMBER_ARGUMENT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NOT_A_NAME_TOKEN,
    },
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_REQUIRED_PARAM,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MISSING_REQUIRED_PARAM,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNRECOGNIZED_PARAM,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNRECOGNIZED_PARAM,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MEMBERS_WRONG_ORDER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_MEMBERS_WRONG_ORDER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MEMBER_MUST_BE_REDECLARED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_MEMBER_MUST_BE_REDECLARED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::COVARIANCE_NOT_ALLOWED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::COVARIANCE_NOT_ALLOWED,
    },
];
