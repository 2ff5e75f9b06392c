//! Type-Member Variance & Ordering Checking
//!
//! Declaration-site checks on a class's own type members:
//! - argument shape of each `type_member(...)` call
//! - variance tokens, and invariance for `class` type members
//! - keyword form: required and unrecognized keys
//! - inherited members re-declared as a prefix, in order
//! - concrete classes re-declaring inherited members

use rbz_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use rbz_symbols::{ClassKind, DeclArg, DeclOption, OptionValue, TypeMember, TypeMemberValue, Variance};
use tracing::trace;

use crate::state::ClassCheckState;

/// Keys accepted by the keyword form of `type_member`.
pub const RECOGNIZED_KEYS: [&str; 3] = ["fixed", "lower", "upper"];

/// Keys that must be present when no bound key is given.
const REQUIRED_WITHOUT_BOUNDS: [&str; 1] = ["fixed"];

impl<'a> ClassCheckState<'a> {
    pub(crate) fn check_type_member_declarations(&mut self) {
        let class = self.class;
        for member in &class.type_members {
            match &member.decl.value {
                TypeMemberValue::Other { .. } => self.error(
                    &member.loc,
                    diagnostic_messages::NOT_A_TYPE_MEMBER_DECLARATION,
                    &[&member.name],
                    diagnostic_codes::INVALID_TYPE_MEMBER_ARGUMENT,
                ),
                TypeMemberValue::TypeMember { args, options } => {
                    self.check_type_member_args(args);
                    if let Some(options) = options {
                        self.check_type_member_options(member, options);
                    }
                }
            }

            if class.kind == ClassKind::Class
                && let Some(token) = member.variance.token()
            {
                self.error(
                    &member.loc,
                    diagnostic_messages::COVARIANCE_NOT_ALLOWED,
                    &[&member.name, token],
                    diagnostic_codes::COVARIANCE_NOT_ALLOWED,
                );
            }
        }
    }

    fn check_type_member_args(&mut self, args: &[DeclArg]) {
        let Some((first, extra)) = args.split_first() else {
            return;
        };
        match first {
            DeclArg::Symbol { name, loc } => {
                if Variance::from_token(name).is_none() {
                    self.error(
                        loc,
                        diagnostic_messages::INVALID_VARIANCE,
                        &[name],
                        diagnostic_codes::INVALID_VARIANCE,
                    );
                }
            }
            DeclArg::Expr { expr, loc } => self.error(
                loc,
                diagnostic_messages::NOT_A_NAME_TOKEN,
                &[expr.describe()],
                diagnostic_codes::INVALID_TYPE_MEMBER_ARGUMENT,
            ),
        }
        for arg in extra {
            self.error(
                arg.loc(),
                diagnostic_messages::TOO_MANY_TYPE_MEMBER_ARGS,
                &[],
                diagnostic_codes::INVALID_TYPE_MEMBER_ARGUMENT,
            );
        }
    }

    /// Both key passes run to completion.
    fn check_type_member_options(&mut self, member: &TypeMember, options: &[DeclOption]) {
        trace!(member = %member.name, bounds = ?member.bounds, "type member options");
        for option in options {
            if !RECOGNIZED_KEYS.contains(&option.key.as_str()) {
                self.error(
                    &option.key_loc,
                    diagnostic_messages::UNRECOGNIZED_PARAM,
                    &[&option.key],
                    diagnostic_codes::UNRECOGNIZED_PARAM,
                );
            } else if let OptionValue::Expr { expr, loc } = &option.value {
                self.error(
                    loc,
                    diagnostic_messages::UNSUPPORTED_PARAM_VALUE,
                    &[&option.key, expr.describe()],
                    diagnostic_codes::INVALID_TYPE_MEMBER_ARGUMENT,
                );
            }
        }

        let has_key = |key: &str| options.iter().any(|option| option.key == key);
        if has_key("lower") || has_key("upper") {
            return;
        }
        for key in REQUIRED_WITHOUT_BOUNDS {
            if !has_key(key) {
                self.error(
                    &member.loc,
                    diagnostic_messages::MISSING_REQUIRED_PARAM,
                    &[key],
                    diagnostic_codes::MISSING_REQUIRED_PARAM,
                );
            }
        }
    }

    /// Inherited names must open the class's own sequence, in order, and a
    /// concrete class must re-declare the ones that require it.
    pub(crate) fn check_type_member_order(&mut self) {
        let class = self.class;
        if !self.has_ancestry() {
            return;
        }
        let Some((source, mut expected)) = self.hierarchy.nearest_type_member_source(class.id) else {
            return;
        };
        // Omitted members exempt from re-declaration do not occupy a slot.
        expected.retain(|name| {
            class.type_member(name).is_some() || self.requires_redeclaration(name)
        });
        trace!(class = %class.name, source = %self.class_name(source), inherited = expected.len(), "type member prefix");

        for member in &class.type_members {
            let Some(index) = expected.iter().position(|name| *name == member.name) else {
                continue;
            };
            if index == member.position as usize {
                continue;
            }
            let declaring = self
                .hierarchy
                .nearest_type_member_declaration(class.id, &member.name)
                .map_or(source, |inherited| inherited.owner);
            let declaring = self.class_name(declaring);
            let position = (index + 1).to_string();
            self.error(
                &member.loc,
                diagnostic_messages::TYPE_MEMBERS_WRONG_ORDER,
                &[&member.name, declaring, &position],
                diagnostic_codes::TYPE_MEMBERS_WRONG_ORDER,
            );
        }

        if !class.is_concrete() {
            return;
        }
        for name in self.hierarchy.inherited_type_member_names(class.id) {
            if class.type_member(name).is_some() || !self.requires_redeclaration(name) {
                continue;
            }
            let Some(inherited) = self.hierarchy.nearest_type_member_declaration(class.id, name) else {
                continue;
            };
            let owner = self.class_name(inherited.owner);
            self.error(
                &class.loc,
                diagnostic_messages::TYPE_MEMBER_MUST_BE_REDECLARED,
                &[name, owner, &class.name],
                diagnostic_codes::TYPE_MEMBER_MUST_BE_REDECLARED,
            );
        }
    }

    /// Invariant inherited members must be repeated; varianced ones only on request.
    fn requires_redeclaration(&self, name: &str) -> bool {
        self.hierarchy
            .nearest_type_member_declaration(self.class.id, name)
            .is_some_and(|inherited| {
                inherited.variance.is_invariant() || self.options.redeclare_varianced_members
            })
    }
}
