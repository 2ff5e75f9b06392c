use super::*;
use crate::decl::{DeclOption, ExprKind};

#[test]
fn test_modifiers_collect_from_iterator() {
    let modifiers: Modifiers = [Modifier::Implementation, Modifier::Overridable]
        .into_iter()
        .collect();
    assert!(modifiers.contains(Modifiers::IMPLEMENTATION));
    assert!(modifiers.contains(Modifiers::OVERRIDABLE));
    assert!(!modifiers.contains(Modifiers::OVERRIDE));
}

#[test]
fn test_variance_tokens() {
    assert_eq!(Variance::from_token("out"), Some(Variance::Covariant));
    assert_eq!(Variance::from_token("in"), Some(Variance::Contravariant));
    assert_eq!(Variance::from_token("inout"), None);
    assert_eq!(Variance::Invariant.token(), None);
    assert!(Variance::default().is_invariant());
}

#[test]
fn test_register_reads_variance_and_bounds() {
    let member = TypeMember::register(ClassId(0), 0, TypeMemberDecl::with_variance("Elem", "out"));
    assert_eq!(member.variance, Variance::Covariant);
    assert!(member.is_declaration());

    let fixed = TypeMember::register(
        ClassId(0),
        1,
        TypeMemberDecl::with_options("Key", vec![DeclOption::ty("fixed", "Integer")]),
    );
    assert_eq!(fixed.variance, Variance::Invariant);
    assert_eq!(fixed.bounds.fixed.as_deref(), Some("Integer"));
    assert_eq!(fixed.position, 1);
}

#[test]
fn test_register_falls_back_on_malformed_arguments() {
    let bad_token = TypeMember::register(ClassId(0), 0, TypeMemberDecl::with_variance("E", "sideways"));
    assert_eq!(bad_token.variance, Variance::Invariant);

    let not_a_call = TypeMember::register(ClassId(0), 0, TypeMemberDecl::other("E", ExprKind::Integer));
    assert!(!not_a_call.is_declaration());
    assert_eq!(not_a_call.variance, Variance::Invariant);

    let bad_value = TypeMember::register(
        ClassId(0),
        0,
        TypeMemberDecl::with_options(
            "E",
            vec![DeclOption::expr("upper", ExprKind::String, SourceLocation::default())],
        ),
    );
    assert_eq!(bad_value.bounds, TypeMemberBounds::default());
}
