//! Override checks beyond the compatibility table.

use rbz_checker::{CheckerOptions, check_program};
use rbz_common::{Diagnostic, DiagnosticKind, SourceLocation};
use rbz_symbols::{ClassDecl, MethodDecl, Modifier, NameRef, SymbolTableBuilder};

fn check(decls: Vec<ClassDecl>) -> Vec<Diagnostic> {
    let mut builder = SymbolTableBuilder::new();
    builder.extend(decls);
    let table = builder.finalize().expect("fixture table should finalize");
    check_program(&table, &CheckerOptions::default())
}

fn kinds(diagnostics: &[Diagnostic]) -> Vec<DiagnosticKind> {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.kind().expect("known diagnostic code"))
        .collect()
}

fn loc(start: u32) -> SourceLocation {
    SourceLocation::new("test.rbi", start, 1)
}

#[test]
fn test_override_without_ancestor_overrides_nothing() {
    let diagnostics = check(vec![
        ClassDecl::class("Lonely").method(MethodDecl::new("foo").with(Modifier::Override).at(loc(3))),
    ]);

    assert_eq!(kinds(&diagnostics), [DiagnosticKind::OverridesNothing]);
    assert_eq!(diagnostics[0].start, 3);
    assert_eq!(
        diagnostics[0].message_text,
        "Method `foo` is marked `override` but does not override anything"
    );
}

#[test]
fn test_overrides_nothing_ignores_other_modifiers() {
    let combos = [
        vec![Modifier::Override, Modifier::Overridable],
        vec![Modifier::Override, Modifier::Final],
        vec![Modifier::Implementation],
        vec![Modifier::Implementation, Modifier::Overridable],
        vec![Modifier::Override, Modifier::Implementation],
    ];
    for modifiers in combos {
        let method = modifiers
            .iter()
            .fold(MethodDecl::new("foo"), |method, &modifier| method.with(modifier));
        let diagnostics = check(vec![ClassDecl::class("Lonely").method(method)]);
        let nothing = diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind() == Some(DiagnosticKind::OverridesNothing))
            .count();
        assert_eq!(nothing, 1, "modifiers {modifiers:?}: {diagnostics:#?}");
    }
}

#[test]
fn test_overrides_nothing_names_implementation() {
    let diagnostics = check(vec![
        ClassDecl::class("Lonely").method(MethodDecl::new("foo").with(Modifier::Implementation)),
    ]);
    assert_eq!(
        diagnostics[0].message_text,
        "Method `foo` is marked `implementation` but does not override anything"
    );
}

#[test]
fn test_method_without_sig_never_overrides_nothing() {
    let diagnostics = check(vec![
        ClassDecl::class("Lonely").method(MethodDecl::without_sig("foo").with(Modifier::Override)),
    ]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_missing_override_modifier_names_the_parent() {
    let diagnostics = check(vec![
        ClassDecl::class("Parent")
            .method(MethodDecl::new("foo").with(Modifier::Overridable).at(loc(1))),
        ClassDecl::class("Child")
            .superclass("Parent")
            .method(MethodDecl::new("foo").at(loc(9))),
    ]);

    assert_eq!(kinds(&diagnostics), [DiagnosticKind::InvalidOverrideModifier]);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.start, 9);
    assert!(diagnostic.message_text.contains("`Parent#foo`"));
    assert_eq!(diagnostic.related_information.len(), 1);
    assert_eq!(diagnostic.related_information[0].start, 1);
}

#[test]
fn test_nearest_definition_wins_across_mixins_and_superclass() {
    // Parent#foo is plain, but the later-included Hook#foo is overridable and
    // sits in front of it.
    let diagnostics = check(vec![
        ClassDecl::class("Parent").method(MethodDecl::new("foo")),
        ClassDecl::module("Quiet"),
        ClassDecl::module("Hook").method(MethodDecl::new("foo").with(Modifier::Overridable)),
        ClassDecl::class("Child")
            .superclass("Parent")
            .mixin("Quiet")
            .mixin("Hook")
            .method(MethodDecl::new("foo").with(Modifier::Override)),
    ]);
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");

    let diagnostics = check(vec![
        ClassDecl::class("Parent").method(MethodDecl::new("foo").with(Modifier::Overridable)),
        ClassDecl::module("Plain").method(MethodDecl::new("foo")),
        ClassDecl::class("Child")
            .superclass("Parent")
            .mixin("Plain")
            .method(MethodDecl::new("foo").with(Modifier::Override)),
    ]);
    assert_eq!(kinds(&diagnostics), [DiagnosticKind::InvalidOverrideModifier]);
    assert!(diagnostics[0].message_text.contains("`Plain#foo`"));
}

#[test]
fn test_final_method_cannot_be_redefined() {
    let diagnostics = check(vec![
        ClassDecl::class("Parent").method(
            MethodDecl::new("foo")
                .with(Modifier::Final)
                .with(Modifier::Overridable),
        ),
        ClassDecl::class("Child")
            .superclass("Parent")
            .method(MethodDecl::new("foo").with(Modifier::Override)),
        ClassDecl::class("Sneaky")
            .superclass("Parent")
            .method(MethodDecl::without_sig("foo")),
    ]);

    assert_eq!(
        kinds(&diagnostics),
        [DiagnosticKind::FinalViolation, DiagnosticKind::FinalViolation]
    );
    assert_eq!(
        diagnostics[0].message_text,
        "`Parent#foo` was declared as final and cannot be redefined in `Child`"
    );
}

#[test]
fn test_final_method_binds_every_descendant() {
    let diagnostics = check(vec![
        ClassDecl::class("Grand").method(MethodDecl::new("foo").with(Modifier::Final).at(loc(1))),
        ClassDecl::class("Middle")
            .superclass("Grand")
            .method(MethodDecl::new("foo").at(loc(10))),
        ClassDecl::class("Leaf")
            .superclass("Middle")
            .method(MethodDecl::new("foo").at(loc(20))),
    ]);

    assert_eq!(
        kinds(&diagnostics),
        [DiagnosticKind::FinalViolation, DiagnosticKind::FinalViolation]
    );
    assert_eq!(diagnostics[1].start, 20);
    assert_eq!(
        diagnostics[1].message_text,
        "`Grand#foo` was declared as final and cannot be redefined in `Leaf`"
    );
    assert_eq!(diagnostics[1].related_information[0].start, 1);
}

#[test]
fn test_final_ancestor_cannot_be_inherited_or_included() {
    let diagnostics = check(vec![
        ClassDecl::class("Sealed").mark_final(),
        ClassDecl::module("Locked").mark_final(),
        ClassDecl::class("Child")
            .superclass_ref(NameRef::new("Sealed").at(loc(5)))
            .mixin_ref(NameRef::new("Locked").at(loc(7))),
    ]);

    assert_eq!(
        kinds(&diagnostics),
        [DiagnosticKind::FinalViolation, DiagnosticKind::FinalViolation]
    );
    assert_eq!(diagnostics[0].start, 5);
    assert!(diagnostics[0].message_text.contains("cannot be inherited by `Child`"));
    assert_eq!(diagnostics[1].start, 7);
    assert!(diagnostics[1].message_text.contains("cannot be included by `Child`"));
}

#[test]
fn test_abstract_and_implementation_together_is_invalid() {
    let diagnostics = check(vec![
        ClassDecl::module("Iface").method(
            MethodDecl::new("foo")
                .with(Modifier::Abstract)
                .with(Modifier::Implementation),
        ),
    ]);

    let kinds = kinds(&diagnostics);
    assert!(kinds.contains(&DiagnosticKind::InvalidOverrideModifier));
    assert!(
        diagnostics
            .iter()
            .any(|diagnostic| diagnostic.message_text.contains("cannot be both `abstract` and `implementation`"))
    );
}

#[test]
fn test_abstract_method_in_concrete_class() {
    let diagnostics = check(vec![
        ClassDecl::class("Concrete").method(MethodDecl::new("foo").with(Modifier::Abstract)),
        ClassDecl::class("Fine")
            .mark_abstract()
            .method(MethodDecl::new("foo").with(Modifier::Abstract)),
    ]);

    assert_eq!(kinds(&diagnostics), [DiagnosticKind::AbstractInConcreteClass]);
    assert!(diagnostics[0].message_text.contains("`Concrete`"));
}

#[test]
fn test_concrete_class_reports_single_missing_implementation() {
    let diagnostics = check(vec![
        ClassDecl::module("Shape").method(MethodDecl::new("area").with(Modifier::Abstract).at(loc(2))),
        ClassDecl::class("Square").mixin("Shape").at(loc(20)),
    ]);

    assert_eq!(kinds(&diagnostics), [DiagnosticKind::MissingImplementation]);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.start, 20);
    assert_eq!(
        diagnostic.message_text,
        "Missing definition for abstract method `Shape#area` in `Square`"
    );
    assert_eq!(diagnostic.related_information[0].start, 2);
}

#[test]
fn test_concrete_class_reports_all_missing_implementations_once() {
    let diagnostics = check(vec![
        ClassDecl::module("Shape")
            .method(MethodDecl::new("area").with(Modifier::Abstract))
            .method(MethodDecl::new("perimeter").with(Modifier::Abstract)),
        ClassDecl::module("Named").method(MethodDecl::new("name").with(Modifier::Abstract)),
        ClassDecl::class("Square").mixin("Shape").mixin("Named"),
    ]);

    assert_eq!(kinds(&diagnostics), [DiagnosticKind::MissingImplementation]);
    assert_eq!(
        diagnostics[0].message_text,
        "Class `Square` is missing definitions for the following abstract methods: \
         `Shape#area`, `Shape#perimeter`, `Named#name`"
    );
    assert_eq!(diagnostics[0].related_information.len(), 3);
}

#[test]
fn test_implementation_anywhere_on_the_chain_satisfies_abstract() {
    let diagnostics = check(vec![
        ClassDecl::module("Shape").method(MethodDecl::new("area").with(Modifier::Abstract)),
        ClassDecl::class("Base")
            .mark_abstract()
            .mixin("Shape")
            .method(MethodDecl::new("area").with(Modifier::Implementation)),
        ClassDecl::class("Square").superclass("Base"),
        ClassDecl::class("Partial").mark_abstract().mixin("Shape"),
        ClassDecl::module("Helper").mixin("Shape"),
    ]);
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");
}

#[test]
fn test_one_class_collects_every_violation() {
    let diagnostics = check(vec![
        ClassDecl::class("Parent")
            .method(MethodDecl::new("a"))
            .method(MethodDecl::new("b").with(Modifier::Overridable)),
        ClassDecl::class("Child")
            .superclass("Parent")
            .method(MethodDecl::new("a").with(Modifier::Override))
            .method(MethodDecl::new("b"))
            .method(MethodDecl::new("c").with(Modifier::Override)),
    ]);

    assert_eq!(
        kinds(&diagnostics),
        [
            DiagnosticKind::InvalidOverrideModifier,
            DiagnosticKind::InvalidOverrideModifier,
            DiagnosticKind::OverridesNothing,
        ]
    );
}
