use super::*;
use crate::decl::{MethodDecl, TypeMemberDecl};
use crate::symbols::{Modifier, Modifiers};

#[test]
fn test_finalize_assigns_ids_in_declaration_order() {
    let table = SymbolTableBuilder::new()
        .with(ClassDecl::class("A"))
        .with(ClassDecl::module("M"))
        .with(ClassDecl::class("B").superclass("A").mixin("M"))
        .finalize()
        .expect("table should finalize");

    assert_eq!(table.len(), 3);
    assert_eq!(table.name(ClassId(0)), "A");
    assert_eq!(table.name(ClassId(1)), "M");
    let b = table.class(ClassId(2));
    assert_eq!(b.superclass.as_ref().and_then(AncestorRef::resolved), Some(ClassId(0)));
    assert_eq!(b.mixins[0].resolved(), Some(ClassId(1)));
}

#[test]
fn test_unknown_ancestor_becomes_unresolved_marker() {
    let table = SymbolTableBuilder::new()
        .with(ClassDecl::class("B").superclass("Missing"))
        .finalize()
        .expect("unresolved names are not structural errors");

    match table.class(ClassId(0)).superclass.as_ref() {
        Some(AncestorRef::Unresolved { name, .. }) => assert_eq!(name, "Missing"),
        other => panic!("expected unresolved marker, got {other:?}"),
    }
}

#[test]
fn test_reopened_class_merges_parts() {
    let table = SymbolTableBuilder::new()
        .with(ClassDecl::module("M1"))
        .with(ClassDecl::module("M2"))
        .with(
            ClassDecl::class("C")
                .mixin("M1")
                .method(MethodDecl::new("foo"))
                .type_member(TypeMemberDecl::invariant("A")),
        )
        .with(
            ClassDecl::class("C")
                .mixin("M2")
                .mark_abstract()
                .method(MethodDecl::new("foo").with(Modifier::Overridable))
                .method(MethodDecl::new("bar"))
                .type_member(TypeMemberDecl::invariant("B")),
        )
        .finalize()
        .expect("table should finalize");

    let c = table.classes().iter().find(|class| class.name == "C").unwrap();
    assert!(c.is_abstract);
    assert_eq!(c.mixins.len(), 2);
    assert_eq!(c.methods.len(), 2);
    assert_eq!(
        c.method("foo").map(|m| m.modifiers),
        Some(Modifiers::OVERRIDABLE)
    );
    let names: Vec<_> = c.type_members.iter().map(|m| (m.name.as_str(), m.position)).collect();
    assert_eq!(names, vec![("A", 0), ("B", 1)]);
}

#[test]
fn test_duplicate_type_member_is_structural_error() {
    let err = SymbolTableBuilder::new()
        .with(
            ClassDecl::class("C")
                .type_member(TypeMemberDecl::invariant("Elem"))
                .type_member(TypeMemberDecl::invariant("Elem")),
        )
        .finalize()
        .unwrap_err();
    assert_eq!(
        err,
        SymbolTableError::DuplicateTypeMember {
            class: "C".to_string(),
            member: "Elem".to_string()
        }
    );
}

#[test]
fn test_conflicting_superclass_is_structural_error() {
    let err = SymbolTableBuilder::new()
        .with(ClassDecl::class("A"))
        .with(ClassDecl::class("B"))
        .with(ClassDecl::class("C").superclass("A"))
        .with(ClassDecl::class("C").superclass("B"))
        .finalize()
        .unwrap_err();
    assert!(matches!(err, SymbolTableError::SuperclassMismatch { .. }));
    assert_eq!(err.to_string(), "superclass of `C` redefined: `A` vs `B`");
}

#[test]
fn test_repeated_identical_superclass_is_accepted() {
    let table = SymbolTableBuilder::new()
        .with(ClassDecl::class("A"))
        .with(ClassDecl::class("C").superclass("A"))
        .with(ClassDecl::class("C").superclass("A"))
        .finalize();
    assert!(table.is_ok());
}

#[test]
fn test_module_with_superclass_is_structural_error() {
    let err = SymbolTableBuilder::new()
        .with(ClassDecl::class("A"))
        .with(ClassDecl::module("M").superclass("A"))
        .finalize()
        .unwrap_err();
    assert_eq!(err, SymbolTableError::SuperclassOnModule { name: "M".to_string() });
}

#[test]
fn test_class_and_module_with_same_name_is_structural_error() {
    let err = SymbolTableBuilder::new()
        .with(ClassDecl::class("X"))
        .with(ClassDecl::module("X"))
        .finalize()
        .unwrap_err();
    assert_eq!(
        err,
        SymbolTableError::KindMismatch {
            name: "X".to_string(),
            first: ClassKind::Class,
            later: ClassKind::Module,
        }
    );
    assert_eq!(err.to_string(), "`X` is declared as a class and reopened as a module");
}

#[test]
fn test_empty_name_is_structural_error() {
    let err = SymbolTableBuilder::new()
        .with(ClassDecl::class("").at(SourceLocation::new("a.rbi", 7, 0)))
        .finalize()
        .unwrap_err();
    assert_eq!(err.to_string(), "class declared without a name at a.rbi:7");
}
