use super::*;

#[test]
fn test_format_message_replaces_all_placeholders() {
    let message = format_message("`{1}#{0}` and `{2}#{0}`", &["foo", "A", "B"]);
    assert_eq!(message, "`A#foo` and `B#foo`");
}

#[test]
fn test_every_kind_has_a_template() {
    for kind in DiagnosticKind::ALL {
        assert!(
            get_message_template(kind.code()).is_some(),
            "missing template for {kind:?}"
        );
        assert_eq!(DiagnosticKind::from_code(kind.code()), Some(kind));
    }
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<u32> = DiagnosticKind::ALL.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), DiagnosticKind::ALL.len());
}

#[test]
fn test_from_kind_fills_location_and_category() {
    let loc = SourceLocation::new("a.rbi", 10, 4);
    let diag = Diagnostic::from_kind(DiagnosticKind::UnrecognizedParam, &loc, &["fixd"]);
    assert_eq!(diag.file, "a.rbi");
    assert_eq!(diag.start, 10);
    assert_eq!(diag.length, 4);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert_eq!(diag.kind(), Some(DiagnosticKind::UnrecognizedParam));
    assert_eq!(diag.message_text, "Unknown key `fixd` provided to `type_member`");
}

#[test]
fn test_related_information_is_serialized_only_when_present() {
    let loc = SourceLocation::new("a.rbi", 0, 1);
    let bare = Diagnostic::from_kind(DiagnosticKind::OverridesNothing, &loc, &["foo", "override"]);
    let json = serde_json::to_value(&bare).unwrap();
    assert!(json.get("related_information").is_none());

    let related = bare.with_related(&loc, "declared here".to_string());
    let json = serde_json::to_value(&related).unwrap();
    assert_eq!(json["related_information"][0]["message_text"], "declared here");
}
