use folio_core::view::page::{resolve_link_section, resolve_note};
use folio_core::{BadgeVariant, LinkRef, ProjectStatus, RenderInstruction, NO_PUBLIC_LINK_FALLBACK};

#[test]
fn badge_variant_mapping_is_exact() {
    assert_eq!(ProjectStatus::Active.badge_variant(), BadgeVariant::Primary);
    assert_eq!(ProjectStatus::Archived.badge_variant(), BadgeVariant::Muted);
    assert_eq!(
        ProjectStatus::Confidential.badge_variant(),
        BadgeVariant::Outlined
    );
}

#[test]
fn absent_status_yields_no_badge() {
    let status: Option<ProjectStatus> = None;
    assert_eq!(status.map(ProjectStatus::badge_variant), None);
}

#[test]
fn empty_links_resolve_to_the_fixed_fallback_text() {
    let section = resolve_link_section(&[]);

    assert_eq!(
        section,
        vec![RenderInstruction::text(NO_PUBLIC_LINK_FALLBACK)]
    );
    assert!(section
        .iter()
        .all(|item| !matches!(item, RenderInstruction::Link { .. })));
}

#[test]
fn single_link_resolves_to_one_unchanged_link_instruction() {
    let links = [LinkRef::new("GitHub", "https://example.com/x")];
    let section = resolve_link_section(&links);

    assert_eq!(
        section,
        vec![RenderInstruction::link("GitHub", "https://example.com/x")]
    );
}

#[test]
fn link_order_is_preserved_and_duplicates_are_kept() {
    let links = [
        LinkRef::new("GitHub", "https://example.com/repo"),
        LinkRef::new("Demo", "https://example.com/demo"),
        LinkRef::new("GitHub", "https://example.com/repo"),
    ];
    let section = resolve_link_section(&links);

    assert_eq!(
        section,
        vec![
            RenderInstruction::link("GitHub", "https://example.com/repo"),
            RenderInstruction::link("Demo", "https://example.com/demo"),
            RenderInstruction::link("GitHub", "https://example.com/repo"),
        ]
    );
}

#[test]
fn resolve_note_is_identity_pass_through() {
    assert_eq!(resolve_note(None), None);
    assert_eq!(resolve_note(Some("x")), Some(RenderInstruction::text("x")));
}

#[test]
fn variant_serialization_uses_snake_case_tags() {
    assert_eq!(
        serde_json::to_string(&BadgeVariant::Primary).unwrap(),
        "\"primary\""
    );
    assert_eq!(
        serde_json::to_string(&BadgeVariant::Muted).unwrap(),
        "\"muted\""
    );
    assert_eq!(
        serde_json::to_string(&BadgeVariant::Outlined).unwrap(),
        "\"outlined\""
    );
}
