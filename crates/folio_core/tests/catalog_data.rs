use folio_core::{builtin_catalog, CatalogSource, ProjectStatus};
use std::collections::HashSet;

#[test]
fn builtin_catalog_holds_four_projects_with_unique_titles() {
    let catalog = builtin_catalog();
    let projects = catalog.projects();

    assert_eq!(projects.len(), 4);
    let titles: HashSet<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles.len(), projects.len());
}

#[test]
fn builtin_tech_stack_preserves_source_order() {
    let catalog = builtin_catalog();

    assert_eq!(
        catalog.tech_stack(),
        [
            "React Native",
            "TypeScript",
            "React",
            "Next.js",
            "REST API",
            "Git / GitLab",
            "UI implementation",
        ]
    );
}

#[test]
fn confidential_entry_withholds_links_but_keeps_a_note() {
    let catalog = builtin_catalog();
    let confidential = catalog
        .projects()
        .iter()
        .find(|p| p.status == Some(ProjectStatus::Confidential))
        .expect("catalog should contain a confidential project");

    assert!(confidential.links.is_empty());
    assert!(confidential.note.is_some());
}

#[test]
fn every_builtin_project_carries_a_status() {
    for project in builtin_catalog().projects() {
        assert!(
            project.status.is_some(),
            "project `{}` should have a status",
            project.title
        );
    }
}

#[test]
fn contact_email_is_surfaced_verbatim() {
    assert_eq!(
        builtin_catalog().contact_email(),
        "asadbekrabbimov0@gmail.com"
    );
}
