//! Page projection: enriched records built fresh for every render pass.
//!
//! # Responsibility
//! - Resolve link sections, notes and status badges per project.
//! - Assemble the ordered `PageView` handed across the collaborator
//!   boundary.
//!
//! # Invariants
//! - Empty `links` resolves to the fixed fallback text, never to silence.
//! - Link and tech order is input order; nothing is deduplicated.
//! - Derivation never mutates or copies source data beyond the projection.

use crate::catalog::CatalogSource;
use crate::model::project::{LinkRef, Project};
use crate::view::instruction::{BadgeVariant, RenderInstruction};
use serde::{Deserialize, Serialize};

/// Fallback shown when a project has no public code link.
pub const NO_PUBLIC_LINK_FALLBACK: &str = "Code link is not public.";

/// Resolves the link section of one project card.
///
/// # Contract
/// - Empty input: exactly one `Text` instruction carrying
///   [`NO_PUBLIC_LINK_FALLBACK`]. Absence of links is a meaningful state
///   and must stay visible, not drop the section.
/// - Non-empty input: one `Link` per entry, input order, labels and hrefs
///   unchanged, duplicates kept.
pub fn resolve_link_section(links: &[LinkRef]) -> Vec<RenderInstruction> {
    if links.is_empty() {
        return vec![RenderInstruction::text(NO_PUBLIC_LINK_FALLBACK)];
    }
    links
        .iter()
        .map(|link| RenderInstruction::link(link.label.clone(), link.href.clone()))
        .collect()
}

/// Resolves the optional supplementary note. Identity pass-through:
/// absent stays absent, present text is carried unchanged.
pub fn resolve_note(note: Option<&str>) -> Option<RenderInstruction> {
    note.map(RenderInstruction::text)
}

/// One enriched project record: source fields plus derived presentation
/// attributes, ready for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    /// Display title, identity key within the page.
    pub title: String,
    /// Free-text summary, unchanged.
    pub description: String,
    /// Tech badge instructions in source order.
    pub tech_badges: Vec<RenderInstruction>,
    /// Resolved link section (links, or the fallback text).
    pub link_section: Vec<RenderInstruction>,
    /// Resolved note; `None` when the source has none.
    pub note_instruction: Option<RenderInstruction>,
    /// Status badge variant; `None` renders no badge at all.
    pub badge: Option<BadgeVariant>,
}

impl ProjectView {
    /// Derives the full presentation projection of one project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech_badges: project
                .tech
                .iter()
                .map(RenderInstruction::text)
                .collect(),
            link_section: resolve_link_section(&project.links),
            note_instruction: resolve_note(project.note.as_deref()),
            badge: project.status.map(|status| status.badge_variant()),
        }
    }
}

/// Full-page projection in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Skill badges in source order, duplicates kept.
    pub tech_stack: Vec<RenderInstruction>,
    /// Enriched project cards in catalog order.
    pub projects: Vec<ProjectView>,
    /// Contact address, surfaced verbatim for header and footer CTAs.
    pub contact_email: String,
}

impl PageView {
    /// Builds the page projection from any catalog source.
    ///
    /// Reads the full collection fresh; there is no caching layer because
    /// the data never changes within a running instance.
    pub fn from_catalog<C: CatalogSource>(catalog: &C) -> Self {
        Self {
            tech_stack: catalog
                .tech_stack()
                .iter()
                .map(RenderInstruction::text)
                .collect(),
            projects: catalog
                .projects()
                .iter()
                .map(ProjectView::from_project)
                .collect(),
            contact_email: catalog.contact_email().to_string(),
        }
    }
}
