//! Presentation vocabulary consumed by the rendering collaborator.
//!
//! # Responsibility
//! - Define the closed set of badge variants.
//! - Define data-only render instructions, independent of visual styling.
//!
//! # Invariants
//! - Both enums are closed: a new variant must break every exhaustive
//!   match at compile time instead of falling through to a default.

use crate::model::project::ProjectStatus;
use serde::{Deserialize, Serialize};

/// Abstract presentation category for a badge.
///
/// The collaborator maps these to concrete styling; this crate never deals
/// in colors or CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    /// Default emphasis, used for active projects.
    Primary,
    /// De-emphasized, used for archived projects.
    Muted,
    /// Outline-only, used for confidential projects.
    Outlined,
}

impl ProjectStatus {
    /// Maps a status to its badge variant.
    ///
    /// # Contract
    /// - `Active` -> `Primary`
    /// - `Archived` -> `Muted`
    /// - `Confidential` -> `Outlined`
    ///
    /// Absent status is handled by the caller with `Option::map`, so "no
    /// badge at all" stays distinct from every variant. The match is
    /// exhaustive on purpose: an unmapped future status must fail the
    /// build, not silently default.
    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Primary,
            Self::Archived => BadgeVariant::Muted,
            Self::Confidential => BadgeVariant::Outlined,
        }
    }
}

/// Data-only description of one thing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Plain text line.
    Text(String),
    /// Actionable link. `href` is carried unchanged, malformed or not;
    /// validation belongs to the navigation layer.
    Link { label: String, href: String },
}

impl RenderInstruction {
    /// Text instruction from any string-ish input.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Link instruction from label and href.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}
