//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shown on the portfolio page.
//! - Keep presentation-relevant state (status, note, links) explicit.
//!
//! # Invariants
//! - `title` is non-empty and unique within one catalog (identity key).
//! - `links` order is display order; an empty list is a meaningful state
//!   ("no public code link"), never an error.
//! - `tech` order is display order; duplicates are kept as-is.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle status of a project, driving the status badge.
///
/// The set is closed on purpose: adding a status must force every
/// presentation mapping to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Actively maintained and public.
    Active,
    /// Kept for reference, no longer developed.
    Archived,
    /// Under NDA; code cannot be shared.
    Confidential,
}

/// One labeled outbound link on a project card.
///
/// `href` is passed through verbatim; URL well-formedness is the
/// navigation layer's concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    /// Short display label, e.g. `GitHub`.
    pub label: String,
    /// Target URL, unvalidated.
    pub href: String,
}

impl LinkRef {
    /// Convenience constructor for catalog definitions and tests.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Canonical record for one piece of work on the portfolio page.
///
/// Optional fields model absence explicitly: `status: None` means no badge
/// at all, `note: None` means no supplementary note line. Empty `links`
/// stays distinguishable from both and renders a fixed fallback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display title; unique identity key within a catalog.
    pub title: String,
    /// Free-text summary, shown as-is.
    pub description: String,
    /// Technologies in display order; not deduplicated.
    pub tech: Vec<String>,
    /// Outbound links in display order; may be empty.
    pub links: Vec<LinkRef>,
    /// Optional supplementary note below the tech badges.
    pub note: Option<String>,
    /// Optional lifecycle status; `None` renders no badge.
    pub status: Option<ProjectStatus>,
}

impl Project {
    /// Creates a project with only the required display fields set.
    ///
    /// # Invariants
    /// - `links` starts empty, `note` and `status` start absent.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tech: Vec::new(),
            links: Vec::new(),
            note: None,
            status: None,
        }
    }

    /// Checks record-local invariants.
    ///
    /// # Errors
    /// - [`ProjectValidationError::EmptyTitle`] when `title` is empty or
    ///   whitespace-only.
    ///
    /// Title uniqueness is a collection property and is checked by the
    /// catalog, not here.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether this project has any public code link.
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

/// Record-local validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "project title must not be empty"),
        }
    }
}

impl Error for ProjectValidationError {}
