//! Portfolio catalog: the compiled-in data the page renders from.
//!
//! # Responsibility
//! - Define the `CatalogSource` seam between data and view derivation.
//! - Hold the built-in project list, tech stack and contact address as
//!   immutable static configuration.
//!
//! # Invariants
//! - A constructed catalog has non-empty, unique project titles.
//! - The collection is defined once at module initialization and never
//!   mutated, persisted or reloaded afterwards.

use crate::model::project::{LinkRef, Project, ProjectStatus, ProjectValidationError};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed its local invariants; carries the record index.
    InvalidProject {
        index: usize,
        source: ProjectValidationError,
    },
    /// Two records share the same title.
    DuplicateTitle(String),
    /// Contact address is empty or whitespace-only.
    EmptyContactEmail,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProject { index, source } => {
                write!(f, "invalid project at index {index}: {source}")
            }
            Self::DuplicateTitle(title) => write!(f, "duplicate project title: `{title}`"),
            Self::EmptyContactEmail => write!(f, "contact email must not be empty"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read-only data source for one render pass.
///
/// View derivation never assumes the built-in catalog; tests and alternate
/// frontends supply their own implementation through this trait.
pub trait CatalogSource {
    /// Project records in display order.
    fn projects(&self) -> &[Project];
    /// Skill list in display order; plain strings, duplicates kept.
    fn tech_stack(&self) -> &[String];
    /// Contact address surfaced verbatim in header and footer.
    fn contact_email(&self) -> &str;
}

/// Owned, validated catalog implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    projects: Vec<Project>,
    tech_stack: Vec<String>,
    contact_email: String,
}

impl StaticCatalog {
    /// Validates and wraps catalog data.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidProject`] when a record fails local
    ///   validation.
    /// - [`CatalogError::DuplicateTitle`] when two records share a title.
    /// - [`CatalogError::EmptyContactEmail`] when the address is blank.
    pub fn try_new(
        projects: Vec<Project>,
        tech_stack: Vec<String>,
        contact_email: impl Into<String>,
    ) -> CatalogResult<Self> {
        let contact_email = contact_email.into();
        if contact_email.trim().is_empty() {
            return Err(CatalogError::EmptyContactEmail);
        }

        {
            let mut seen_titles = HashSet::new();
            for (index, project) in projects.iter().enumerate() {
                project
                    .validate()
                    .map_err(|source| CatalogError::InvalidProject { index, source })?;
                if !seen_titles.insert(project.title.as_str()) {
                    return Err(CatalogError::DuplicateTitle(project.title.clone()));
                }
            }
        }

        Ok(Self {
            projects,
            tech_stack,
            contact_email,
        })
    }
}

impl CatalogSource for StaticCatalog {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    fn contact_email(&self) -> &str {
        &self.contact_email
    }
}

static BUILTIN_CATALOG: Lazy<StaticCatalog> = Lazy::new(|| {
    StaticCatalog::try_new(builtin_projects(), builtin_tech_stack(), CONTACT_EMAIL)
        .expect("built-in catalog data is valid")
});

const CONTACT_EMAIL: &str = "asadbekrabbimov0@gmail.com";

/// Returns the built-in catalog shipped with the page.
///
/// Initialized once per process; every render pass reads it fresh without
/// any caching or diffing layer on top.
pub fn builtin_catalog() -> &'static StaticCatalog {
    &BUILTIN_CATALOG
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Weather Forecast Application".to_string(),
            description: "Weather app that fetches real-time data by city (OpenWeatherMap), \
                          with theme switching and dynamic backgrounds."
                .to_string(),
            tech: strings(&["JavaScript", "HTML", "CSS", "OpenWeatherMap API"]),
            links: vec![LinkRef::new(
                "GitHub",
                "https://github.com/Raozas/weather-forecast-application",
            )],
            note: None,
            status: Some(ProjectStatus::Active),
        },
        Project {
            title: "Django CRM Web Application".to_string(),
            description: "CRM-style web app built with Django (university project).".to_string(),
            tech: strings(&["Python", "Django", "HTML/CSS"]),
            links: vec![LinkRef::new(
                "GitHub",
                "https://github.com/Raozas/Django-CRM-Web-Application",
            )],
            note: Some(
                "Tip: add screenshots + a short README (what it does, how to run).".to_string(),
            ),
            status: Some(ProjectStatus::Active),
        },
        Project {
            title: "SNS Web App (Frontend)".to_string(),
            description: "React + Vite frontend app. Backend setup is currently not available \
                          (old Firebase config)."
                .to_string(),
            tech: strings(&["React", "Vite", "Tailwind CSS"]),
            links: vec![LinkRef::new("GitHub", "https://github.com/Raozas/sns-web-app")],
            note: None,
            status: Some(ProjectStatus::Archived),
        },
        Project {
            title: "Job Match (Confidential)".to_string(),
            description: "Job matching mobile app (React Native). Client/university project \
                          under NDA."
                .to_string(),
            tech: strings(&["React Native", "TypeScript"]),
            links: Vec::new(),
            note: Some(
                "Recommended: keep the repo private. You can show screenshots or describe \
                 features without sharing code."
                    .to_string(),
            ),
            status: Some(ProjectStatus::Confidential),
        },
    ]
}

fn builtin_tech_stack() -> Vec<String> {
    strings(&[
        "React Native",
        "TypeScript",
        "React",
        "Next.js",
        "REST API",
        "Git / GitLab",
        "UI implementation",
    ])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
