//! Core view-model logic for the portfolio page.
//! This crate is the single source of truth for presentation invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod view;

pub use catalog::{builtin_catalog, CatalogError, CatalogResult, CatalogSource, StaticCatalog};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{LinkRef, Project, ProjectStatus, ProjectValidationError};
pub use render::RenderSink;
pub use service::page_service::PageService;
pub use view::instruction::{BadgeVariant, RenderInstruction};
pub use view::page::{PageView, ProjectView, NO_PUBLIC_LINK_FALLBACK};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
