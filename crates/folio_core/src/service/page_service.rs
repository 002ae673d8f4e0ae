//! Page render-pass service.
//!
//! # Responsibility
//! - Provide the stable entry point for one full render pass.
//! - Delegate data access to a `CatalogSource` and output to a `RenderSink`.
//!
//! # Invariants
//! - Each pass derives the page fresh from the catalog; no state is kept
//!   between calls.
//! - The service never mutates catalog data.

use crate::catalog::CatalogSource;
use crate::render::RenderSink;
use crate::view::page::PageView;
use log::debug;

/// Service facade over a catalog source.
pub struct PageService<C: CatalogSource> {
    catalog: C,
}

impl<C: CatalogSource> PageService<C> {
    /// Creates a service over the provided catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Derives the full page projection.
    pub fn page_view(&self) -> PageView {
        let page = PageView::from_catalog(&self.catalog);
        debug!(
            "event=page_derived module=service status=ok projects={} tech={}",
            page.projects.len(),
            page.tech_stack.len()
        );
        page
    }

    /// Runs one complete render pass through the given sink.
    ///
    /// # Errors
    /// - Propagates the sink's own failure unchanged; derivation itself
    ///   cannot fail.
    pub fn render_into<S: RenderSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.present(&self.page_view())
    }
}
