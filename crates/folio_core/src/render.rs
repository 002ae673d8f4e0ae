//! Rendering collaborator boundary.
//!
//! # Responsibility
//! - Define the seam across which enriched page data leaves this crate.
//!
//! # Invariants
//! - Core hands over data-only projections and never inspects the visual
//!   result; styling, layout and iconography live entirely on the other
//!   side of this trait.

use crate::view::page::PageView;
use std::error::Error;

/// Output boundary for one render pass.
///
/// Implementations turn render instructions and badge variants into visual
/// output (terminal text, HTML, anything). Core treats the failure type as
/// opaque; a sink that cannot fail may use `std::convert::Infallible`.
pub trait RenderSink {
    /// Sink-specific failure type.
    type Error: Error;

    /// Presents one fully derived page.
    fn present(&mut self, page: &PageView) -> Result<(), Self::Error>;
}
