//! View derivation: pure mappings from catalog records to render data.
//!
//! # Responsibility
//! - Derive presentation attributes (badge variant, link affordance, note)
//!   without mutating source records.
//! - Assemble the enriched page projection handed to the rendering
//!   collaborator.
//!
//! # Invariants
//! - Every operation is a total, stateless function; no error path exists
//!   within the declared types.
//! - Input order is preserved everywhere; nothing is deduplicated.

pub mod instruction;
pub mod page;
