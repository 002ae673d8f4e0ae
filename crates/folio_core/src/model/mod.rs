//! Portfolio domain model.
//!
//! # Responsibility
//! - Define canonical data structures consumed by view derivation.
//! - Keep "absent" and "empty-but-present" states distinguishable.
//!
//! # Invariants
//! - Every record is immutable after catalog construction.
//! - Optional presentation state is modeled with `Option`, never sentinel
//!   values.

pub mod project;
