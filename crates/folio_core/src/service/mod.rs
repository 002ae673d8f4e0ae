//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog reads and view derivation into render-pass APIs.
//! - Keep frontends decoupled from catalog and derivation details.

pub mod page_service;
