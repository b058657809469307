//! Domain layer - business rules for the reference-data store.
//!
//! ## Layering Rules
//!
//! The domain layer:
//! - **MAY** import: `reference_data_sdk` (contract types), `config`
//! - **MUST NOT** import: `infra::*` or SeaORM (one-way dependency: infra -> domain)
//! - **Owns**: the repository port, seed validation, hierarchy ordering and
//!   the locale fallback rule

pub mod cache;
pub mod error;
pub mod fallback;
pub mod hierarchy;
pub mod repo;
pub mod service;
pub mod validation;
