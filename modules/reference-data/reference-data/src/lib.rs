//! Reference Data Module
//!
//! Canonical codes for a fixed set of global standards (countries, subdivisions,
//! currencies, languages, locales, time zones, units of measure, commodity and
//! industry classifications) plus translation overlays with language-level
//! fallback.
//!
//! ## Public API
//!
//! The public API is defined in the `reference-data-sdk` crate and re-exported here:
//! - `ReferenceDataClientV1` - trait for lookups, localization and seeding
//! - `Country`, `Currency`, `Locale`, `Label`, ... - data models
//! - `ReferenceDataError` - error type
//!
//! Hosts build a [`ReferenceData`] from a [`config::ReferenceDataConfig`] and
//! hand out `ReferenceData::client()` to consumers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use reference_data_sdk::{
    ReferenceDataClientV1, ReferenceDataError, SeedBundle, SeedReport,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::ReferenceData;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests and the CLI; use the SDK types for stable APIs.
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
