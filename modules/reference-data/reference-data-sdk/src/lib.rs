//! Reference Data SDK
//!
//! This crate provides the public API for the reference-data module:
//! - `ReferenceDataClientV1` trait for lookups, localization and seeding
//! - Model types (`Country`, `Currency`, `Locale`, `Label`, ...)
//! - Seed bundle and report types
//! - Error type (`ReferenceDataError`)

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;
pub mod seed;

pub use api::ReferenceDataClientV1;
pub use errors::ReferenceDataError;
pub use models::{
    Audit, ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency,
    EntityKind, Label, Language, Locale, NewClassificationCode, NewClassificationDomain,
    NewCountry, NewCurrency, NewLabel, NewLanguage, NewLocale, NewStateRegion, NewTimezone,
    NewUom, ParseEnumError, QuantityType, StateRegion, Status, TextDirection, Timezone, Uom,
    classification_label_code, split_classification_label_code,
};
pub use seed::{SeedBundle, SeedReport, TableSeedStats};
