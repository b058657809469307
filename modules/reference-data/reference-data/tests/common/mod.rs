#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for reference-data integration tests

use reference_data::config::ReferenceDataConfig;
use reference_data::{ReferenceData, SeedBundle};

pub const ACTOR: &str = "test-runner";

/// Migrated in-memory SQLite store with no rows.
pub async fn empty_store() -> ReferenceData {
    ReferenceData::connect(&ReferenceDataConfig::default())
        .await
        .expect("in-memory store")
}

/// Migrated in-memory SQLite store holding the built-in catalog.
pub async fn seeded_store() -> ReferenceData {
    let cfg = ReferenceDataConfig {
        seed_on_startup: true,
        seed_actor: ACTOR.to_owned(),
        ..ReferenceDataConfig::default()
    };
    ReferenceData::connect(&cfg).await.expect("seeded store")
}

/// Same as [`seeded_store`] with the localized-name cache switched on.
pub async fn cached_store() -> ReferenceData {
    let cfg = ReferenceDataConfig {
        seed_on_startup: true,
        seed_actor: ACTOR.to_owned(),
        cache_localized_names: true,
        ..ReferenceDataConfig::default()
    };
    ReferenceData::connect(&cfg).await.expect("cached store")
}

pub fn bundle(value: serde_json::Value) -> SeedBundle {
    serde_json::from_value(value).expect("valid bundle json")
}
