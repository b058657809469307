//! Domain service layer - business logic and rules.
//!
//! ## Architecture
//!
//! One service, split by concern:
//! - `lookups` - get/list per entity, locale direction, alias and tree walks
//! - `localization` - `localized_name` and the canonical-name fallback
//! - `admin` - seeding, label upserts and status changes
//!
//! Reads are side-effect free and may run concurrently with each other.

use std::sync::Arc;

use crate::config::ReferenceDataConfig;
use crate::domain::cache::LocalizedNameCache;
use crate::domain::error::DomainError;
use crate::domain::repo::ReferenceDataRepository;

mod admin;
mod localization;
mod lookups;

#[cfg(test)]
mod tests;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub canonical_locale: String,
    pub cache_localized_names: bool,
    pub max_alias_hops: u8,
    pub max_hierarchy_depth: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&ReferenceDataConfig::default())
    }
}

impl From<&ReferenceDataConfig> for ServiceConfig {
    fn from(cfg: &ReferenceDataConfig) -> Self {
        Self {
            canonical_locale: cfg.canonical_locale.clone(),
            cache_localized_names: cfg.cache_localized_names,
            max_alias_hops: cfg.max_alias_hops,
            max_hierarchy_depth: cfg.max_hierarchy_depth,
        }
    }
}

/// Business logic over a [`ReferenceDataRepository`].
pub struct ReferenceDataService {
    repo: Arc<dyn ReferenceDataRepository>,
    config: ServiceConfig,
    names: Option<LocalizedNameCache>,
}

impl ReferenceDataService {
    #[must_use]
    pub fn new(repo: Arc<dyn ReferenceDataRepository>, config: ServiceConfig) -> Self {
        let names = config
            .cache_localized_names
            .then(LocalizedNameCache::new);
        Self {
            repo,
            config,
            names,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Number of rows per table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Database` if the store cannot be read.
    pub async fn row_counts(&self) -> Result<Vec<(&'static str, u64)>, DomainError> {
        self.repo.row_counts().await
    }

    fn invalidate_names(&self) {
        if let Some(cache) = &self.names {
            cache.clear();
        }
    }
}

fn require_actor(actor: &str) -> Result<(), DomainError> {
    if actor.trim().is_empty() {
        return Err(DomainError::validation("actor", "must not be blank"));
    }
    Ok(())
}
