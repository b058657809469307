use reference_data_sdk::EntityKind;
use tracing::{debug, instrument};

use super::ReferenceDataService;
use crate::domain::cache::LocalizedNameCache;
use crate::domain::error::DomainError;
use crate::domain::fallback;

impl ReferenceDataService {
    /// Best translated name for `(entity, code)` in `locale`.
    ///
    /// Tries the exact tag, then its base language (the part before the first
    /// hyphen). Returns `None` when neither has a label; the canonical name is
    /// never returned here. Unknown entities and locales are not errors.
    ///
    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    #[instrument(skip(self), level = "debug")]
    pub async fn localized_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<Option<String>, DomainError> {
        if let Some(cached) = self
            .names
            .as_ref()
            .and_then(|cache| cache.get(entity, code, locale))
        {
            return Ok(cached);
        }

        let chain = fallback::fallback_chain(locale);
        if chain.is_empty() {
            return Ok(None);
        }

        let generation = self.names.as_ref().map(LocalizedNameCache::generation);
        let labels = self.repo.find_label_names(entity, code, &chain).await?;
        let name = fallback::resolve(locale, &labels).map(ToOwned::to_owned);
        debug!(found = name.is_some(), candidates = labels.len(), "Resolved localized name");

        if let (Some(cache), Some(generation)) = (&self.names, generation) {
            cache.insert(generation, entity, code, locale, name.clone());
        }
        Ok(name)
    }

    /// The localized name, else the canonical name on the entity row.
    ///
    /// # Errors
    ///
    /// `NotFound` when neither a label nor the entity row exists.
    pub async fn display_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<String, DomainError> {
        if let Some(name) = self.localized_name(entity, code, locale).await? {
            return Ok(name);
        }
        self.repo
            .canonical_name(entity, code)
            .await?
            .ok_or_else(|| DomainError::not_found(entity, code))
    }
}
