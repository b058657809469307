use std::collections::HashSet;

use reference_data_sdk::{
    ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency, EntityKind,
    Language, Locale, QuantityType, StateRegion, Status, TextDirection, Timezone, Uom,
};
use tracing::{debug, instrument};

use super::ReferenceDataService;
use crate::domain::error::DomainError;

// Plain reads. Every method returns `DomainError::NotFound` for an unknown key
// and `DomainError::Database` when the store cannot be read.
impl ReferenceDataService {
    /// # Errors
    ///
    /// `NotFound` for an unknown code.
    pub async fn get_country(&self, code2: &str) -> Result<Country, DomainError> {
        self.repo
            .find_country(code2)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Country, code2))
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_countries(&self, status: Option<Status>) -> Result<Vec<Country>, DomainError> {
        self.repo.list_countries(status).await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown code.
    pub async fn get_state_region(&self, code: &str) -> Result<StateRegion, DomainError> {
        self.repo
            .find_state_region(code)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::StateRegion, code))
    }

    /// Subdivisions of a country; `NotFound` if the country itself is unknown.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown country.
    pub async fn list_state_regions(
        &self,
        country_code2: &str,
    ) -> Result<Vec<StateRegion>, DomainError> {
        self.get_country(country_code2).await?;
        self.repo.list_state_regions(country_code2).await
    }

    /// Root-first chain of subdivisions ending at `code`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown code, `HierarchyCycle` or `HierarchyTooDeep`
    /// when the stored parent links are malformed.
    #[instrument(skip(self))]
    pub async fn state_region_path(&self, code: &str) -> Result<Vec<StateRegion>, DomainError> {
        let max = self.config.max_hierarchy_depth;
        let mut path = vec![self.get_state_region(code).await?];
        let mut seen: HashSet<String> = HashSet::from([code.to_owned()]);

        while let Some(parent) = path.last().and_then(|r| r.parent_code.clone()) {
            if !seen.insert(parent.clone()) {
                return Err(DomainError::HierarchyCycle {
                    entity: EntityKind::StateRegion,
                    code: parent,
                });
            }
            if path.len() >= usize::from(max) {
                return Err(DomainError::HierarchyTooDeep {
                    entity: EntityKind::StateRegion,
                    code: code.to_owned(),
                    max,
                });
            }
            path.push(self.get_state_region(&parent).await?);
        }

        path.reverse();
        debug!(depth = path.len(), "Resolved subdivision path");
        Ok(path)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown code.
    pub async fn get_currency(&self, code: &str) -> Result<Currency, DomainError> {
        self.repo
            .find_currency(code)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Currency, code))
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_currencies(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Currency>, DomainError> {
        self.repo.list_currencies(status).await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown code.
    pub async fn get_language(&self, code: &str) -> Result<Language, DomainError> {
        self.repo
            .find_language(code)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Language, code))
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_languages(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Language>, DomainError> {
        self.repo.list_languages(status).await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tag.
    pub async fn get_locale(&self, code: &str) -> Result<Locale, DomainError> {
        self.repo
            .find_locale(code)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Locale, code))
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_locales(&self, language_code: Option<&str>) -> Result<Vec<Locale>, DomainError> {
        self.repo.list_locales(language_code).await
    }

    /// The locale's own direction, else the direction of its language.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown tag.
    pub async fn locale_direction(&self, code: &str) -> Result<TextDirection, DomainError> {
        let locale = self.get_locale(code).await?;
        if let Some(direction) = locale.direction {
            return Ok(direction);
        }
        let language = self.get_language(&locale.language_code).await?;
        Ok(locale.effective_direction(language.direction))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown identifier.
    pub async fn get_timezone(&self, id: &str) -> Result<Timezone, DomainError> {
        self.repo
            .find_timezone(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Timezone, id))
    }

    /// Follows alias links from `id` to the canonical zone.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown identifier, `AliasChainTooLong` when more than
    /// `max_alias_hops` links are needed, `HierarchyCycle` when a link revisits
    /// a zone.
    #[instrument(skip(self))]
    pub async fn canonical_timezone(&self, id: &str) -> Result<Timezone, DomainError> {
        let max = self.config.max_alias_hops;
        let mut zone = self.get_timezone(id).await?;
        let mut seen: HashSet<String> = HashSet::from([zone.id.clone()]);
        let mut hops: u8 = 0;

        while zone.is_alias {
            let Some(next) = zone.canonical_id.clone() else {
                break;
            };
            if hops >= max {
                return Err(DomainError::AliasChainTooLong {
                    id: id.to_owned(),
                    max,
                });
            }
            if !seen.insert(next.clone()) {
                return Err(DomainError::HierarchyCycle {
                    entity: EntityKind::Timezone,
                    code: next,
                });
            }
            zone = self.get_timezone(&next).await?;
            hops += 1;
        }

        debug!(canonical = %zone.id, hops, "Resolved timezone alias");
        Ok(zone)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown code.
    pub async fn get_uom(&self, code: &str) -> Result<Uom, DomainError> {
        self.repo
            .find_uom(code)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Uom, code))
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_uoms(&self, quantity_type: Option<QuantityType>) -> Result<Vec<Uom>, DomainError> {
        self.repo.list_uoms(quantity_type).await
    }

    /// # Errors
    ///
    /// `Database` when the store cannot be read.
    pub async fn list_classification_domains(
        &self,
        kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, DomainError> {
        self.repo.list_classification_domains(kind).await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown `(domain, code)`.
    pub async fn get_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<ClassificationCode, DomainError> {
        self.repo
            .find_classification_code(kind, domain, code)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    kind.code_entity(),
                    reference_data_sdk::classification_label_code(domain, code),
                )
            })
    }

    /// Direct children of `parent`, or the roots of `domain` when `parent` is `None`.
    ///
    /// # Errors
    ///
    /// `NotFound` when `parent` is given but unknown.
    pub async fn classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, DomainError> {
        if let Some(parent) = parent {
            self.get_classification_code(kind, domain, parent).await?;
        }
        self.repo
            .list_classification_children(kind, domain, parent)
            .await
    }

    /// Root-first chain of codes ending at `(domain, code)`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown code, `HierarchyCycle` or `HierarchyTooDeep`
    /// when the stored parent links are malformed.
    #[instrument(skip(self))]
    pub async fn classification_path(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Vec<ClassificationCode>, DomainError> {
        let max = self.config.max_hierarchy_depth;
        let mut path = vec![self.get_classification_code(kind, domain, code).await?];
        let mut seen: HashSet<String> = HashSet::from([code.to_owned()]);

        while let Some(parent) = path.last().and_then(|c| c.parent_code.clone()) {
            if !seen.insert(parent.clone()) {
                return Err(DomainError::HierarchyCycle {
                    entity: kind.code_entity(),
                    code: reference_data_sdk::classification_label_code(domain, &parent),
                });
            }
            if path.len() >= usize::from(max) {
                return Err(DomainError::HierarchyTooDeep {
                    entity: kind.code_entity(),
                    code: reference_data_sdk::classification_label_code(domain, code),
                    max,
                });
            }
            path.push(self.get_classification_code(kind, domain, &parent).await?);
        }

        path.reverse();
        Ok(path)
    }
}
