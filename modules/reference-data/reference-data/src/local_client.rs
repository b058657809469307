//! Local (in-process) client for the Reference Data module.

use std::sync::Arc;

use async_trait::async_trait;
use reference_data_sdk::{
    ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency, EntityKind,
    Label, Language, Locale, NewLabel, QuantityType, ReferenceDataClientV1, ReferenceDataError,
    SeedBundle, SeedReport, StateRegion, Status, TextDirection, Timezone, Uom,
};

use crate::domain::service::ReferenceDataService;

/// Adapts [`ReferenceDataService`] to the SDK trait.
pub struct ReferenceDataLocalClient {
    service: Arc<ReferenceDataService>,
}

impl ReferenceDataLocalClient {
    #[must_use]
    pub fn new(service: Arc<ReferenceDataService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ReferenceDataClientV1 for ReferenceDataLocalClient {
    async fn get_country(&self, code2: &str) -> Result<Country, ReferenceDataError> {
        self.service.get_country(code2).await.map_err(Into::into)
    }

    async fn list_countries(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Country>, ReferenceDataError> {
        self.service.list_countries(status).await.map_err(Into::into)
    }

    async fn get_state_region(&self, code: &str) -> Result<StateRegion, ReferenceDataError> {
        self.service.get_state_region(code).await.map_err(Into::into)
    }

    async fn list_state_regions(
        &self,
        country_code2: &str,
    ) -> Result<Vec<StateRegion>, ReferenceDataError> {
        self.service
            .list_state_regions(country_code2)
            .await
            .map_err(Into::into)
    }

    async fn state_region_path(
        &self,
        code: &str,
    ) -> Result<Vec<StateRegion>, ReferenceDataError> {
        self.service.state_region_path(code).await.map_err(Into::into)
    }

    async fn get_currency(&self, code: &str) -> Result<Currency, ReferenceDataError> {
        self.service.get_currency(code).await.map_err(Into::into)
    }

    async fn list_currencies(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Currency>, ReferenceDataError> {
        self.service.list_currencies(status).await.map_err(Into::into)
    }

    async fn get_language(&self, code: &str) -> Result<Language, ReferenceDataError> {
        self.service.get_language(code).await.map_err(Into::into)
    }

    async fn list_languages(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Language>, ReferenceDataError> {
        self.service.list_languages(status).await.map_err(Into::into)
    }

    async fn get_locale(&self, code: &str) -> Result<Locale, ReferenceDataError> {
        self.service.get_locale(code).await.map_err(Into::into)
    }

    async fn list_locales(
        &self,
        language_code: Option<&str>,
    ) -> Result<Vec<Locale>, ReferenceDataError> {
        self.service
            .list_locales(language_code)
            .await
            .map_err(Into::into)
    }

    async fn locale_direction(&self, code: &str) -> Result<TextDirection, ReferenceDataError> {
        self.service.locale_direction(code).await.map_err(Into::into)
    }

    async fn get_timezone(&self, id: &str) -> Result<Timezone, ReferenceDataError> {
        self.service.get_timezone(id).await.map_err(Into::into)
    }

    async fn canonical_timezone(&self, id: &str) -> Result<Timezone, ReferenceDataError> {
        self.service.canonical_timezone(id).await.map_err(Into::into)
    }

    async fn get_uom(&self, code: &str) -> Result<Uom, ReferenceDataError> {
        self.service.get_uom(code).await.map_err(Into::into)
    }

    async fn list_uoms(
        &self,
        quantity_type: Option<QuantityType>,
    ) -> Result<Vec<Uom>, ReferenceDataError> {
        self.service.list_uoms(quantity_type).await.map_err(Into::into)
    }

    async fn list_classification_domains(
        &self,
        kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, ReferenceDataError> {
        self.service
            .list_classification_domains(kind)
            .await
            .map_err(Into::into)
    }

    async fn get_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<ClassificationCode, ReferenceDataError> {
        self.service
            .get_classification_code(kind, domain, code)
            .await
            .map_err(Into::into)
    }

    async fn classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, ReferenceDataError> {
        self.service
            .classification_children(kind, domain, parent)
            .await
            .map_err(Into::into)
    }

    async fn classification_path(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Vec<ClassificationCode>, ReferenceDataError> {
        self.service
            .classification_path(kind, domain, code)
            .await
            .map_err(Into::into)
    }

    async fn localized_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<Option<String>, ReferenceDataError> {
        self.service
            .localized_name(entity, code, locale)
            .await
            .map_err(Into::into)
    }

    async fn display_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<String, ReferenceDataError> {
        self.service
            .display_name(entity, code, locale)
            .await
            .map_err(Into::into)
    }

    async fn put_label(&self, label: NewLabel, actor: &str) -> Result<Label, ReferenceDataError> {
        self.service.put_label(label, actor).await.map_err(Into::into)
    }

    async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        actor: &str,
    ) -> Result<(), ReferenceDataError> {
        self.service
            .set_status(entity, code, status, actor)
            .await
            .map_err(Into::into)
    }

    async fn seed(
        &self,
        bundle: SeedBundle,
        actor: &str,
    ) -> Result<SeedReport, ReferenceDataError> {
        self.service.seed(bundle, actor).await.map_err(Into::into)
    }
}
