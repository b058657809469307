use async_trait::async_trait;
use reference_data_sdk::{
    ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency, EntityKind,
    Label, Language, Locale, NewLabel, QuantityType, SeedBundle, SeedReport, StateRegion, Status,
    Timezone, Uom,
};
use time::OffsetDateTime;

use super::error::DomainError;

/// Storage port for the reference-data tables.
///
/// Lookups return `Ok(None)` for an unknown key; the service decides whether
/// that is an error. Classification codes used as label keys are written as
/// `domain:code`.
#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    async fn find_country(&self, code2: &str) -> Result<Option<Country>, DomainError>;

    async fn list_countries(&self, status: Option<Status>) -> Result<Vec<Country>, DomainError>;

    async fn find_state_region(&self, code: &str) -> Result<Option<StateRegion>, DomainError>;

    async fn list_state_regions(&self, country_code2: &str)
    -> Result<Vec<StateRegion>, DomainError>;

    async fn find_currency(&self, code: &str) -> Result<Option<Currency>, DomainError>;

    async fn list_currencies(&self, status: Option<Status>) -> Result<Vec<Currency>, DomainError>;

    async fn find_language(&self, code: &str) -> Result<Option<Language>, DomainError>;

    async fn list_languages(&self, status: Option<Status>) -> Result<Vec<Language>, DomainError>;

    async fn find_locale(&self, code: &str) -> Result<Option<Locale>, DomainError>;

    async fn list_locales(&self, language_code: Option<&str>) -> Result<Vec<Locale>, DomainError>;

    async fn find_timezone(&self, id: &str) -> Result<Option<Timezone>, DomainError>;

    async fn find_uom(&self, code: &str) -> Result<Option<Uom>, DomainError>;

    async fn list_uoms(
        &self,
        quantity_type: Option<QuantityType>,
    ) -> Result<Vec<Uom>, DomainError>;

    async fn list_classification_domains(
        &self,
        kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, DomainError>;

    async fn find_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Option<ClassificationCode>, DomainError>;

    /// Direct children of `parent` within `domain`, or the roots when `parent` is `None`.
    async fn list_classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, DomainError>;

    /// `(locale_code, name)` of every label for `(entity, code)` whose locale
    /// is one of `locales`. Order is unspecified.
    async fn find_label_names(
        &self,
        entity: EntityKind,
        code: &str,
        locales: &[&str],
    ) -> Result<Vec<(String, String)>, DomainError>;

    /// The canonical name stored on the entity row itself.
    async fn canonical_name(
        &self,
        entity: EntityKind,
        code: &str,
    ) -> Result<Option<String>, DomainError>;

    /// Inserts the label or overwrites name and description of an existing one.
    async fn upsert_label(
        &self,
        label: NewLabel,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<Label, DomainError>;

    /// Updates the status flag; returns the number of rows touched.
    async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<u64, DomainError>;

    /// Insert-or-skip every row of `bundle` in a single transaction.
    ///
    /// Rows must already be ordered parents-first within each table.
    async fn seed(
        &self,
        bundle: &SeedBundle,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<SeedReport, DomainError>;

    /// Number of rows per table, in seeding order.
    async fn row_counts(&self) -> Result<Vec<(&'static str, u64)>, DomainError>;
}
