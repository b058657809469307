//! `ReferenceDataClientV1` trait definition.
//!
//! Read operations are side-effect free and safe to call concurrently.
//! Write operations are administrative and take the acting principal's name,
//! which is recorded in the audit columns.

use async_trait::async_trait;

use crate::errors::ReferenceDataError;
use crate::models::{
    ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency, EntityKind,
    Label, Language, Locale, NewLabel, QuantityType, StateRegion, Status, TextDirection,
    Timezone, Uom,
};
use crate::seed::{SeedBundle, SeedReport};

/// Public API trait for the reference-data module (Version 1).
#[async_trait]
pub trait ReferenceDataClientV1: Send + Sync {
    async fn get_country(&self, code2: &str) -> Result<Country, ReferenceDataError>;

    async fn list_countries(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Country>, ReferenceDataError>;

    async fn get_state_region(&self, code: &str) -> Result<StateRegion, ReferenceDataError>;

    async fn list_state_regions(
        &self,
        country_code2: &str,
    ) -> Result<Vec<StateRegion>, ReferenceDataError>;

    /// Root-to-node chain of subdivisions ending with `code`.
    async fn state_region_path(&self, code: &str)
    -> Result<Vec<StateRegion>, ReferenceDataError>;

    async fn get_currency(&self, code: &str) -> Result<Currency, ReferenceDataError>;

    async fn list_currencies(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Currency>, ReferenceDataError>;

    async fn get_language(&self, code: &str) -> Result<Language, ReferenceDataError>;

    async fn list_languages(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Language>, ReferenceDataError>;

    async fn get_locale(&self, code: &str) -> Result<Locale, ReferenceDataError>;

    async fn list_locales(
        &self,
        language_code: Option<&str>,
    ) -> Result<Vec<Locale>, ReferenceDataError>;

    /// The locale's direction override, else its language's direction.
    async fn locale_direction(&self, code: &str) -> Result<TextDirection, ReferenceDataError>;

    async fn get_timezone(&self, id: &str) -> Result<Timezone, ReferenceDataError>;

    /// Follows alias links until a canonical zone is reached.
    async fn canonical_timezone(&self, id: &str) -> Result<Timezone, ReferenceDataError>;

    async fn get_uom(&self, code: &str) -> Result<Uom, ReferenceDataError>;

    async fn list_uoms(
        &self,
        quantity_type: Option<QuantityType>,
    ) -> Result<Vec<Uom>, ReferenceDataError>;

    async fn list_classification_domains(
        &self,
        kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, ReferenceDataError>;

    async fn get_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<ClassificationCode, ReferenceDataError>;

    /// Direct children of `parent` within `domain`; `None` lists the roots.
    async fn classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, ReferenceDataError>;

    /// Root-to-node chain of codes ending with `code`.
    async fn classification_path(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Vec<ClassificationCode>, ReferenceDataError>;

    /// Translated name for `locale`, falling back to its base language.
    ///
    /// Returns `None` when neither exists; the canonical name is the caller's
    /// fallback (see [`ReferenceDataClientV1::display_name`]).
    async fn localized_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<Option<String>, ReferenceDataError>;

    /// Localized name if any, else the canonical (English) name of the row.
    async fn display_name(
        &self,
        entity: EntityKind,
        code: &str,
        locale: &str,
    ) -> Result<String, ReferenceDataError>;

    /// Creates or replaces a translation.
    async fn put_label(&self, label: NewLabel, actor: &str) -> Result<Label, ReferenceDataError>;

    /// Deprecates or reactivates a country, currency, language or locale.
    async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        actor: &str,
    ) -> Result<(), ReferenceDataError>;

    /// Inserts every row of `bundle` whose key is not present yet.
    async fn seed(&self, bundle: SeedBundle, actor: &str)
    -> Result<SeedReport, ReferenceDataError>;
}
