use std::fmt::Display;
use std::hash::Hash;

use reference_data_sdk::{
    EntityKind, Label, NewLabel, SeedBundle, SeedReport, Status, split_classification_label_code,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};

use super::{ReferenceDataService, require_actor};
use crate::domain::error::{DomainError, ValidationIssue};
use crate::domain::hierarchy::{self, HierarchyError};
use crate::domain::validation;

impl ReferenceDataService {
    /// Validates `bundle`, orders its trees parents-first and inserts every
    /// row whose key is not stored yet. Existing rows are never modified.
    ///
    /// # Errors
    ///
    /// `InvalidSeed` listing every validation finding, `Constraint` when the
    /// store rejects a row (unknown reference, uniqueness, CHECK).
    #[instrument(skip(self, bundle), fields(rows = bundle.len()))]
    pub async fn seed(&self, bundle: SeedBundle, actor: &str) -> Result<SeedReport, DomainError> {
        require_actor(actor)?;

        if let Err(err) = validation::validate_bundle(&bundle, &self.config.canonical_locale) {
            for issue in err.validation_issues().unwrap_or_default() {
                warn!(%issue, "Seed validation issue");
            }
            warn!("Seed bundle rejected");
            return Err(err);
        }
        self.check_label_targets(&bundle).await?;

        let bundle = order_bundle(bundle)?;
        let report = self
            .repo
            .seed(&bundle, actor, OffsetDateTime::now_utc())
            .await?;
        self.invalidate_names();

        for table in &report.tables {
            debug!(
                table = %table.table,
                inserted = table.inserted,
                skipped = table.skipped,
                "Seeded table"
            );
        }
        info!(
            inserted = report.inserted(),
            skipped = report.skipped(),
            "Seed applied"
        );
        Ok(report)
    }

    /// Labels have no foreign key to their target row, so every label whose
    /// target is not in the bundle must name a stored row.
    async fn check_label_targets(&self, bundle: &SeedBundle) -> Result<(), DomainError> {
        let mut issues = Vec::new();
        for label in validation::labels_targeting_outside(bundle) {
            if self
                .repo
                .canonical_name(label.entity, &label.code)
                .await?
                .is_none()
            {
                let key = format!("{}/{}/{}", label.entity, label.code, label.locale_code);
                warn!(%key, "Seed label targets an unknown row");
                issues.push(ValidationIssue::new(
                    "label",
                    key,
                    format!("{} '{}' does not exist", label.entity, label.code),
                ));
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidSeed(issues))
        }
    }

    /// Inserts or replaces a translation for a non-canonical locale.
    ///
    /// # Errors
    ///
    /// `Validation` for the canonical locale, a blank name or a malformed
    /// composite code; `NotFound` when the locale or the target row is unknown.
    #[instrument(skip(self, label), fields(entity = %label.entity, code = %label.code, locale = %label.locale_code))]
    pub async fn put_label(&self, label: NewLabel, actor: &str) -> Result<Label, DomainError> {
        require_actor(actor)?;

        if label.locale_code == self.config.canonical_locale {
            return Err(DomainError::validation(
                "locale_code",
                format!(
                    "'{}' is the canonical locale; its names live on the entity row",
                    label.locale_code
                ),
            ));
        }
        if label.name.trim().is_empty() {
            return Err(DomainError::validation("name", "must not be blank"));
        }
        if label.entity.classification_code().is_some()
            && split_classification_label_code(&label.code).is_none()
        {
            return Err(DomainError::validation(
                "code",
                "must be written as 'domain:code'",
            ));
        }
        if self.repo.find_locale(&label.locale_code).await?.is_none() {
            return Err(DomainError::not_found(EntityKind::Locale, &label.locale_code));
        }
        if self
            .repo
            .canonical_name(label.entity, &label.code)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(label.entity, &label.code));
        }

        let saved = self
            .repo
            .upsert_label(label, actor, OffsetDateTime::now_utc())
            .await?;
        self.invalidate_names();

        info!("Label saved");
        Ok(saved)
    }

    /// Deprecates or reactivates a country, currency, language or locale.
    ///
    /// # Errors
    ///
    /// `Validation` for entities without a status flag, `NotFound` for an
    /// unknown code, `Constraint` when reactivation clashes with a unique code.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        actor: &str,
    ) -> Result<(), DomainError> {
        require_actor(actor)?;

        if !entity.has_status() {
            return Err(DomainError::validation(
                "entity",
                format!("{entity} rows carry no status"),
            ));
        }

        let touched = self
            .repo
            .set_status(entity, code, status, actor, OffsetDateTime::now_utc())
            .await?;
        if touched == 0 {
            return Err(DomainError::not_found(entity, code));
        }

        info!("Status changed");
        Ok(())
    }
}

/// Reorders every tree-shaped table so parents are inserted before children.
fn order_bundle(mut bundle: SeedBundle) -> Result<SeedBundle, DomainError> {
    bundle.state_regions = parents_first(bundle.state_regions, EntityKind::StateRegion, |s| {
        (s.code.clone(), s.parent_code.clone())
    })?;
    bundle.timezones = parents_first(bundle.timezones, EntityKind::Timezone, |tz| {
        (tz.id.clone(), tz.canonical_id.clone())
    })?;
    bundle.commodity_codes = parents_first(bundle.commodity_codes, EntityKind::CommodityCode, |c| {
        (
            format!("{}:{}", c.domain, c.code),
            c.parent_code.as_ref().map(|p| format!("{}:{p}", c.domain)),
        )
    })?;
    bundle.industry_codes = parents_first(bundle.industry_codes, EntityKind::IndustryCode, |c| {
        (
            format!("{}:{}", c.domain, c.code),
            c.parent_code.as_ref().map(|p| format!("{}:{p}", c.domain)),
        )
    })?;
    Ok(bundle)
}

fn parents_first<T, K, F>(rows: Vec<T>, entity: EntityKind, key: F) -> Result<Vec<T>, DomainError>
where
    K: Eq + Hash + Clone + Display,
    F: Fn(&T) -> (K, Option<K>),
{
    let nodes: Vec<(K, Option<K>)> = rows.iter().map(key).collect();
    let order = hierarchy::parents_first(&nodes).map_err(|err| {
        let code = match err {
            HierarchyError::SelfLoop(k) | HierarchyError::Cycle(k) => k.to_string(),
        };
        DomainError::HierarchyCycle { entity, code }
    })?;
    Ok(hierarchy::apply_order(rows, &order))
}
