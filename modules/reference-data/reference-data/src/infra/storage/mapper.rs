//! Conversions between SeaORM models and SDK contract types.
//!
//! Enumerated columns are stored as their tag strings; a tag the SDK does not
//! know means the row was written behind the store's back and is reported as
//! a database error.

use std::str::FromStr;

use reference_data_sdk::{
    Audit, ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency,
    EntityKind, Label, Language, Locale, NewClassificationCode, NewClassificationDomain,
    NewCountry, NewCurrency, NewLabel, NewLanguage, NewLocale, NewStateRegion, NewTimezone,
    NewUom, ParseEnumError, StateRegion, Timezone, Uom,
};
use sea_orm::ActiveValue::{NotSet, Set};
use time::OffsetDateTime;

use super::entity::{
    commodity_code, commodity_domain, country, currency, industry_code, industry_domain, label,
    language, locale, state_region, timezone, uom,
};
use crate::domain::error::DomainError;

fn parse<T>(value: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ParseEnumError>,
{
    value
        .parse()
        .map_err(|e: ParseEnumError| DomainError::database(format!("corrupt row: {e}")))
}

fn small(column: &str, value: i32) -> Result<u8, DomainError> {
    u8::try_from(value)
        .map_err(|_| DomainError::database(format!("corrupt row: {column} = {value}")))
}

fn audit(
    created_at: OffsetDateTime,
    created_by: String,
    updated_at: Option<OffsetDateTime>,
    updated_by: Option<String>,
) -> Audit {
    Audit {
        created_at,
        created_by,
        updated_at,
        updated_by,
    }
}

impl TryFrom<country::Model> for Country {
    type Error = DomainError;

    fn try_from(m: country::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse(&m.status)?,
            code2: m.code2,
            code3: m.code3,
            numeric3: m.numeric3,
            name: m.name,
            official_name: m.official_name,
            region: m.region,
            subregion: m.subregion,
            metadata: m.metadata,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

impl From<state_region::Model> for StateRegion {
    fn from(m: state_region::Model) -> Self {
        Self {
            code: m.code,
            country_code2: m.country_code2,
            parent_code: m.parent_code,
            name: m.name,
            subdivision_type: m.subdivision_type,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        }
    }
}

impl TryFrom<currency::Model> for Currency {
    type Error = DomainError;

    fn try_from(m: currency::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse(&m.status)?,
            minor_units: m
                .minor_units
                .map(|v| small("minor_units", v))
                .transpose()?,
            code: m.code,
            name: m.name,
            symbol: m.symbol,
            numeric3: m.numeric3,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

impl TryFrom<language::Model> for Language {
    type Error = DomainError;

    fn try_from(m: language::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: parse(&m.direction)?,
            status: parse(&m.status)?,
            code: m.code,
            name: m.name,
            native_name: m.native_name,
            code3: m.code3,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

impl TryFrom<locale::Model> for Locale {
    type Error = DomainError;

    fn try_from(m: locale::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            direction: m.direction.as_deref().map(parse).transpose()?,
            status: parse(&m.status)?,
            code: m.code,
            language_code: m.language_code,
            country_code2: m.country_code2,
            script: m.script,
            name: m.name,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

impl From<timezone::Model> for Timezone {
    fn from(m: timezone::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            utc_offset: m.utc_offset,
            is_alias: m.is_alias,
            canonical_id: m.canonical_id,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        }
    }
}

impl TryFrom<uom::Model> for Uom {
    type Error = DomainError;

    fn try_from(m: uom::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            quantity_type: parse(&m.quantity_type)?,
            code: m.code,
            name: m.name,
            symbol: m.symbol,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

impl TryFrom<label::Model> for Label {
    type Error = DomainError;

    fn try_from(m: label::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            entity: parse::<EntityKind>(&m.entity_type)?,
            code: m.code,
            locale_code: m.locale_code,
            name: m.name,
            description: m.description,
            audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
        })
    }
}

#[must_use]
pub fn from_commodity_domain(m: commodity_domain::Model) -> ClassificationDomain {
    ClassificationDomain {
        kind: ClassificationKind::Commodity,
        code: m.code,
        name: m.name,
        description: m.description,
        audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
    }
}

#[must_use]
pub fn from_industry_domain(m: industry_domain::Model) -> ClassificationDomain {
    ClassificationDomain {
        kind: ClassificationKind::Industry,
        code: m.code,
        name: m.name,
        description: m.description,
        audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
    }
}

/// # Errors
///
/// `Database` when the stored level does not fit a tree depth.
pub fn from_commodity_code(m: commodity_code::Model) -> Result<ClassificationCode, DomainError> {
    Ok(ClassificationCode {
        kind: ClassificationKind::Commodity,
        level: small("level", m.level)?,
        domain: m.domain,
        code: m.code,
        name: m.name,
        description: m.description,
        parent_code: m.parent_code,
        audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
    })
}

/// # Errors
///
/// `Database` when the stored level does not fit a tree depth.
pub fn from_industry_code(m: industry_code::Model) -> Result<ClassificationCode, DomainError> {
    Ok(ClassificationCode {
        kind: ClassificationKind::Industry,
        level: small("level", m.level)?,
        domain: m.domain,
        code: m.code,
        name: m.name,
        description: m.description,
        parent_code: m.parent_code,
        audit: audit(m.created_at, m.created_by, m.updated_at, m.updated_by),
    })
}

// Rows for seeding. `updated_*` stay NULL until an administrative change.

#[must_use]
pub fn country_row(c: &NewCountry, actor: &str, now: OffsetDateTime) -> country::ActiveModel {
    country::ActiveModel {
        code2: Set(c.code2.clone()),
        code3: Set(c.code3.clone()),
        numeric3: Set(c.numeric3.clone()),
        name: Set(c.name.clone()),
        official_name: Set(c.official_name.clone()),
        region: Set(c.region.clone()),
        subregion: Set(c.subregion.clone()),
        status: Set(c.status.as_str().to_owned()),
        metadata: Set(c.metadata.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn state_region_row(
    s: &NewStateRegion,
    actor: &str,
    now: OffsetDateTime,
) -> state_region::ActiveModel {
    state_region::ActiveModel {
        code: Set(s.code.clone()),
        country_code2: Set(s.country_code2.clone()),
        parent_code: Set(s.parent_code.clone()),
        name: Set(s.name.clone()),
        subdivision_type: Set(s.subdivision_type.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn currency_row(c: &NewCurrency, actor: &str, now: OffsetDateTime) -> currency::ActiveModel {
    currency::ActiveModel {
        code: Set(c.code.clone()),
        name: Set(c.name.clone()),
        symbol: Set(c.symbol.clone()),
        minor_units: Set(c.minor_units.map(i32::from)),
        numeric3: Set(c.numeric3.clone()),
        status: Set(c.status.as_str().to_owned()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn language_row(l: &NewLanguage, actor: &str, now: OffsetDateTime) -> language::ActiveModel {
    language::ActiveModel {
        code: Set(l.code.clone()),
        name: Set(l.name.clone()),
        native_name: Set(l.native_name.clone()),
        code3: Set(l.code3.clone()),
        direction: Set(l.direction.as_str().to_owned()),
        status: Set(l.status.as_str().to_owned()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn locale_row(l: &NewLocale, actor: &str, now: OffsetDateTime) -> locale::ActiveModel {
    locale::ActiveModel {
        code: Set(l.code.clone()),
        language_code: Set(l.language_code.clone()),
        country_code2: Set(l.country_code2.clone()),
        script: Set(l.script.clone()),
        name: Set(l.name.clone()),
        direction: Set(l.direction.map(|d| d.as_str().to_owned())),
        status: Set(l.status.as_str().to_owned()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn timezone_row(t: &NewTimezone, actor: &str, now: OffsetDateTime) -> timezone::ActiveModel {
    timezone::ActiveModel {
        id: Set(t.id.clone()),
        name: Set(t.name.clone()),
        utc_offset: Set(t.utc_offset.clone()),
        is_alias: Set(t.is_alias),
        canonical_id: Set(t.canonical_id.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn uom_row(u: &NewUom, actor: &str, now: OffsetDateTime) -> uom::ActiveModel {
    uom::ActiveModel {
        code: Set(u.code.clone()),
        name: Set(u.name.clone()),
        symbol: Set(u.symbol.clone()),
        quantity_type: Set(u.quantity_type.as_str().to_owned()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn commodity_domain_row(
    d: &NewClassificationDomain,
    actor: &str,
    now: OffsetDateTime,
) -> commodity_domain::ActiveModel {
    commodity_domain::ActiveModel {
        code: Set(d.code.clone()),
        name: Set(d.name.clone()),
        description: Set(d.description.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn industry_domain_row(
    d: &NewClassificationDomain,
    actor: &str,
    now: OffsetDateTime,
) -> industry_domain::ActiveModel {
    industry_domain::ActiveModel {
        code: Set(d.code.clone()),
        name: Set(d.name.clone()),
        description: Set(d.description.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn commodity_code_row(
    c: &NewClassificationCode,
    actor: &str,
    now: OffsetDateTime,
) -> commodity_code::ActiveModel {
    commodity_code::ActiveModel {
        domain: Set(c.domain.clone()),
        code: Set(c.code.clone()),
        name: Set(c.name.clone()),
        description: Set(c.description.clone()),
        parent_code: Set(c.parent_code.clone()),
        level: Set(i32::from(c.level)),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn industry_code_row(
    c: &NewClassificationCode,
    actor: &str,
    now: OffsetDateTime,
) -> industry_code::ActiveModel {
    industry_code::ActiveModel {
        domain: Set(c.domain.clone()),
        code: Set(c.code.clone()),
        name: Set(c.name.clone()),
        description: Set(c.description.clone()),
        parent_code: Set(c.parent_code.clone()),
        level: Set(i32::from(c.level)),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}

#[must_use]
pub fn label_row(l: &NewLabel, actor: &str, now: OffsetDateTime) -> label::ActiveModel {
    label::ActiveModel {
        entity_type: Set(l.entity.as_str().to_owned()),
        code: Set(l.code.clone()),
        locale_code: Set(l.locale_code.clone()),
        name: Set(l.name.clone()),
        description: Set(l.description.clone()),
        created_at: Set(now),
        created_by: Set(actor.to_owned()),
        updated_at: NotSet,
        updated_by: NotSet,
    }
}
