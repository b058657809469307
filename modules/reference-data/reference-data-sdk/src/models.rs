//! Public models for the `reference-data` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the reference-data store and its consumers. Every entity is keyed
//! by the code of the external standard it comes from (ISO 3166, ISO 4217,
//! ISO 639, BCP 47, IANA tzdb, UN/ECE Rec 20, ISIC, NAICS, HS, CPC).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Error returned when a closed enumeration is parsed from an unknown string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Lifecycle flag of a reference row. Rows are deprecated, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Deprecated,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "deprecated" => Ok(Self::Deprecated),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

/// Writing direction of a language or locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            other => Err(ParseEnumError::new("direction", other)),
        }
    }
}

/// Physical quantity a unit of measure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityType {
    Mass,
    Length,
    Volume,
    Area,
    Time,
    Temperature,
    Count,
    Force,
    Pressure,
    Energy,
    Data,
    Speed,
    Density,
    Frequency,
    Electric,
    Angle,
    Currency,
}

impl QuantityType {
    pub const ALL: [Self; 17] = [
        Self::Mass,
        Self::Length,
        Self::Volume,
        Self::Area,
        Self::Time,
        Self::Temperature,
        Self::Count,
        Self::Force,
        Self::Pressure,
        Self::Energy,
        Self::Data,
        Self::Speed,
        Self::Density,
        Self::Frequency,
        Self::Electric,
        Self::Angle,
        Self::Currency,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Length => "length",
            Self::Volume => "volume",
            Self::Area => "area",
            Self::Time => "time",
            Self::Temperature => "temperature",
            Self::Count => "count",
            Self::Force => "force",
            Self::Pressure => "pressure",
            Self::Energy => "energy",
            Self::Data => "data",
            Self::Speed => "speed",
            Self::Density => "density",
            Self::Frequency => "frequency",
            Self::Electric => "electric",
            Self::Angle => "angle",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("quantity type", s))
    }
}

/// Which classification forest a domain or code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationKind {
    Commodity,
    Industry,
}

impl ClassificationKind {
    pub const ALL: [Self; 2] = [Self::Commodity, Self::Industry];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commodity => "commodity",
            Self::Industry => "industry",
        }
    }

    /// Label tag used for domains of this kind.
    #[must_use]
    pub const fn domain_entity(self) -> EntityKind {
        match self {
            Self::Commodity => EntityKind::CommodityDomain,
            Self::Industry => EntityKind::IndustryDomain,
        }
    }

    /// Label tag used for codes of this kind.
    #[must_use]
    pub const fn code_entity(self) -> EntityKind {
        match self {
            Self::Commodity => EntityKind::CommodityCode,
            Self::Industry => EntityKind::IndustryCode,
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commodity" => Ok(Self::Commodity),
            "industry" => Ok(Self::Industry),
            other => Err(ParseEnumError::new("classification kind", other)),
        }
    }
}

/// Entity-type discriminator used by label rows. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Country,
    StateRegion,
    Currency,
    Language,
    Locale,
    Timezone,
    Uom,
    CommodityDomain,
    CommodityCode,
    IndustryDomain,
    IndustryCode,
}

impl EntityKind {
    pub const ALL: [Self; 11] = [
        Self::Country,
        Self::StateRegion,
        Self::Currency,
        Self::Language,
        Self::Locale,
        Self::Timezone,
        Self::Uom,
        Self::CommodityDomain,
        Self::CommodityCode,
        Self::IndustryDomain,
        Self::IndustryCode,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::StateRegion => "state_region",
            Self::Currency => "currency",
            Self::Language => "language",
            Self::Locale => "locale",
            Self::Timezone => "timezone",
            Self::Uom => "uom",
            Self::CommodityDomain => "commodity_domain",
            Self::CommodityCode => "commodity_code",
            Self::IndustryDomain => "industry_domain",
            Self::IndustryCode => "industry_code",
        }
    }

    /// Whether rows of this entity carry a `status` flag.
    #[must_use]
    pub const fn has_status(self) -> bool {
        matches!(
            self,
            Self::Country | Self::Currency | Self::Language | Self::Locale
        )
    }

    /// Classification forest of a composite-keyed code entity.
    ///
    /// Label codes for these entities are written as `domain:code`.
    #[must_use]
    pub const fn classification_code(self) -> Option<ClassificationKind> {
        match self {
            Self::CommodityCode => Some(ClassificationKind::Commodity),
            Self::IndustryCode => Some(ClassificationKind::Industry),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("entity", s))
    }
}

/// Builds the label code of a composite-keyed entity (`domain:code`).
#[must_use]
pub fn classification_label_code(domain: &str, code: &str) -> String {
    format!("{domain}:{code}")
}

/// Splits a `domain:code` label code. Returns `None` when there is no separator
/// or either half is empty.
#[must_use]
pub fn split_classification_label_code(value: &str) -> Option<(&str, &str)> {
    let (domain, code) = value.split_once(':')?;
    if domain.is_empty() || code.is_empty() {
        return None;
    }
    Some((domain, code))
}

/// Administrative metadata carried by every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audit {
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub updated_by: Option<String>,
}

/// ISO 3166-1 country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub code2: String,
    pub code3: String,
    pub numeric3: String,
    pub name: String,
    pub official_name: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub status: Status,
    pub metadata: Option<serde_json::Value>,
    pub audit: Audit,
}

/// Data for seeding a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCountry {
    pub code2: String,
    pub code3: String,
    pub numeric3: String,
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// ISO 3166-2 subdivision. Subdivisions form a tree per country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRegion {
    pub code: String,
    pub country_code2: String,
    pub parent_code: Option<String>,
    pub name: String,
    pub subdivision_type: Option<String>,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewStateRegion {
    pub code: String,
    pub country_code2: String,
    #[serde(default)]
    pub parent_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub subdivision_type: Option<String>,
}

/// ISO 4217 currency or non-subdivided instrument (gold, silver, SDR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
    pub minor_units: Option<u8>,
    pub numeric3: String,
    pub status: Status,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub minor_units: Option<u8>,
    pub numeric3: String,
    #[serde(default)]
    pub status: Status,
}

/// ISO 639 language keyed by its preferred two-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub code3: Option<String>,
    pub direction: TextDirection,
    pub status: Status,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLanguage {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default)]
    pub code3: Option<String>,
    #[serde(default)]
    pub direction: TextDirection,
    #[serde(default)]
    pub status: Status,
}

/// BCP 47 locale, `language` or `language-COUNTRY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub code: String,
    pub language_code: String,
    pub country_code2: Option<String>,
    pub script: Option<String>,
    pub name: String,
    pub direction: Option<TextDirection>,
    pub status: Status,
    pub audit: Audit,
}

impl Locale {
    /// The direction override if present, else the language's direction.
    #[must_use]
    pub fn effective_direction(&self, language_direction: TextDirection) -> TextDirection {
        self.direction.unwrap_or(language_direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLocale {
    pub code: String,
    pub language_code: String,
    #[serde(default)]
    pub country_code2: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    pub name: String,
    #[serde(default)]
    pub direction: Option<TextDirection>,
    #[serde(default)]
    pub status: Status,
}

/// IANA time zone. Aliases (tzdb links) point at their canonical zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timezone {
    pub id: String,
    pub name: String,
    pub utc_offset: String,
    pub is_alias: bool,
    pub canonical_id: Option<String>,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTimezone {
    pub id: String,
    pub name: String,
    pub utc_offset: String,
    #[serde(default)]
    pub is_alias: bool,
    #[serde(default)]
    pub canonical_id: Option<String>,
}

/// UN/ECE Recommendation 20 unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uom {
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
    pub quantity_type: QuantityType,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUom {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    pub quantity_type: QuantityType,
}

/// A classification scheme (e.g. `isic`, `naics`, `hs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationDomain {
    pub kind: ClassificationKind,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewClassificationDomain {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A node of a classification forest, keyed by `(domain, code)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationCode {
    pub kind: ClassificationKind,
    pub domain: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_code: Option<String>,
    pub level: u8,
    pub audit: Audit,
}

impl ClassificationCode {
    /// Code used for this node in label rows.
    #[must_use]
    pub fn label_code(&self) -> String {
        classification_label_code(&self.domain, &self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewClassificationCode {
    pub domain: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_code: Option<String>,
    pub level: u8,
}

/// Translation overlay for a non-canonical locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub entity: EntityKind,
    pub code: String,
    pub locale_code: String,
    pub name: String,
    pub description: Option<String>,
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLabel {
    pub entity: EntityKind,
    pub code: String,
    pub locale_code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_tags_are_closed_and_stable() {
        let tags: Vec<&str> = EntityKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            tags,
            vec![
                "country",
                "state_region",
                "currency",
                "language",
                "locale",
                "timezone",
                "uom",
                "commodity_domain",
                "commodity_code",
                "industry_domain",
                "industry_code",
            ]
        );
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("countries".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_entity_kind_serde_matches_tag() {
        let json = serde_json::to_string(&EntityKind::StateRegion).unwrap();
        assert_eq!(json, "\"state_region\"");
        let kind: EntityKind = serde_json::from_str("\"industry_code\"").unwrap();
        assert_eq!(kind, EntityKind::IndustryCode);
    }

    #[test]
    fn test_quantity_type_has_seventeen_members() {
        assert_eq!(QuantityType::ALL.len(), 17);
        assert_eq!("data".parse::<QuantityType>().unwrap(), QuantityType::Data);
        let err = "luminosity".parse::<QuantityType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown quantity type value 'luminosity'");
    }

    #[test]
    fn test_status_and_direction_parse() {
        assert_eq!("deprecated".parse::<Status>().unwrap(), Status::Deprecated);
        assert!("retired".parse::<Status>().is_err());
        assert_eq!("rtl".parse::<TextDirection>().unwrap(), TextDirection::Rtl);
        assert!("ttb".parse::<TextDirection>().is_err());
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn test_locale_direction_falls_back_to_language() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let mut locale = Locale {
            code: "ar-SA".to_owned(),
            language_code: "ar".to_owned(),
            country_code2: Some("SA".to_owned()),
            script: None,
            name: "Arabic (Saudi Arabia)".to_owned(),
            direction: None,
            status: Status::Active,
            audit: Audit {
                created_at: now,
                created_by: "seed".to_owned(),
                updated_at: None,
                updated_by: None,
            },
        };
        assert_eq!(locale.effective_direction(TextDirection::Rtl), TextDirection::Rtl);

        locale.direction = Some(TextDirection::Ltr);
        assert_eq!(locale.effective_direction(TextDirection::Rtl), TextDirection::Ltr);
    }

    #[test]
    fn test_classification_label_code_round_trip() {
        assert_eq!(classification_label_code("isic", "A"), "isic:A");
        assert_eq!(split_classification_label_code("naics:31-33"), Some(("naics", "31-33")));
        assert_eq!(split_classification_label_code("naics"), None);
        assert_eq!(split_classification_label_code(":01"), None);
        assert_eq!(split_classification_label_code("hs:"), None);
    }

    #[test]
    fn test_new_country_defaults_from_json() {
        let country: NewCountry = serde_json::from_value(serde_json::json!({
            "code2": "SA",
            "code3": "SAU",
            "numeric3": "682",
            "name": "Saudi Arabia"
        }))
        .unwrap();
        assert_eq!(country.status, Status::Active);
        assert!(country.metadata.is_none());

        let unknown = serde_json::from_value::<NewCountry>(serde_json::json!({
            "code2": "SA",
            "code3": "SAU",
            "numeric3": "682",
            "name": "Saudi Arabia",
            "flag": "green"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn test_entity_kind_capabilities() {
        assert!(EntityKind::Country.has_status());
        assert!(!EntityKind::Timezone.has_status());
        assert_eq!(
            EntityKind::IndustryCode.classification_code(),
            Some(ClassificationKind::Industry)
        );
        assert_eq!(EntityKind::IndustryDomain.classification_code(), None);
        assert_eq!(
            ClassificationKind::Commodity.code_entity(),
            EntityKind::CommodityCode
        );
    }
}
