//! Seed-time validation of invariants the schema cannot express.
//!
//! Foreign keys and CHECK constraints still guard every write; these rules
//! cover what they cannot see (case conventions, cycles, level arithmetic,
//! tag shape) and report every finding at once instead of failing on the
//! first statement.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use reference_data_sdk::{
    ClassificationKind, EntityKind, NewClassificationCode, NewClassificationDomain, NewLabel,
    SeedBundle, split_classification_label_code,
};

use super::error::{DomainError, ValidationIssue};
use super::hierarchy::{self, HierarchyError};

/// Checks `bundle` and returns every issue found.
///
/// # Errors
///
/// Returns `DomainError::InvalidSeed` listing all findings when any rule fails.
pub fn validate_bundle(bundle: &SeedBundle, canonical_locale: &str) -> Result<(), DomainError> {
    let mut issues = Issues::default();

    check_countries(bundle, &mut issues);
    check_state_regions(bundle, &mut issues);
    check_currencies(bundle, &mut issues);
    check_languages(bundle, &mut issues);
    check_locales(bundle, &mut issues);
    check_timezones(bundle, &mut issues);
    check_uoms(bundle, &mut issues);
    check_classification(
        ClassificationKind::Commodity,
        &bundle.commodity_domains,
        &bundle.commodity_codes,
        &mut issues,
    );
    check_classification(
        ClassificationKind::Industry,
        &bundle.industry_domains,
        &bundle.industry_codes,
        &mut issues,
    );
    check_labels(bundle, canonical_locale, &mut issues);

    issues.into_result()
}

#[derive(Default)]
struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn push(&mut self, table: &'static str, key: &str, message: impl Into<String>) {
        self.0.push(ValidationIssue::new(table, key, message));
    }

    fn require_name(&mut self, table: &'static str, key: &str, name: &str) {
        if name.trim().is_empty() {
            self.push(table, key, "name must not be blank");
        }
    }

    /// Flags every key seen more than once.
    fn unique<K, I>(&mut self, table: &'static str, what: &str, keys: I)
    where
        K: Eq + Hash + std::fmt::Display,
        I: IntoIterator<Item = K>,
    {
        let mut seen = HashSet::new();
        for key in keys {
            let label = key.to_string();
            if !seen.insert(key) {
                self.push(table, &label, format!("duplicate {what} in bundle"));
            }
        }
    }

    fn into_result(self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidSeed(self.0))
        }
    }
}

fn is_upper(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_lower(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn hierarchy_issue<K: std::fmt::Display>(
    table: &'static str,
    err: &HierarchyError<K>,
    issues: &mut Issues,
) {
    match err {
        HierarchyError::SelfLoop(key) => {
            issues.push(table, &key.to_string(), "row names itself as parent");
        }
        HierarchyError::Cycle(key) => {
            issues.push(table, &key.to_string(), "parent links form a cycle");
        }
    }
}

fn check_countries(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "country";
    for c in &bundle.countries {
        if !is_upper(&c.code2, 2) {
            issues.push(T, &c.code2, "code2 must be two uppercase ASCII letters");
        }
        if !is_upper(&c.code3, 3) {
            issues.push(T, &c.code2, "code3 must be three uppercase ASCII letters");
        }
        if !is_digits(&c.numeric3, 3) {
            issues.push(T, &c.code2, "numeric3 must be three digits");
        }
        issues.require_name(T, &c.code2, &c.name);
    }
    issues.unique(T, "code2", bundle.countries.iter().map(|c| c.code2.as_str()));
    issues.unique(T, "code3", bundle.countries.iter().map(|c| c.code3.as_str()));
    issues.unique(T, "numeric3", bundle.countries.iter().map(|c| c.numeric3.as_str()));
}

fn check_state_regions(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "state_region";
    let country_of: HashMap<&str, &str> = bundle
        .state_regions
        .iter()
        .map(|s| (s.code.as_str(), s.country_code2.as_str()))
        .collect();

    for s in &bundle.state_regions {
        let prefix = format!("{}-", s.country_code2);
        if !s.code.starts_with(&prefix) || s.code.len() == prefix.len() {
            issues.push(T, &s.code, format!("code must start with '{prefix}'"));
        }
        if let Some(parent) = s.parent_code.as_deref() {
            let same_country = match country_of.get(parent) {
                Some(&cc) => cc == s.country_code2,
                None => parent.starts_with(&prefix),
            };
            if !same_country {
                issues.push(
                    T,
                    &s.code,
                    format!("parent '{parent}' belongs to another country"),
                );
            }
        }
        issues.require_name(T, &s.code, &s.name);
    }
    issues.unique(T, "code", bundle.state_regions.iter().map(|s| s.code.as_str()));

    let nodes: Vec<(&str, Option<&str>)> = bundle
        .state_regions
        .iter()
        .map(|s| (s.code.as_str(), s.parent_code.as_deref()))
        .collect();
    if let Err(err) = hierarchy::depths(&nodes) {
        hierarchy_issue(T, &err, issues);
    }
}

fn check_currencies(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "currency";
    for c in &bundle.currencies {
        if !is_upper(&c.code, 3) {
            issues.push(T, &c.code, "code must be three uppercase ASCII letters");
        }
        if !is_digits(&c.numeric3, 3) {
            issues.push(T, &c.code, "numeric3 must be three digits");
        }
        if c.symbol.as_deref().is_some_and(str::is_empty) {
            issues.push(T, &c.code, "symbol must be absent rather than empty");
        }
        issues.require_name(T, &c.code, &c.name);
    }
    issues.unique(T, "code", bundle.currencies.iter().map(|c| c.code.as_str()));
    issues.unique(
        T,
        "active numeric3",
        bundle
            .currencies
            .iter()
            .filter(|c| c.status.is_active())
            .map(|c| c.numeric3.as_str()),
    );
}

fn check_languages(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "language";
    for l in &bundle.languages {
        if !is_lower(&l.code, 2) {
            issues.push(T, &l.code, "code must be two lowercase ASCII letters");
        }
        if let Some(code3) = l.code3.as_deref()
            && !is_lower(code3, 3)
        {
            issues.push(T, &l.code, "code3 must be three lowercase ASCII letters");
        }
        issues.require_name(T, &l.code, &l.name);
    }
    issues.unique(T, "code", bundle.languages.iter().map(|l| l.code.as_str()));
}

fn check_locales(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "locale";
    for l in &bundle.locales {
        let expected = match l.country_code2.as_deref() {
            Some(cc) => format!("{}-{cc}", l.language_code),
            None => l.language_code.clone(),
        };
        if l.code != expected {
            issues.push(T, &l.code, format!("tag must be '{expected}'"));
        }
        issues.require_name(T, &l.code, &l.name);
    }
    issues.unique(T, "code", bundle.locales.iter().map(|l| l.code.as_str()));
}

fn check_timezones(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "timezone";
    for tz in &bundle.timezones {
        match (tz.is_alias, tz.canonical_id.as_deref()) {
            (true, None) => issues.push(T, &tz.id, "alias must name its canonical zone"),
            (false, Some(_)) => {
                issues.push(T, &tz.id, "canonical zone must not name another zone");
            }
            _ => {}
        }
        issues.require_name(T, &tz.id, &tz.name);
    }
    issues.unique(T, "id", bundle.timezones.iter().map(|tz| tz.id.as_str()));

    let nodes: Vec<(&str, Option<&str>)> = bundle
        .timezones
        .iter()
        .map(|tz| (tz.id.as_str(), tz.canonical_id.as_deref()))
        .collect();
    if let Err(err) = hierarchy::depths(&nodes) {
        hierarchy_issue(T, &err, issues);
    }
}

fn check_uoms(bundle: &SeedBundle, issues: &mut Issues) {
    const T: &str = "uom";
    for u in &bundle.uoms {
        let well_formed = (2..=3).contains(&u.code.len())
            && u
                .code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !well_formed {
            issues.push(T, &u.code, "code must be 2-3 uppercase letters or digits");
        }
        issues.require_name(T, &u.code, &u.name);
    }
    issues.unique(T, "code", bundle.uoms.iter().map(|u| u.code.as_str()));
}

fn check_classification(
    kind: ClassificationKind,
    domains: &[NewClassificationDomain],
    codes: &[NewClassificationCode],
    issues: &mut Issues,
) {
    let domain_table = kind.domain_entity().as_str();
    let code_table = kind.code_entity().as_str();

    for d in domains {
        let well_formed = !d.code.is_empty()
            && d
                .code
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
        if !well_formed {
            issues.push(domain_table, &d.code, "code must be lowercase ASCII");
        }
        issues.require_name(domain_table, &d.code, &d.name);
    }
    issues.unique(domain_table, "code", domains.iter().map(|d| d.code.as_str()));

    let key = |c: &NewClassificationCode| format!("{}:{}", c.domain, c.code);
    let level_of: HashMap<(&str, &str), u8> = codes
        .iter()
        .map(|c| ((c.domain.as_str(), c.code.as_str()), c.level))
        .collect();

    for c in codes {
        if c.level == 0 {
            issues.push(code_table, &key(c), "level must be at least 1");
        }
        match c.parent_code.as_deref() {
            None if c.level != 1 => {
                issues.push(code_table, &key(c), "root codes have level 1");
            }
            Some(parent) => {
                if let Some(&parent_level) = level_of.get(&(c.domain.as_str(), parent))
                    && u16::from(c.level) != u16::from(parent_level) + 1
                {
                    issues.push(
                        code_table,
                        &key(c),
                        format!("level must be {} (parent level + 1)", u16::from(parent_level) + 1),
                    );
                }
            }
            None => {}
        }
        issues.require_name(code_table, &key(c), &c.name);
    }
    issues.unique(code_table, "key", codes.iter().map(key));

    let nodes: Vec<((&str, &str), Option<(&str, &str)>)> = codes
        .iter()
        .map(|c| {
            (
                (c.domain.as_str(), c.code.as_str()),
                c.parent_code.as_deref().map(|p| (c.domain.as_str(), p)),
            )
        })
        .collect();
    match hierarchy::depths(&nodes) {
        Ok(_) => {}
        Err(HierarchyError::SelfLoop((d, c))) => {
            issues.push(code_table, &format!("{d}:{c}"), "row names itself as parent");
        }
        Err(HierarchyError::Cycle((d, c))) => {
            issues.push(code_table, &format!("{d}:{c}"), "parent links form a cycle");
        }
    }
}

fn check_labels(bundle: &SeedBundle, canonical_locale: &str, issues: &mut Issues) {
    const T: &str = "label";
    for l in &bundle.labels {
        let key = format!("{}/{}/{}", l.entity, l.code, l.locale_code);
        if l.locale_code == canonical_locale {
            issues.push(
                T,
                &key,
                format!("'{canonical_locale}' is the canonical locale; its names live on the entity row"),
            );
        }
        if l.entity.classification_code().is_some()
            && split_classification_label_code(&l.code).is_none()
        {
            issues.push(T, &key, "code must be written as 'domain:code'");
        }
        issues.require_name(T, &key, &l.name);
    }
    issues.unique(
        T,
        "key",
        bundle
            .labels
            .iter()
            .map(|l| format!("{}/{}/{}", l.entity, l.code, l.locale_code)),
    );
}

/// Labels whose target row is not part of `bundle` itself.
///
/// These must already be stored; the caller checks them against the store
/// because a label has no foreign key to its polymorphic target.
#[must_use]
pub fn labels_targeting_outside(bundle: &SeedBundle) -> Vec<&NewLabel> {
    let in_bundle = |entity: EntityKind, code: &str| -> bool {
        match entity {
            EntityKind::Country => bundle.countries.iter().any(|r| r.code2 == code),
            EntityKind::StateRegion => bundle.state_regions.iter().any(|r| r.code == code),
            EntityKind::Currency => bundle.currencies.iter().any(|r| r.code == code),
            EntityKind::Language => bundle.languages.iter().any(|r| r.code == code),
            EntityKind::Locale => bundle.locales.iter().any(|r| r.code == code),
            EntityKind::Timezone => bundle.timezones.iter().any(|r| r.id == code),
            EntityKind::Uom => bundle.uoms.iter().any(|r| r.code == code),
            EntityKind::CommodityDomain => bundle.commodity_domains.iter().any(|r| r.code == code),
            EntityKind::IndustryDomain => bundle.industry_domains.iter().any(|r| r.code == code),
            EntityKind::CommodityCode => has_code(&bundle.commodity_codes, code),
            EntityKind::IndustryCode => has_code(&bundle.industry_codes, code),
        }
    };
    bundle
        .labels
        .iter()
        .filter(|l| !in_bundle(l.entity, &l.code))
        .collect()
}

fn has_code(codes: &[NewClassificationCode], label_code: &str) -> bool {
    split_classification_label_code(label_code)
        .is_some_and(|(domain, code)| codes.iter().any(|c| c.domain == domain && c.code == code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reference_data_sdk::{
        EntityKind, NewCountry, NewCurrency, NewLabel, NewLocale, NewStateRegion, NewTimezone,
        Status,
    };

    fn country(code2: &str, code3: &str, numeric3: &str) -> NewCountry {
        NewCountry {
            code2: code2.to_owned(),
            code3: code3.to_owned(),
            numeric3: numeric3.to_owned(),
            name: format!("Country {code2}"),
            official_name: None,
            region: None,
            subregion: None,
            status: Status::Active,
            metadata: None,
        }
    }

    fn region(code: &str, cc: &str, parent: Option<&str>) -> NewStateRegion {
        NewStateRegion {
            code: code.to_owned(),
            country_code2: cc.to_owned(),
            parent_code: parent.map(ToOwned::to_owned),
            name: code.to_owned(),
            subdivision_type: None,
        }
    }

    fn code(domain: &str, code: &str, parent: Option<&str>, level: u8) -> NewClassificationCode {
        NewClassificationCode {
            domain: domain.to_owned(),
            code: code.to_owned(),
            name: format!("{domain} {code}"),
            description: None,
            parent_code: parent.map(ToOwned::to_owned),
            level,
        }
    }

    fn issues_of(bundle: &SeedBundle) -> Vec<ValidationIssue> {
        match validate_bundle(bundle, "en") {
            Ok(()) => Vec::new(),
            Err(e) => e.validation_issues().map(<[_]>::to_vec).unwrap_or_default(),
        }
    }

    #[test]
    fn test_empty_bundle_is_valid() {
        assert!(validate_bundle(&SeedBundle::default(), "en").is_ok());
    }

    #[test]
    fn test_country_case_and_duplicates() {
        let bundle = SeedBundle {
            countries: vec![country("sa", "SAU", "682"), country("AE", "ARE", "682")],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.key == "sa" && i.message.contains("code2")));
        assert!(issues.iter().any(|i| i.message == "duplicate numeric3 in bundle"));
    }

    #[test]
    fn test_state_region_rules() {
        let bundle = SeedBundle {
            state_regions: vec![
                region("SA-01", "SA", Some("SA-01")),
                region("AE-DU", "AE", Some("SA-02")),
                region("01", "SA", None),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.key == "SA-01" && i.message.contains("itself")));
        assert!(issues.iter().any(|i| i.key == "AE-DU" && i.message.contains("another country")));
        assert!(issues.iter().any(|i| i.key == "01" && i.message.contains("'SA-'")));
    }

    #[test]
    fn test_state_region_cycle() {
        let bundle = SeedBundle {
            state_regions: vec![
                region("GB-ENG", "GB", Some("GB-LND")),
                region("GB-LND", "GB", Some("GB-ENG")),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.message == "parent links form a cycle"));
    }

    #[test]
    fn test_active_currency_numeric_may_repeat_once_deprecated() {
        let currency = |code: &str, status| NewCurrency {
            code: code.to_owned(),
            name: code.to_owned(),
            symbol: None,
            minor_units: Some(2),
            numeric3: "532".to_owned(),
            status,
        };
        let ok = SeedBundle {
            currencies: vec![currency("ANG", Status::Deprecated), currency("XCG", Status::Active)],
            ..SeedBundle::default()
        };
        assert!(issues_of(&ok).is_empty());

        let clash = SeedBundle {
            currencies: vec![currency("ANG", Status::Active), currency("XCG", Status::Active)],
            ..SeedBundle::default()
        };
        assert!(
            issues_of(&clash)
                .iter()
                .any(|i| i.message == "duplicate active numeric3 in bundle")
        );
    }

    #[test]
    fn test_locale_tag_must_match_references() {
        let locale = |code: &str, lang: &str, cc: Option<&str>| NewLocale {
            code: code.to_owned(),
            language_code: lang.to_owned(),
            country_code2: cc.map(ToOwned::to_owned),
            script: None,
            name: code.to_owned(),
            direction: None,
            status: Status::Active,
        };
        let bundle = SeedBundle {
            locales: vec![
                locale("ar-SA", "ar", Some("SA")),
                locale("ar", "ar", None),
                locale("ar_SA", "ar", Some("SA")),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "ar_SA");
    }

    #[test]
    fn test_timezone_alias_rules() {
        let tz = |id: &str, alias: bool, canonical: Option<&str>| NewTimezone {
            id: id.to_owned(),
            name: id.to_owned(),
            utc_offset: "+00:00".to_owned(),
            is_alias: alias,
            canonical_id: canonical.map(ToOwned::to_owned),
        };
        let bundle = SeedBundle {
            timezones: vec![
                tz("Etc/UTC", false, None),
                tz("UTC", true, Some("Etc/UTC")),
                tz("Zulu", true, None),
                tz("A", true, Some("B")),
                tz("B", true, Some("A")),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.key == "Zulu"));
        assert!(issues.iter().any(|i| i.message == "parent links form a cycle"));
        assert!(!issues.iter().any(|i| i.key == "UTC"));
    }

    #[test]
    fn test_classification_levels() {
        let bundle = SeedBundle {
            industry_domains: vec![NewClassificationDomain {
                code: "isic".to_owned(),
                name: "ISIC Rev.4".to_owned(),
                description: None,
            }],
            industry_codes: vec![
                code("isic", "A", None, 1),
                code("isic", "01", Some("A"), 2),
                code("isic", "011", Some("01"), 4),
                code("isic", "B", None, 2),
                code("isic", "0111", Some("011"), 0),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.key == "isic:011" && i.message.contains("must be 3")));
        assert!(issues.iter().any(|i| i.key == "isic:B" && i.message.contains("level 1")));
        assert!(issues.iter().any(|i| i.key == "isic:0111" && i.message.contains("at least 1")));
        assert!(!issues.iter().any(|i| i.key == "isic:01"));
    }

    #[test]
    fn test_same_code_in_two_domains_is_not_a_duplicate() {
        let bundle = SeedBundle {
            industry_codes: vec![code("isic", "11", None, 1), code("naics", "11", None, 1)],
            ..SeedBundle::default()
        };
        assert!(issues_of(&bundle).is_empty());
    }

    #[test]
    fn test_label_rules() {
        let label = |entity, code: &str, locale: &str| NewLabel {
            entity,
            code: code.to_owned(),
            locale_code: locale.to_owned(),
            name: "x".to_owned(),
            description: None,
        };
        let bundle = SeedBundle {
            labels: vec![
                label(EntityKind::Country, "SA", "en"),
                label(EntityKind::IndustryCode, "A", "fr"),
                label(EntityKind::IndustryCode, "isic:A", "fr"),
                label(EntityKind::Country, "SA", "ar"),
                label(EntityKind::Country, "SA", "ar"),
            ],
            ..SeedBundle::default()
        };
        let issues = issues_of(&bundle);
        assert!(issues.iter().any(|i| i.key == "country/SA/en"));
        assert!(issues.iter().any(|i| i.key == "industry_code/A/fr"));
        assert!(!issues.iter().any(|i| i.key == "industry_code/isic:A/fr"));
        assert!(issues.iter().any(|i| i.key == "country/SA/ar" && i.message.contains("duplicate")));
    }

    #[test]
    fn test_all_issues_reported_together() {
        let bundle = SeedBundle {
            countries: vec![country("s", "SAU", "68")],
            ..SeedBundle::default()
        };
        let err = validate_bundle(&bundle, "en").unwrap_err();
        assert_eq!(err.validation_issues().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_labels_targeting_rows_outside_bundle() {
        let label = |entity, code: &str| NewLabel {
            entity,
            code: code.to_owned(),
            locale_code: "fr".to_owned(),
            name: "x".to_owned(),
            description: None,
        };
        let bundle = SeedBundle {
            countries: vec![country("SA", "SAU", "682")],
            industry_codes: vec![NewClassificationCode {
                domain: "isic".to_owned(),
                code: "A".to_owned(),
                name: "Agriculture".to_owned(),
                description: None,
                parent_code: None,
                level: 1,
            }],
            labels: vec![
                label(EntityKind::Country, "SA"),
                label(EntityKind::Country, "ZZ"),
                label(EntityKind::IndustryCode, "isic:A"),
                label(EntityKind::IndustryCode, "naics:A"),
                label(EntityKind::Currency, "SA"),
            ],
            ..SeedBundle::default()
        };
        let outside: Vec<String> = labels_targeting_outside(&bundle)
            .iter()
            .map(|l| format!("{}/{}", l.entity, l.code))
            .collect();
        assert_eq!(outside, vec!["country/ZZ", "industry_code/naics:A", "currency/SA"]);
    }
}
