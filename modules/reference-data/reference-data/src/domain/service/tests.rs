#![allow(clippy::non_ascii_literal)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reference_data_sdk::{
    Audit, ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency,
    EntityKind, Label, Language, Locale, NewLabel, NewStateRegion, QuantityType, SeedBundle,
    SeedReport, StateRegion, Status, TableSeedStats, TextDirection, Timezone, Uom,
    split_classification_label_code,
};
use time::OffsetDateTime;
use tokio::sync::Notify;

use super::{ReferenceDataService, ServiceConfig};
use crate::domain::error::DomainError;
use crate::domain::repo::ReferenceDataRepository;

fn audit() -> Audit {
    Audit {
        created_at: OffsetDateTime::UNIX_EPOCH,
        created_by: "test".to_owned(),
        updated_at: None,
        updated_by: None,
    }
}

fn country(code2: &str, name: &str) -> Country {
    Country {
        code2: code2.to_owned(),
        code3: format!("{code2}X"),
        numeric3: "000".to_owned(),
        name: name.to_owned(),
        official_name: None,
        region: None,
        subregion: None,
        status: Status::Active,
        metadata: None,
        audit: audit(),
    }
}

fn region(code: &str, parent: Option<&str>) -> StateRegion {
    StateRegion {
        code: code.to_owned(),
        country_code2: code[..2].to_owned(),
        parent_code: parent.map(ToOwned::to_owned),
        name: code.to_owned(),
        subdivision_type: None,
        audit: audit(),
    }
}

fn language(code: &str, direction: TextDirection) -> Language {
    Language {
        code: code.to_owned(),
        name: code.to_owned(),
        native_name: None,
        code3: None,
        direction,
        status: Status::Active,
        audit: audit(),
    }
}

fn locale(code: &str, direction: Option<TextDirection>) -> Locale {
    let (language_code, country_code2) = match code.split_once('-') {
        Some((l, c)) => (l.to_owned(), Some(c.to_owned())),
        None => (code.to_owned(), None),
    };
    Locale {
        code: code.to_owned(),
        language_code,
        country_code2,
        script: None,
        name: code.to_owned(),
        direction,
        status: Status::Active,
        audit: audit(),
    }
}

fn zone(id: &str, canonical: Option<&str>) -> Timezone {
    Timezone {
        id: id.to_owned(),
        name: id.to_owned(),
        utc_offset: "+00:00".to_owned(),
        is_alias: canonical.is_some(),
        canonical_id: canonical.map(ToOwned::to_owned),
        audit: audit(),
    }
}

fn industry(domain: &str, code: &str, parent: Option<&str>, level: u8) -> ClassificationCode {
    ClassificationCode {
        kind: ClassificationKind::Industry,
        domain: domain.to_owned(),
        code: code.to_owned(),
        name: format!("{domain} {code}"),
        description: None,
        parent_code: parent.map(ToOwned::to_owned),
        level,
        audit: audit(),
    }
}

fn label(entity: EntityKind, code: &str, locale_code: &str, name: &str) -> Label {
    Label {
        entity,
        code: code.to_owned(),
        locale_code: locale_code.to_owned(),
        name: name.to_owned(),
        description: None,
        audit: audit(),
    }
}

fn new_label(entity: EntityKind, code: &str, locale_code: &str, name: &str) -> NewLabel {
    NewLabel {
        entity,
        code: code.to_owned(),
        locale_code: locale_code.to_owned(),
        name: name.to_owned(),
        description: None,
    }
}

// Mock repository for testing
#[derive(Default)]
struct MockRepository {
    countries: Vec<Country>,
    state_regions: Vec<StateRegion>,
    languages: Vec<Language>,
    locales: Vec<Locale>,
    timezones: Vec<Timezone>,
    industry_codes: Vec<ClassificationCode>,
    labels: Mutex<Vec<Label>>,
    statuses: Mutex<Vec<(EntityKind, String, Status)>>,
    seeded: Mutex<Option<SeedBundle>>,
    label_queries: AtomicUsize,
    /// One-shot hold of the next label read: signals the first `Notify` once
    /// the rows are read, then waits on the second before returning them.
    label_read_hold: Mutex<Option<(Arc<Notify>, Arc<Notify>)>>,
}

impl MockRepository {
    fn sample() -> Self {
        Self {
            countries: vec![country("SA", "Saudi Arabia"), country("GB", "United Kingdom")],
            state_regions: vec![
                region("GB-ENG", None),
                region("GB-LND", Some("GB-ENG")),
                region("SA-01", None),
            ],
            languages: vec![
                language("ar", TextDirection::Rtl),
                language("en", TextDirection::Ltr),
                language("fr", TextDirection::Ltr),
            ],
            locales: vec![
                locale("ar", None),
                locale("ar-SA", None),
                locale("ar-EG", Some(TextDirection::Ltr)),
                locale("en", None),
                locale("fr", None),
            ],
            timezones: vec![
                zone("America/New_York", None),
                zone("US/Eastern", Some("America/New_York")),
                zone("EST5EDT", Some("US/Eastern")),
            ],
            industry_codes: vec![
                industry("isic", "A", None, 1),
                industry("isic", "01", Some("A"), 2),
                industry("isic", "011", Some("01"), 3),
            ],
            labels: Mutex::new(vec![
                label(EntityKind::Country, "SA", "ar", "السعودية"),
                label(EntityKind::Country, "SA", "ar-SA", "المملكة العربية السعودية"),
                label(EntityKind::Language, "fr", "fr", "Français"),
            ]),
            ..Self::default()
        }
    }

    fn queries(&self) -> usize {
        self.label_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferenceDataRepository for MockRepository {
    async fn find_country(&self, code2: &str) -> Result<Option<Country>, DomainError> {
        Ok(self.countries.iter().find(|c| c.code2 == code2).cloned())
    }

    async fn list_countries(&self, status: Option<Status>) -> Result<Vec<Country>, DomainError> {
        Ok(self
            .countries
            .iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect())
    }

    async fn find_state_region(&self, code: &str) -> Result<Option<StateRegion>, DomainError> {
        Ok(self.state_regions.iter().find(|r| r.code == code).cloned())
    }

    async fn list_state_regions(
        &self,
        country_code2: &str,
    ) -> Result<Vec<StateRegion>, DomainError> {
        Ok(self
            .state_regions
            .iter()
            .filter(|r| r.country_code2 == country_code2)
            .cloned()
            .collect())
    }

    async fn find_currency(&self, _code: &str) -> Result<Option<Currency>, DomainError> {
        Ok(None)
    }

    async fn list_currencies(&self, _status: Option<Status>) -> Result<Vec<Currency>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_language(&self, code: &str) -> Result<Option<Language>, DomainError> {
        Ok(self.languages.iter().find(|l| l.code == code).cloned())
    }

    async fn list_languages(&self, _status: Option<Status>) -> Result<Vec<Language>, DomainError> {
        Ok(self.languages.clone())
    }

    async fn find_locale(&self, code: &str) -> Result<Option<Locale>, DomainError> {
        Ok(self.locales.iter().find(|l| l.code == code).cloned())
    }

    async fn list_locales(&self, language_code: Option<&str>) -> Result<Vec<Locale>, DomainError> {
        Ok(self
            .locales
            .iter()
            .filter(|l| language_code.is_none_or(|lc| l.language_code == lc))
            .cloned()
            .collect())
    }

    async fn find_timezone(&self, id: &str) -> Result<Option<Timezone>, DomainError> {
        Ok(self.timezones.iter().find(|tz| tz.id == id).cloned())
    }

    async fn find_uom(&self, _code: &str) -> Result<Option<Uom>, DomainError> {
        Ok(None)
    }

    async fn list_uoms(
        &self,
        _quantity_type: Option<QuantityType>,
    ) -> Result<Vec<Uom>, DomainError> {
        Ok(Vec::new())
    }

    async fn list_classification_domains(
        &self,
        _kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Option<ClassificationCode>, DomainError> {
        Ok(self
            .industry_codes
            .iter()
            .find(|c| c.kind == kind && c.domain == domain && c.code == code)
            .cloned())
    }

    async fn list_classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, DomainError> {
        Ok(self
            .industry_codes
            .iter()
            .filter(|c| c.kind == kind && c.domain == domain && c.parent_code.as_deref() == parent)
            .cloned()
            .collect())
    }

    async fn find_label_names(
        &self,
        entity: EntityKind,
        code: &str,
        locales: &[&str],
    ) -> Result<Vec<(String, String)>, DomainError> {
        self.label_queries.fetch_add(1, Ordering::SeqCst);
        let rows: Vec<(String, String)> = self
            .labels
            .lock()
            .unwrap()
            .iter()
            .filter(|l| {
                l.entity == entity && l.code == code && locales.contains(&l.locale_code.as_str())
            })
            .map(|l| (l.locale_code.clone(), l.name.clone()))
            .collect();

        let hold = self.label_read_hold.lock().unwrap().take();
        if let Some((read_done, resume)) = hold {
            read_done.notify_one();
            resume.notified().await;
        }
        Ok(rows)
    }

    async fn canonical_name(
        &self,
        entity: EntityKind,
        code: &str,
    ) -> Result<Option<String>, DomainError> {
        let name = match entity {
            EntityKind::Country => self
                .countries
                .iter()
                .find(|c| c.code2 == code)
                .map(|c| c.name.clone()),
            EntityKind::Language => self
                .languages
                .iter()
                .find(|l| l.code == code)
                .map(|l| l.name.clone()),
            EntityKind::IndustryCode => split_classification_label_code(code).and_then(|(d, c)| {
                self.industry_codes
                    .iter()
                    .find(|i| i.domain == d && i.code == c)
                    .map(|i| i.name.clone())
            }),
            _ => None,
        };
        Ok(name)
    }

    async fn upsert_label(
        &self,
        label: NewLabel,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<Label, DomainError> {
        let mut labels = self.labels.lock().unwrap();
        labels.retain(|l| {
            !(l.entity == label.entity
                && l.code == label.code
                && l.locale_code == label.locale_code)
        });
        let saved = Label {
            entity: label.entity,
            code: label.code,
            locale_code: label.locale_code,
            name: label.name,
            description: label.description,
            audit: Audit {
                created_at: now,
                created_by: actor.to_owned(),
                updated_at: None,
                updated_by: None,
            },
        };
        labels.push(saved.clone());
        Ok(saved)
    }

    async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        _actor: &str,
        _now: OffsetDateTime,
    ) -> Result<u64, DomainError> {
        let exists = match entity {
            EntityKind::Country => self.countries.iter().any(|c| c.code2 == code),
            EntityKind::Language => self.languages.iter().any(|l| l.code == code),
            EntityKind::Locale => self.locales.iter().any(|l| l.code == code),
            _ => false,
        };
        if !exists {
            return Ok(0);
        }
        self.statuses
            .lock()
            .unwrap()
            .push((entity, code.to_owned(), status));
        Ok(1)
    }

    async fn seed(
        &self,
        bundle: &SeedBundle,
        _actor: &str,
        _now: OffsetDateTime,
    ) -> Result<SeedReport, DomainError> {
        *self.seeded.lock().unwrap() = Some(bundle.clone());
        Ok(SeedReport {
            tables: vec![TableSeedStats {
                table: "state_region".to_owned(),
                inserted: bundle.state_regions.len() as u64,
                skipped: 0,
            }],
        })
    }

    async fn row_counts(&self) -> Result<Vec<(&'static str, u64)>, DomainError> {
        Ok(vec![("country", self.countries.len() as u64)])
    }
}

fn service_with(repo: &Arc<MockRepository>, config: ServiceConfig) -> ReferenceDataService {
    ReferenceDataService::new(Arc::clone(repo) as Arc<dyn ReferenceDataRepository>, config)
}

fn service() -> (Arc<MockRepository>, ReferenceDataService) {
    let repo = Arc::new(MockRepository::sample());
    let svc = service_with(&repo, ServiceConfig::default());
    (repo, svc)
}

#[tokio::test]
async fn test_localized_name_prefers_exact_tag() {
    let (_, svc) = service();
    let name = svc
        .localized_name(EntityKind::Country, "SA", "ar-SA")
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("المملكة العربية السعودية"));
}

#[tokio::test]
async fn test_localized_name_falls_back_to_base_language() {
    let (_, svc) = service();
    let name = svc
        .localized_name(EntityKind::Country, "SA", "ar-EG")
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("السعودية"));
}

#[tokio::test]
async fn test_localized_name_never_returns_canonical_name() {
    let (_, svc) = service();
    assert_eq!(
        svc.localized_name(EntityKind::Country, "SA", "en").await.unwrap(),
        None
    );
    assert_eq!(
        svc.localized_name(EntityKind::Language, "fr", "xx").await.unwrap(),
        None
    );
    assert_eq!(
        svc.localized_name(EntityKind::Language, "fr", "fr").await.unwrap(),
        Some("Français".to_owned())
    );
}

#[tokio::test]
async fn test_localized_name_empty_locale_skips_store() {
    let (repo, svc) = service();
    assert_eq!(
        svc.localized_name(EntityKind::Country, "SA", "").await.unwrap(),
        None
    );
    assert_eq!(repo.queries(), 0);
}

#[tokio::test]
async fn test_cache_memoizes_until_next_write() {
    let repo = Arc::new(MockRepository::sample());
    let svc = service_with(
        &repo,
        ServiceConfig {
            cache_localized_names: true,
            ..ServiceConfig::default()
        },
    );

    for _ in 0..3 {
        assert_eq!(
            svc.localized_name(EntityKind::Language, "fr", "fr-CA").await.unwrap(),
            Some("Français".to_owned())
        );
    }
    assert_eq!(repo.queries(), 1);

    svc.put_label(new_label(EntityKind::Language, "fr", "fr", "français"), "admin")
        .await
        .unwrap();
    assert_eq!(
        svc.localized_name(EntityKind::Language, "fr", "fr-CA").await.unwrap(),
        Some("français".to_owned())
    );
    assert_eq!(repo.queries(), 2);
}

#[tokio::test]
async fn test_cache_ignores_read_that_overlaps_a_write() {
    let repo = Arc::new(MockRepository::sample());
    let svc = service_with(
        &repo,
        ServiceConfig {
            cache_localized_names: true,
            ..ServiceConfig::default()
        },
    );
    let read_done = Arc::new(Notify::new());
    let resume = Arc::new(Notify::new());
    *repo.label_read_hold.lock().unwrap() = Some((Arc::clone(&read_done), Arc::clone(&resume)));

    let (stale, ()) = tokio::join!(
        svc.localized_name(EntityKind::Country, "SA", "fr"),
        async {
            read_done.notified().await;
            svc.put_label(
                new_label(EntityKind::Country, "SA", "fr", "Arabie saoudite"),
                "admin",
            )
            .await
            .unwrap();
            resume.notify_one();
        }
    );
    assert_eq!(stale.unwrap(), None);

    assert_eq!(
        svc.localized_name(EntityKind::Country, "SA", "fr").await.unwrap(),
        Some("Arabie saoudite".to_owned())
    );
}

#[tokio::test]
async fn test_uncached_service_reads_every_time() {
    let (repo, svc) = service();
    for _ in 0..2 {
        svc.localized_name(EntityKind::Language, "fr", "fr").await.unwrap();
    }
    assert_eq!(repo.queries(), 2);
}

#[tokio::test]
async fn test_display_name_falls_back_to_canonical() {
    let (_, svc) = service();
    assert_eq!(
        svc.display_name(EntityKind::Country, "GB", "ar-SA").await.unwrap(),
        "United Kingdom"
    );
    assert_eq!(
        svc.display_name(EntityKind::Country, "SA", "ar-SA").await.unwrap(),
        "المملكة العربية السعودية"
    );

    let err = svc
        .display_name(EntityKind::Country, "ZZ", "fr")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: EntityKind::Country, .. }));
}

#[tokio::test]
async fn test_locale_direction_override_and_inheritance() {
    let (_, svc) = service();
    assert_eq!(svc.locale_direction("ar-SA").await.unwrap(), TextDirection::Rtl);
    assert_eq!(svc.locale_direction("ar-EG").await.unwrap(), TextDirection::Ltr);
    assert_eq!(svc.locale_direction("fr").await.unwrap(), TextDirection::Ltr);
    assert!(matches!(
        svc.locale_direction("xx").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_canonical_timezone_follows_chain() {
    let (_, svc) = service();
    assert_eq!(
        svc.canonical_timezone("EST5EDT").await.unwrap().id,
        "America/New_York"
    );
    assert_eq!(
        svc.canonical_timezone("America/New_York").await.unwrap().id,
        "America/New_York"
    );
}

#[tokio::test]
async fn test_canonical_timezone_hop_limit() {
    let repo = Arc::new(MockRepository::sample());
    let svc = service_with(
        &repo,
        ServiceConfig {
            max_alias_hops: 1,
            ..ServiceConfig::default()
        },
    );
    assert!(svc.canonical_timezone("US/Eastern").await.is_ok());
    assert!(matches!(
        svc.canonical_timezone("EST5EDT").await,
        Err(DomainError::AliasChainTooLong { max: 1, .. })
    ));
}

#[tokio::test]
async fn test_canonical_timezone_detects_stored_cycle() {
    let repo = Arc::new(MockRepository {
        timezones: vec![zone("A", Some("B")), zone("B", Some("A"))],
        ..MockRepository::default()
    });
    let svc = service_with(&repo, ServiceConfig::default());
    assert!(matches!(
        svc.canonical_timezone("A").await,
        Err(DomainError::HierarchyCycle {
            entity: EntityKind::Timezone,
            ..
        })
    ));
}

#[tokio::test]
async fn test_state_region_path_is_root_first() {
    let (_, svc) = service();
    let path: Vec<String> = svc
        .state_region_path("GB-LND")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.code)
        .collect();
    assert_eq!(path, vec!["GB-ENG", "GB-LND"]);
}

#[tokio::test]
async fn test_state_region_path_guards() {
    let repo = Arc::new(MockRepository {
        state_regions: vec![
            region("XX-A", Some("XX-B")),
            region("XX-B", Some("XX-A")),
            region("YY-1", None),
            region("YY-2", Some("YY-1")),
            region("YY-3", Some("YY-2")),
        ],
        ..MockRepository::default()
    });
    let svc = service_with(
        &repo,
        ServiceConfig {
            max_hierarchy_depth: 2,
            ..ServiceConfig::default()
        },
    );
    assert!(matches!(
        svc.state_region_path("XX-A").await,
        Err(DomainError::HierarchyCycle { .. })
    ));
    assert!(svc.state_region_path("YY-2").await.is_ok());
    assert!(matches!(
        svc.state_region_path("YY-3").await,
        Err(DomainError::HierarchyTooDeep { max: 2, .. })
    ));
}

#[tokio::test]
async fn test_classification_path_and_children() {
    let (_, svc) = service();
    let path: Vec<String> = svc
        .classification_path(ClassificationKind::Industry, "isic", "011")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(path, vec!["A", "01", "011"]);

    let roots = svc
        .classification_children(ClassificationKind::Industry, "isic", None)
        .await
        .unwrap();
    assert_eq!(roots.len(), 1);

    let err = svc
        .classification_children(ClassificationKind::Industry, "isic", Some("99"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            entity: EntityKind::IndustryCode,
            ref code,
        } if code == "isic:99"
    ));
}

#[tokio::test]
async fn test_list_state_regions_requires_known_country() {
    let (_, svc) = service();
    assert_eq!(svc.list_state_regions("GB").await.unwrap().len(), 2);
    assert!(matches!(
        svc.list_state_regions("ZZ").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_seed_rejects_invalid_bundle_before_writing() {
    let (repo, svc) = service();
    let bundle = SeedBundle {
        state_regions: vec![NewStateRegion {
            code: "SA-01".to_owned(),
            country_code2: "SA".to_owned(),
            parent_code: Some("SA-01".to_owned()),
            name: "Riyadh".to_owned(),
            subdivision_type: None,
        }],
        ..SeedBundle::default()
    };
    let err = svc.seed(bundle, "admin").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidSeed(_)));
    assert!(repo.seeded.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_seed_orders_parents_first() {
    let (repo, svc) = service();
    let sub = |code: &str, parent: Option<&str>| NewStateRegion {
        code: code.to_owned(),
        country_code2: "GB".to_owned(),
        parent_code: parent.map(ToOwned::to_owned),
        name: code.to_owned(),
        subdivision_type: None,
    };
    let bundle = SeedBundle {
        state_regions: vec![
            sub("GB-BFS", Some("GB-NIR")),
            sub("GB-NIR", Some("GB-UKM")),
            sub("GB-UKM", None),
        ],
        ..SeedBundle::default()
    };

    let report = svc.seed(bundle, "admin").await.unwrap();
    assert_eq!(report.inserted(), 3);

    let seeded = repo.seeded.lock().unwrap().clone().unwrap();
    let order: Vec<&str> = seeded.state_regions.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(order, vec!["GB-UKM", "GB-NIR", "GB-BFS"]);
}

#[tokio::test]
async fn test_put_label_rules() {
    let (_, svc) = service();

    let err = svc
        .put_label(new_label(EntityKind::Country, "SA", "en", "Saudi"), "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "locale_code"));

    let err = svc
        .put_label(new_label(EntityKind::IndustryCode, "A", "fr", "Agriculture"), "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "code"));

    let err = svc
        .put_label(new_label(EntityKind::Country, "ZZ", "fr", "Nulle part"), "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: EntityKind::Country, .. }));

    let err = svc
        .put_label(new_label(EntityKind::Country, "SA", "xx", "?"), "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: EntityKind::Locale, .. }));

    let saved = svc
        .put_label(
            new_label(EntityKind::IndustryCode, "isic:A", "fr", "Agriculture"),
            "admin",
        )
        .await
        .unwrap();
    assert_eq!(saved.audit.created_by, "admin");
    assert_eq!(
        svc.localized_name(EntityKind::IndustryCode, "isic:A", "fr-FR")
            .await
            .unwrap()
            .as_deref(),
        Some("Agriculture")
    );
}

#[tokio::test]
async fn test_set_status_rules() {
    let (repo, svc) = service();

    let err = svc
        .set_status(EntityKind::Timezone, "UTC", Status::Deprecated, "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let err = svc
        .set_status(EntityKind::Country, "ZZ", Status::Deprecated, "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    svc.set_status(EntityKind::Country, "SA", Status::Deprecated, "admin")
        .await
        .unwrap();
    assert_eq!(
        repo.statuses.lock().unwrap().as_slice(),
        &[(EntityKind::Country, "SA".to_owned(), Status::Deprecated)]
    );
}

#[tokio::test]
async fn test_writes_require_actor() {
    let (_, svc) = service();
    let err = svc.seed(SeedBundle::default(), "  ").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "actor"));
}
