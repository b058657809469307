#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for lookups, alias resolution and tree walks

mod common;

use common::seeded_store;
use reference_data::ReferenceData;
use reference_data::config::ReferenceDataConfig;
use reference_data_sdk::{ClassificationKind, QuantityType, Status, TextDirection};

// =============================================================================
// Currencies
// =============================================================================

#[tokio::test]
async fn test_gold_has_no_minor_units_or_symbol() {
    let client = seeded_store().await.client();

    let xau = client.get_currency("XAU").await.unwrap();
    assert_eq!(xau.minor_units, None);
    assert_eq!(xau.symbol, None);
    assert_eq!(xau.numeric3, "959");

    let usd = client.get_currency("USD").await.unwrap();
    assert_eq!(usd.minor_units, Some(2));
    assert_eq!(usd.symbol.as_deref(), Some("$"));
    assert_eq!(usd.numeric3, "840");
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let client = seeded_store().await.client();

    let deprecated = client
        .list_currencies(Some(Status::Deprecated))
        .await
        .unwrap();
    assert_eq!(
        deprecated.iter().map(|c| c.code.as_str()).collect::<Vec<_>>(),
        ["ANG", "BGN"]
    );

    let countries = client.list_countries(Some(Status::Deprecated)).await.unwrap();
    assert!(countries.iter().any(|c| c.code2 == "AN"));

    let all = client.list_countries(None).await.unwrap();
    assert!(all.len() > countries.len());
    assert!(all.windows(2).all(|w| w[0].code2 < w[1].code2));
}

#[tokio::test]
async fn test_country_metadata_round_trips() {
    let client = seeded_store().await.client();
    let sa = client.get_country("SA").await.unwrap();
    assert_eq!(sa.code3, "SAU");
    assert_eq!(sa.official_name.as_deref(), Some("Kingdom of Saudi Arabia"));
    assert_eq!(sa.metadata.unwrap()["calling_code"], "+966");
}

#[tokio::test]
async fn test_unknown_codes_are_not_found() {
    let client = seeded_store().await.client();

    assert!(client.get_country("ZZ").await.unwrap_err().is_not_found());
    assert!(client.get_currency("ZZZ").await.unwrap_err().is_not_found());
    assert!(client.get_timezone("Mars/Olympus").await.unwrap_err().is_not_found());
    assert!(client.list_state_regions("ZZ").await.unwrap_err().is_not_found());
    // Codes are case-sensitive.
    assert!(client.get_country("sa").await.unwrap_err().is_not_found());
}

// =============================================================================
// Languages and locales
// =============================================================================

#[tokio::test]
async fn test_locale_direction_follows_language() {
    let client = seeded_store().await.client();

    assert_eq!(
        client.locale_direction("ar-SA").await.unwrap(),
        TextDirection::Rtl
    );
    assert_eq!(client.locale_direction("he").await.unwrap(), TextDirection::Rtl);
    assert_eq!(
        client.locale_direction("en-US").await.unwrap(),
        TextDirection::Ltr
    );
}

#[tokio::test]
async fn test_locales_reference_existing_rows() {
    let client = seeded_store().await.client();

    for locale in client.list_locales(None).await.unwrap() {
        client.get_language(&locale.language_code).await.unwrap();
        if let Some(cc) = locale.country_code2.as_deref() {
            client.get_country(cc).await.unwrap();
        }
    }

    let arabic = client.list_locales(Some("ar")).await.unwrap();
    assert!(arabic.iter().all(|l| l.language_code == "ar"));
    assert!(arabic.iter().any(|l| l.code == "ar-SA"));
}

// =============================================================================
// Time zones
// =============================================================================

#[tokio::test]
async fn test_alias_resolves_to_canonical_zone() {
    let client = seeded_store().await.client();

    let alias = client.get_timezone("US/Eastern").await.unwrap();
    assert!(alias.is_alias);

    let zone = client.canonical_timezone("US/Eastern").await.unwrap();
    assert_eq!(zone.id, "America/New_York");
    assert!(!zone.is_alias);

    let zone = client.canonical_timezone("Asia/Riyadh").await.unwrap();
    assert_eq!(zone.id, "Asia/Riyadh");
}

// =============================================================================
// Hierarchies
// =============================================================================

#[tokio::test]
async fn test_state_region_path_is_root_first() {
    let client = seeded_store().await.client();

    let path = client.state_region_path("GB-LND").await.unwrap();
    let codes: Vec<&str> = path.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["GB-ENG", "GB-LND"]);

    let regions = client.list_state_regions("SA").await.unwrap();
    assert_eq!(regions.len(), 13);
    assert!(regions.iter().all(|r| r.code.starts_with("SA-")));
}

#[tokio::test]
async fn test_zero_depth_bound_is_rejected_at_startup() {
    let cfg = ReferenceDataConfig {
        max_hierarchy_depth: 0,
        ..ReferenceDataConfig::default()
    };
    let err = ReferenceData::connect(&cfg).await.err().expect("rejected");
    assert!(format!("{err:#}").contains("max_hierarchy_depth"), "{err:#}");
}

#[tokio::test]
async fn test_single_level_depth_bound_walks_roots() {
    let cfg = ReferenceDataConfig {
        seed_on_startup: true,
        max_hierarchy_depth: 1,
        ..ReferenceDataConfig::default()
    };
    let client = ReferenceData::connect(&cfg).await.unwrap().client();

    let path = client.state_region_path("GB-ENG").await.unwrap();
    assert_eq!(path.len(), 1);
    assert!(client.state_region_path("GB-LND").await.is_err());
}

#[tokio::test]
async fn test_classification_path_and_levels() {
    let client = seeded_store().await.client();

    let path = client
        .classification_path(ClassificationKind::Industry, "naics", "541511")
        .await
        .unwrap();
    let codes: Vec<&str> = path.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["54", "541", "5415", "54151", "541511"]);
    assert!(path.iter().enumerate().all(|(i, c)| usize::from(c.level) == i + 1));
}

#[tokio::test]
async fn test_classification_children_and_roots() {
    let client = seeded_store().await.client();

    let roots = client
        .classification_children(ClassificationKind::Industry, "isic", None)
        .await
        .unwrap();
    let codes: Vec<&str> = roots.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes.len(), 21);
    assert_eq!(codes.first(), Some(&"A"));
    assert_eq!(codes.last(), Some(&"U"));

    let children = client
        .classification_children(ClassificationKind::Industry, "isic", Some("C"))
        .await
        .unwrap();
    let codes: Vec<&str> = children.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["10", "26"]);

    // Same code in another domain is a different node.
    let hs = client
        .get_classification_code(ClassificationKind::Commodity, "hs", "01")
        .await
        .unwrap();
    let cpc = client
        .get_classification_code(ClassificationKind::Commodity, "cpc", "01")
        .await
        .unwrap();
    assert_ne!(hs.name, cpc.name);

    let err = client
        .classification_children(ClassificationKind::Industry, "isic", Some("Z"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_domains_per_kind() {
    let client = seeded_store().await.client();

    let commodity = client
        .list_classification_domains(ClassificationKind::Commodity)
        .await
        .unwrap();
    assert_eq!(
        commodity.iter().map(|d| d.code.as_str()).collect::<Vec<_>>(),
        ["cpc", "hs"]
    );
    assert!(commodity.iter().all(|d| d.kind == ClassificationKind::Commodity));
}

// =============================================================================
// Units of measure
// =============================================================================

#[tokio::test]
async fn test_every_quantity_type_is_seeded() {
    let client = seeded_store().await.client();

    for qt in QuantityType::ALL {
        let units = client.list_uoms(Some(qt)).await.unwrap();
        assert!(!units.is_empty(), "no unit for {qt}");
        assert!(units.iter().all(|u| u.quantity_type == qt));
    }
    assert_eq!(client.get_uom("KGM").await.unwrap().symbol.as_deref(), Some("kg"));
}
