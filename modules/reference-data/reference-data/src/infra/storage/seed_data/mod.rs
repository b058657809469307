//! Built-in catalog.
//!
//! The complete ISO 3166-1 and ISO 4217 lists, every ISIC section and NAICS
//! sector, and curated subsets of ISO 3166-2, ISO 639, BCP 47, the IANA tzdb,
//! UN/ECE Rec 20, HS and CPC, with translation overlays. Applied by
//! `seed_on_startup` and `refdata seed`; operators add rows with JSON bundles
//! on top.
#![allow(clippy::non_ascii_literal)]

use reference_data_sdk::SeedBundle;

mod classification;
mod geo;
mod labels;
mod language;
mod money;
mod time_zones;
mod units;

/// The catalog shipped with the module.
#[must_use]
pub fn builtin_bundle() -> SeedBundle {
    SeedBundle {
        countries: geo::countries(),
        state_regions: geo::state_regions(),
        currencies: money::currencies(),
        languages: language::languages(),
        locales: language::locales(),
        timezones: time_zones::timezones(),
        uoms: units::uoms(),
        commodity_domains: classification::commodity_domains(),
        commodity_codes: classification::commodity_codes(),
        industry_domains: classification::industry_domains(),
        industry_codes: classification::industry_codes(),
        labels: labels::labels(),
    }
}
