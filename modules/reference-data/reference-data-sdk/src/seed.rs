//! Seed bundles and seeding reports.

use serde::{Deserialize, Serialize};

use crate::models::{
    NewClassificationCode, NewClassificationDomain, NewCountry, NewCurrency, NewLabel,
    NewLanguage, NewLocale, NewStateRegion, NewTimezone, NewUom,
};

/// A set of literal reference rows to insert-or-skip.
///
/// Rows whose primary key already exists are left untouched, so applying the
/// same bundle any number of times yields the same row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedBundle {
    pub countries: Vec<NewCountry>,
    pub state_regions: Vec<NewStateRegion>,
    pub currencies: Vec<NewCurrency>,
    pub languages: Vec<NewLanguage>,
    pub locales: Vec<NewLocale>,
    pub timezones: Vec<NewTimezone>,
    pub uoms: Vec<NewUom>,
    pub commodity_domains: Vec<NewClassificationDomain>,
    pub commodity_codes: Vec<NewClassificationCode>,
    pub industry_domains: Vec<NewClassificationDomain>,
    pub industry_codes: Vec<NewClassificationCode>,
    pub labels: Vec<NewLabel>,
}

impl SeedBundle {
    /// Total number of rows across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
            + self.state_regions.len()
            + self.currencies.len()
            + self.languages.len()
            + self.locales.len()
            + self.timezones.len()
            + self.uoms.len()
            + self.commodity_domains.len()
            + self.commodity_codes.len()
            + self.industry_domains.len()
            + self.industry_codes.len()
            + self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends every row of `other` after the rows of `self`.
    pub fn extend(&mut self, other: SeedBundle) {
        self.countries.extend(other.countries);
        self.state_regions.extend(other.state_regions);
        self.currencies.extend(other.currencies);
        self.languages.extend(other.languages);
        self.locales.extend(other.locales);
        self.timezones.extend(other.timezones);
        self.uoms.extend(other.uoms);
        self.commodity_domains.extend(other.commodity_domains);
        self.commodity_codes.extend(other.commodity_codes);
        self.industry_domains.extend(other.industry_domains);
        self.industry_codes.extend(other.industry_codes);
        self.labels.extend(other.labels);
    }
}

/// Outcome of seeding one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSeedStats {
    pub table: String,
    pub inserted: u64,
    pub skipped: u64,
}

/// Outcome of a seed run, one entry per table in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub tables: Vec<TableSeedStats>,
}

impl SeedReport {
    #[must_use]
    pub fn inserted(&self) -> u64 {
        self.tables.iter().map(|t| t.inserted).sum()
    }

    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.tables.iter().map(|t| t.skipped).sum()
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSeedStats> {
        self.tables.iter().find(|t| t.table == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuantityType;

    #[test]
    fn test_bundle_from_partial_json() {
        let bundle: SeedBundle = serde_json::from_value(serde_json::json!({
            "uoms": [
                { "code": "KGM", "name": "kilogram", "symbol": "kg", "quantity_type": "mass" }
            ]
        }))
        .unwrap();

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.uoms[0].quantity_type, QuantityType::Mass);
        assert!(bundle.countries.is_empty());
    }

    #[test]
    fn test_bundle_rejects_unknown_tables() {
        let result = serde_json::from_value::<SeedBundle>(serde_json::json!({ "planets": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_report_totals() {
        let report = SeedReport {
            tables: vec![
                TableSeedStats {
                    table: "country".to_owned(),
                    inserted: 3,
                    skipped: 1,
                },
                TableSeedStats {
                    table: "currency".to_owned(),
                    inserted: 0,
                    skipped: 4,
                },
            ],
        };
        assert_eq!(report.inserted(), 3);
        assert_eq!(report.skipped(), 5);
        assert_eq!(report.table("currency").map(|t| t.skipped), Some(4));
        assert!(report.table("uom").is_none());
    }
}
