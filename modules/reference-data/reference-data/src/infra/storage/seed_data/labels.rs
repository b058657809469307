//! Translation overlays for the seeded rows.

use reference_data_sdk::{EntityKind, NewLabel};

/// `(entity, code, locale, name)`
type LabelRow = (EntityKind, &'static str, &'static str, &'static str);

const LABELS: &[LabelRow] = &[
    (EntityKind::Country, "SA", "ar", "السعودية"),
    (EntityKind::Country, "SA", "ar-SA", "المملكة العربية السعودية"),
    (EntityKind::Country, "SA", "fr", "Arabie saoudite"),
    (EntityKind::Country, "SA", "es", "Arabia Saudita"),
    (EntityKind::Country, "SA", "de", "Saudi-Arabien"),
    (EntityKind::Country, "SA", "zh", "沙特阿拉伯"),
    (EntityKind::Country, "SA", "ja", "サウジアラビア"),
    (EntityKind::Country, "AE", "ar", "الإمارات العربية المتحدة"),
    (EntityKind::Country, "AE", "fr", "Émirats arabes unis"),
    (EntityKind::Country, "AE", "es", "Emiratos Árabes Unidos"),
    (EntityKind::Country, "AE", "de", "Vereinigte Arabische Emirate"),
    (EntityKind::Country, "EG", "ar", "مصر"),
    (EntityKind::Country, "FR", "fr", "France"),
    (EntityKind::Country, "FR", "ar", "فرنسا"),
    (EntityKind::Country, "FR", "es", "Francia"),
    (EntityKind::Country, "FR", "de", "Frankreich"),
    (EntityKind::Country, "FR", "zh", "法国"),
    (EntityKind::Country, "FR", "ja", "フランス"),
    (EntityKind::Country, "DE", "de", "Deutschland"),
    (EntityKind::Country, "DE", "fr", "Allemagne"),
    (EntityKind::Country, "DE", "es", "Alemania"),
    (EntityKind::Country, "DE", "ar", "ألمانيا"),
    (EntityKind::Country, "DE", "zh", "德国"),
    (EntityKind::Country, "DE", "ja", "ドイツ"),
    (EntityKind::Country, "US", "fr", "États-Unis"),
    (EntityKind::Country, "US", "es", "Estados Unidos"),
    (EntityKind::Country, "US", "de", "Vereinigte Staaten"),
    (EntityKind::Country, "US", "ar", "الولايات المتحدة"),
    (EntityKind::Country, "US", "zh", "美国"),
    (EntityKind::Country, "US", "ja", "アメリカ合衆国"),
    (EntityKind::Country, "GB", "fr", "Royaume-Uni"),
    (EntityKind::Country, "GB", "es", "Reino Unido"),
    (EntityKind::Country, "GB", "de", "Vereinigtes Königreich"),
    (EntityKind::Country, "ES", "es", "España"),
    (EntityKind::Country, "ES", "fr", "Espagne"),
    (EntityKind::Country, "CN", "zh", "中国"),
    (EntityKind::Country, "CN", "ja", "中国"),
    (EntityKind::Country, "JP", "ja", "日本"),
    (EntityKind::Country, "JP", "zh", "日本"),
    (EntityKind::StateRegion, "SA-01", "ar", "الرياض"),
    (EntityKind::StateRegion, "SA-02", "ar", "مكة المكرمة"),
    (EntityKind::StateRegion, "AE-AZ", "ar", "أبوظبي"),
    (EntityKind::StateRegion, "AE-DU", "ar", "دبي"),
    (EntityKind::StateRegion, "DE-BY", "de", "Bayern"),
    (EntityKind::StateRegion, "DE-HE", "de", "Hessen"),
    (EntityKind::StateRegion, "DE-NW", "de", "Nordrhein-Westfalen"),
    (EntityKind::Currency, "USD", "fr", "dollar des États-Unis"),
    (EntityKind::Currency, "USD", "es", "dólar estadounidense"),
    (EntityKind::Currency, "USD", "de", "US-Dollar"),
    (EntityKind::Currency, "USD", "ar", "دولار أمريكي"),
    (EntityKind::Currency, "USD", "zh", "美元"),
    (EntityKind::Currency, "USD", "ja", "米ドル"),
    (EntityKind::Currency, "EUR", "fr", "euro"),
    (EntityKind::Currency, "EUR", "es", "euro"),
    (EntityKind::Currency, "EUR", "de", "Euro"),
    (EntityKind::Currency, "EUR", "ar", "يورو"),
    (EntityKind::Currency, "SAR", "ar", "ريال سعودي"),
    (EntityKind::Currency, "JPY", "ja", "円"),
    (EntityKind::Currency, "CNY", "zh", "人民币"),
    (EntityKind::Currency, "XAU", "fr", "or"),
    (EntityKind::Currency, "XAU", "de", "Gold"),
    (EntityKind::Language, "ar", "ar", "العربية"),
    (EntityKind::Language, "de", "de", "Deutsch"),
    (EntityKind::Language, "es", "es", "Español"),
    (EntityKind::Language, "fr", "fr", "Français"),
    (EntityKind::Language, "ja", "ja", "日本語"),
    (EntityKind::Language, "zh", "zh", "中文"),
    (EntityKind::Language, "en", "ar", "الإنجليزية"),
    (EntityKind::Language, "en", "de", "Englisch"),
    (EntityKind::Language, "en", "es", "inglés"),
    (EntityKind::Language, "en", "fr", "anglais"),
    (EntityKind::Language, "fr", "de", "Französisch"),
    (EntityKind::Language, "fr", "es", "francés"),
    (EntityKind::Locale, "ar-SA", "ar", "العربية (السعودية)"),
    (EntityKind::Locale, "fr-CA", "fr", "français (Canada)"),
    (EntityKind::Timezone, "Asia/Riyadh", "ar", "توقيت الرياض"),
    (EntityKind::Timezone, "Europe/Paris", "fr", "heure de Paris"),
    (EntityKind::Uom, "KGM", "fr", "kilogramme"),
    (EntityKind::Uom, "KGM", "de", "Kilogramm"),
    (EntityKind::Uom, "KGM", "es", "kilogramo"),
    (EntityKind::Uom, "KGM", "ar", "كيلوغرام"),
    (EntityKind::Uom, "MTR", "fr", "mètre"),
    (EntityKind::Uom, "MTR", "de", "Meter"),
    (EntityKind::Uom, "LTR", "fr", "litre"),
    (EntityKind::Uom, "LTR", "de", "Liter"),
    (EntityKind::CommodityDomain, "hs", "fr", "Système harmonisé"),
    (EntityKind::CommodityCode, "hs:09", "fr", "Café, thé, maté et épices"),
    (EntityKind::CommodityCode, "hs:09", "es", "Café, té, yerba mate y especias"),
    (EntityKind::CommodityCode, "hs:71", "fr", "Perles fines ou de culture, pierres gemmes, métaux précieux"),
    (EntityKind::IndustryDomain, "isic", "fr", "CITI Rév. 4"),
    (EntityKind::IndustryDomain, "isic", "es", "CIIU Rev. 4"),
    (EntityKind::IndustryCode, "isic:A", "fr", "Agriculture, sylviculture et pêche"),
    (EntityKind::IndustryCode, "isic:A", "es", "Agricultura, ganadería, silvicultura y pesca"),
    (EntityKind::IndustryCode, "isic:A", "ar", "الزراعة والحراجة وصيد الأسماك"),
    (EntityKind::IndustryCode, "isic:J", "fr", "Information et communication"),
    (EntityKind::IndustryCode, "naics:51", "es", "Información"),
];

pub(super) fn labels() -> Vec<NewLabel> {
    LABELS
        .iter()
        .map(|&(entity, code, locale_code, name)| NewLabel {
            entity,
            code: code.to_owned(),
            locale_code: locale_code.to_owned(),
            name: name.to_owned(),
            description: None,
        })
        .collect()
}
