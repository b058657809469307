//! ISO 639-1 languages and the BCP 47 locales built on them.

use reference_data_sdk::{NewLanguage, NewLocale, Status, TextDirection};

/// `(code, code3, name, native name, right-to-left)`
type LanguageRow = (&'static str, &'static str, &'static str, &'static str, bool);

const LANGUAGES: &[LanguageRow] = &[
    ("ar", "ara", "Arabic", "العربية", true),
    ("bn", "ben", "Bengali", "বাংলা", false),
    ("cs", "ces", "Czech", "Čeština", false),
    ("da", "dan", "Danish", "Dansk", false),
    ("de", "deu", "German", "Deutsch", false),
    ("el", "ell", "Greek", "Ελληνικά", false),
    ("en", "eng", "English", "English", false),
    ("es", "spa", "Spanish", "Español", false),
    ("fa", "fas", "Persian", "فارسی", true),
    ("fi", "fin", "Finnish", "Suomi", false),
    ("fr", "fra", "French", "Français", false),
    ("he", "heb", "Hebrew", "עברית", true),
    ("hi", "hin", "Hindi", "हिन्दी", false),
    ("hu", "hun", "Hungarian", "Magyar", false),
    ("id", "ind", "Indonesian", "Bahasa Indonesia", false),
    ("it", "ita", "Italian", "Italiano", false),
    ("ja", "jpn", "Japanese", "日本語", false),
    ("ko", "kor", "Korean", "한국어", false),
    ("ms", "msa", "Malay", "Bahasa Melayu", false),
    ("nl", "nld", "Dutch", "Nederlands", false),
    ("no", "nor", "Norwegian", "Norsk", false),
    ("pl", "pol", "Polish", "Polski", false),
    ("pt", "por", "Portuguese", "Português", false),
    ("ro", "ron", "Romanian", "Română", false),
    ("ru", "rus", "Russian", "Русский", false),
    ("sv", "swe", "Swedish", "Svenska", false),
    ("sw", "swa", "Swahili", "Kiswahili", false),
    ("th", "tha", "Thai", "ไทย", false),
    ("tr", "tur", "Turkish", "Türkçe", false),
    ("uk", "ukr", "Ukrainian", "Українська", false),
    ("ur", "urd", "Urdu", "اردو", true),
    ("vi", "vie", "Vietnamese", "Tiếng Việt", false),
    ("zh", "zho", "Chinese", "中文", false),
];

pub(super) fn languages() -> Vec<NewLanguage> {
    LANGUAGES
        .iter()
        .map(|&(code, code3, name, native_name, rtl)| NewLanguage {
            code: code.to_owned(),
            name: name.to_owned(),
            native_name: Some(native_name.to_owned()),
            code3: Some(code3.to_owned()),
            direction: if rtl {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            },
            status: Status::Active,
        })
        .collect()
}

/// `(language, country, script, name)` for regional variants.
type RegionalRow = (&'static str, &'static str, Option<&'static str>, &'static str);

const REGIONAL_LOCALES: &[RegionalRow] = &[
    ("ar", "AE", None, "Arabic (United Arab Emirates)"),
    ("ar", "BH", None, "Arabic (Bahrain)"),
    ("ar", "EG", None, "Arabic (Egypt)"),
    ("ar", "IQ", None, "Arabic (Iraq)"),
    ("ar", "JO", None, "Arabic (Jordan)"),
    ("ar", "KW", None, "Arabic (Kuwait)"),
    ("ar", "LB", None, "Arabic (Lebanon)"),
    ("ar", "MA", None, "Arabic (Morocco)"),
    ("ar", "OM", None, "Arabic (Oman)"),
    ("ar", "QA", None, "Arabic (Qatar)"),
    ("ar", "SA", None, "Arabic (Saudi Arabia)"),
    ("bn", "BD", None, "Bengali (Bangladesh)"),
    ("bn", "IN", None, "Bengali (India)"),
    ("cs", "CZ", None, "Czech (Czechia)"),
    ("da", "DK", None, "Danish (Denmark)"),
    ("de", "AT", None, "German (Austria)"),
    ("de", "CH", None, "German (Switzerland)"),
    ("de", "DE", None, "German (Germany)"),
    ("el", "GR", None, "Greek (Greece)"),
    ("en", "AU", None, "English (Australia)"),
    ("en", "CA", None, "English (Canada)"),
    ("en", "GB", None, "English (United Kingdom)"),
    ("en", "IE", None, "English (Ireland)"),
    ("en", "IN", None, "English (India)"),
    ("en", "NZ", None, "English (New Zealand)"),
    ("en", "SG", None, "English (Singapore)"),
    ("en", "US", None, "English (United States)"),
    ("en", "ZA", None, "English (South Africa)"),
    ("es", "AR", None, "Spanish (Argentina)"),
    ("es", "CL", None, "Spanish (Chile)"),
    ("es", "CO", None, "Spanish (Colombia)"),
    ("es", "ES", None, "Spanish (Spain)"),
    ("es", "MX", None, "Spanish (Mexico)"),
    ("es", "US", None, "Spanish (United States)"),
    ("fa", "IR", None, "Persian (Iran)"),
    ("fi", "FI", None, "Finnish (Finland)"),
    ("fr", "BE", None, "French (Belgium)"),
    ("fr", "CA", None, "French (Canada)"),
    ("fr", "CH", None, "French (Switzerland)"),
    ("fr", "FR", None, "French (France)"),
    ("fr", "MA", None, "French (Morocco)"),
    ("he", "IL", None, "Hebrew (Israel)"),
    ("hi", "IN", None, "Hindi (India)"),
    ("hu", "HU", None, "Hungarian (Hungary)"),
    ("id", "ID", None, "Indonesian (Indonesia)"),
    ("it", "CH", None, "Italian (Switzerland)"),
    ("it", "IT", None, "Italian (Italy)"),
    ("ja", "JP", None, "Japanese (Japan)"),
    ("ko", "KR", None, "Korean (South Korea)"),
    ("ms", "MY", None, "Malay (Malaysia)"),
    ("nl", "BE", None, "Dutch (Belgium)"),
    ("nl", "NL", None, "Dutch (Netherlands)"),
    ("no", "NO", None, "Norwegian (Norway)"),
    ("pl", "PL", None, "Polish (Poland)"),
    ("pt", "BR", None, "Portuguese (Brazil)"),
    ("pt", "PT", None, "Portuguese (Portugal)"),
    ("ro", "RO", None, "Romanian (Romania)"),
    ("ru", "RU", None, "Russian (Russia)"),
    ("sv", "FI", None, "Swedish (Finland)"),
    ("sv", "SE", None, "Swedish (Sweden)"),
    ("sw", "KE", None, "Swahili (Kenya)"),
    ("th", "TH", None, "Thai (Thailand)"),
    ("tr", "TR", None, "Turkish (Türkiye)"),
    ("uk", "UA", None, "Ukrainian (Ukraine)"),
    ("ur", "PK", None, "Urdu (Pakistan)"),
    ("vi", "VN", None, "Vietnamese (Vietnam)"),
    ("zh", "CN", Some("Hans"), "Chinese (China)"),
    ("zh", "HK", Some("Hant"), "Chinese (Hong Kong)"),
    ("zh", "SG", Some("Hans"), "Chinese (Singapore)"),
    ("zh", "TW", Some("Hant"), "Chinese (Taiwan)"),
];

/// One base locale per language, then the regional variants.
pub(super) fn locales() -> Vec<NewLocale> {
    let base = LANGUAGES.iter().map(|&(code, _, name, _, _)| NewLocale {
        code: code.to_owned(),
        language_code: code.to_owned(),
        country_code2: None,
        script: None,
        name: name.to_owned(),
        direction: None,
        status: Status::Active,
    });

    let regional = REGIONAL_LOCALES
        .iter()
        .map(|&(language, country, script, name)| NewLocale {
            code: format!("{language}-{country}"),
            language_code: language.to_owned(),
            country_code2: Some(country.to_owned()),
            script: script.map(str::to_owned),
            name: name.to_owned(),
            direction: None,
            status: Status::Active,
        });

    base.chain(regional).collect()
}
