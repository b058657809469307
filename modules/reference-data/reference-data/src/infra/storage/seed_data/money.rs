//! ISO 4217 currencies and funds.

use reference_data_sdk::{NewCurrency, Status};

/// `(code, numeric3, name, symbol, minor units)`
type CurrencyRow = (&'static str, &'static str, &'static str, Option<&'static str>, u8);

const CURRENCIES: &[CurrencyRow] = &[
    ("AED", "784", "UAE Dirham", Some("د.إ"), 2),
    ("AFN", "971", "Afghani", Some("؋"), 2),
    ("ALL", "008", "Lek", Some("L"), 2),
    ("AMD", "051", "Armenian Dram", Some("֏"), 2),
    ("AOA", "973", "Kwanza", Some("Kz"), 2),
    ("ARS", "032", "Argentine Peso", Some("$"), 2),
    ("AUD", "036", "Australian Dollar", Some("$"), 2),
    ("AWG", "533", "Aruban Florin", Some("ƒ"), 2),
    ("AZN", "944", "Azerbaijan Manat", Some("₼"), 2),
    ("BAM", "977", "Convertible Mark", Some("KM"), 2),
    ("BBD", "052", "Barbados Dollar", Some("$"), 2),
    ("BDT", "050", "Taka", Some("৳"), 2),
    ("BHD", "048", "Bahraini Dinar", Some(".د.ب"), 3),
    ("BIF", "108", "Burundi Franc", Some("FBu"), 0),
    ("BMD", "060", "Bermudian Dollar", Some("$"), 2),
    ("BND", "096", "Brunei Dollar", Some("$"), 2),
    ("BOB", "068", "Boliviano", Some("Bs"), 2),
    ("BOV", "984", "Mvdol", None, 2),
    ("BRL", "986", "Brazilian Real", Some("R$"), 2),
    ("BSD", "044", "Bahamian Dollar", Some("$"), 2),
    ("BTN", "064", "Ngultrum", Some("Nu."), 2),
    ("BWP", "072", "Pula", Some("P"), 2),
    ("BYN", "933", "Belarusian Ruble", Some("Br"), 2),
    ("BZD", "084", "Belize Dollar", Some("$"), 2),
    ("CAD", "124", "Canadian Dollar", Some("$"), 2),
    ("CDF", "976", "Congolese Franc", Some("FC"), 2),
    ("CHE", "947", "WIR Euro", None, 2),
    ("CHF", "756", "Swiss Franc", Some("CHF"), 2),
    ("CHW", "948", "WIR Franc", None, 2),
    ("CLF", "990", "Unidad de Fomento", None, 4),
    ("CLP", "152", "Chilean Peso", Some("$"), 0),
    ("CNY", "156", "Yuan Renminbi", Some("¥"), 2),
    ("COP", "170", "Colombian Peso", Some("$"), 2),
    ("COU", "970", "Unidad de Valor Real", None, 2),
    ("CRC", "188", "Costa Rican Colon", Some("₡"), 2),
    ("CUP", "192", "Cuban Peso", Some("$"), 2),
    ("CVE", "132", "Cabo Verde Escudo", Some("$"), 2),
    ("CZK", "203", "Czech Koruna", Some("Kč"), 2),
    ("DJF", "262", "Djibouti Franc", Some("Fdj"), 0),
    ("DKK", "208", "Danish Krone", Some("kr"), 2),
    ("DOP", "214", "Dominican Peso", Some("$"), 2),
    ("DZD", "012", "Algerian Dinar", Some("د.ج"), 2),
    ("EGP", "818", "Egyptian Pound", Some("E£"), 2),
    ("ERN", "232", "Nakfa", Some("Nfk"), 2),
    ("ETB", "230", "Ethiopian Birr", Some("Br"), 2),
    ("EUR", "978", "Euro", Some("€"), 2),
    ("FJD", "242", "Fiji Dollar", Some("$"), 2),
    ("FKP", "238", "Falkland Islands Pound", Some("£"), 2),
    ("GBP", "826", "Pound Sterling", Some("£"), 2),
    ("GEL", "981", "Lari", Some("₾"), 2),
    ("GHS", "936", "Ghana Cedi", Some("₵"), 2),
    ("GIP", "292", "Gibraltar Pound", Some("£"), 2),
    ("GMD", "270", "Dalasi", Some("D"), 2),
    ("GNF", "324", "Guinean Franc", Some("FG"), 0),
    ("GTQ", "320", "Quetzal", Some("Q"), 2),
    ("GYD", "328", "Guyana Dollar", Some("$"), 2),
    ("HKD", "344", "Hong Kong Dollar", Some("$"), 2),
    ("HNL", "340", "Lempira", Some("L"), 2),
    ("HTG", "332", "Gourde", Some("G"), 2),
    ("HUF", "348", "Forint", Some("Ft"), 2),
    ("IDR", "360", "Rupiah", Some("Rp"), 2),
    ("ILS", "376", "New Israeli Sheqel", Some("₪"), 2),
    ("INR", "356", "Indian Rupee", Some("₹"), 2),
    ("IQD", "368", "Iraqi Dinar", Some("ع.د"), 3),
    ("IRR", "364", "Iranian Rial", Some("﷼"), 2),
    ("ISK", "352", "Iceland Krona", Some("kr"), 0),
    ("JMD", "388", "Jamaican Dollar", Some("$"), 2),
    ("JOD", "400", "Jordanian Dinar", Some("د.ا"), 3),
    ("JPY", "392", "Yen", Some("¥"), 0),
    ("KES", "404", "Kenyan Shilling", Some("KSh"), 2),
    ("KGS", "417", "Som", Some("с"), 2),
    ("KHR", "116", "Riel", Some("៛"), 2),
    ("KMF", "174", "Comorian Franc", Some("CF"), 0),
    ("KPW", "408", "North Korean Won", Some("₩"), 2),
    ("KRW", "410", "Won", Some("₩"), 0),
    ("KWD", "414", "Kuwaiti Dinar", Some("د.ك"), 3),
    ("KYD", "136", "Cayman Islands Dollar", Some("$"), 2),
    ("KZT", "398", "Tenge", Some("₸"), 2),
    ("LAK", "418", "Lao Kip", Some("₭"), 2),
    ("LBP", "422", "Lebanese Pound", Some("ل.ل"), 2),
    ("LKR", "144", "Sri Lanka Rupee", Some("Rs"), 2),
    ("LRD", "430", "Liberian Dollar", Some("$"), 2),
    ("LSL", "426", "Loti", Some("L"), 2),
    ("LYD", "434", "Libyan Dinar", Some("ل.د"), 3),
    ("MAD", "504", "Moroccan Dirham", Some("د.م."), 2),
    ("MDL", "498", "Moldovan Leu", Some("L"), 2),
    ("MGA", "969", "Malagasy Ariary", Some("Ar"), 2),
    ("MKD", "807", "Denar", Some("ден"), 2),
    ("MMK", "104", "Kyat", Some("K"), 2),
    ("MNT", "496", "Tugrik", Some("₮"), 2),
    ("MOP", "446", "Pataca", Some("MOP$"), 2),
    ("MRU", "929", "Ouguiya", Some("UM"), 2),
    ("MUR", "480", "Mauritius Rupee", Some("₨"), 2),
    ("MVR", "462", "Rufiyaa", Some("Rf"), 2),
    ("MWK", "454", "Malawi Kwacha", Some("MK"), 2),
    ("MXN", "484", "Mexican Peso", Some("$"), 2),
    ("MXV", "979", "Mexican Unidad de Inversion (UDI)", None, 2),
    ("MYR", "458", "Malaysian Ringgit", Some("RM"), 2),
    ("MZN", "943", "Mozambique Metical", Some("MT"), 2),
    ("NAD", "516", "Namibia Dollar", Some("$"), 2),
    ("NGN", "566", "Naira", Some("₦"), 2),
    ("NIO", "558", "Cordoba Oro", Some("C$"), 2),
    ("NOK", "578", "Norwegian Krone", Some("kr"), 2),
    ("NPR", "524", "Nepalese Rupee", Some("₨"), 2),
    ("NZD", "554", "New Zealand Dollar", Some("$"), 2),
    ("OMR", "512", "Rial Omani", Some("ر.ع."), 3),
    ("PAB", "590", "Balboa", Some("B/."), 2),
    ("PEN", "604", "Sol", Some("S/"), 2),
    ("PGK", "598", "Kina", Some("K"), 2),
    ("PHP", "608", "Philippine Peso", Some("₱"), 2),
    ("PKR", "586", "Pakistan Rupee", Some("₨"), 2),
    ("PLN", "985", "Zloty", Some("zł"), 2),
    ("PYG", "600", "Guarani", Some("₲"), 0),
    ("QAR", "634", "Qatari Rial", Some("ر.ق"), 2),
    ("RON", "946", "Romanian Leu", Some("lei"), 2),
    ("RSD", "941", "Serbian Dinar", Some("дин."), 2),
    ("RUB", "643", "Russian Ruble", Some("₽"), 2),
    ("RWF", "646", "Rwanda Franc", Some("FRw"), 0),
    ("SAR", "682", "Saudi Riyal", Some("ر.س"), 2),
    ("SBD", "090", "Solomon Islands Dollar", Some("$"), 2),
    ("SCR", "690", "Seychelles Rupee", Some("₨"), 2),
    ("SDG", "938", "Sudanese Pound", Some("ج.س."), 2),
    ("SEK", "752", "Swedish Krona", Some("kr"), 2),
    ("SGD", "702", "Singapore Dollar", Some("$"), 2),
    ("SHP", "654", "Saint Helena Pound", Some("£"), 2),
    ("SLE", "925", "Leone", Some("Le"), 2),
    ("SOS", "706", "Somali Shilling", Some("Sh"), 2),
    ("SRD", "968", "Surinam Dollar", Some("$"), 2),
    ("SSP", "728", "South Sudanese Pound", Some("£"), 2),
    ("STN", "930", "Dobra", Some("Db"), 2),
    ("SVC", "222", "El Salvador Colon", Some("₡"), 2),
    ("SYP", "760", "Syrian Pound", Some("£"), 2),
    ("SZL", "748", "Lilangeni", Some("E"), 2),
    ("THB", "764", "Baht", Some("฿"), 2),
    ("TJS", "972", "Somoni", Some("SM"), 2),
    ("TMT", "934", "Turkmenistan New Manat", Some("m"), 2),
    ("TND", "788", "Tunisian Dinar", Some("د.ت"), 3),
    ("TOP", "776", "Pa'anga", Some("T$"), 2),
    ("TRY", "949", "Turkish Lira", Some("₺"), 2),
    ("TTD", "780", "Trinidad and Tobago Dollar", Some("$"), 2),
    ("TWD", "901", "New Taiwan Dollar", Some("$"), 2),
    ("TZS", "834", "Tanzanian Shilling", Some("TSh"), 2),
    ("UAH", "980", "Hryvnia", Some("₴"), 2),
    ("UGX", "800", "Uganda Shilling", Some("USh"), 0),
    ("USD", "840", "US Dollar", Some("$"), 2),
    ("USN", "997", "US Dollar (Next day)", None, 2),
    ("UYI", "940", "Uruguay Peso en Unidades Indexadas (UI)", None, 0),
    ("UYU", "858", "Peso Uruguayo", Some("$"), 2),
    ("UYW", "927", "Unidad Previsional", None, 4),
    ("UZS", "860", "Uzbekistan Sum", Some("soʻm"), 2),
    ("VED", "926", "Bolívar Soberano", Some("Bs.D"), 2),
    ("VES", "928", "Bolívar Soberano", Some("Bs.S"), 2),
    ("VND", "704", "Dong", Some("₫"), 0),
    ("VUV", "548", "Vatu", Some("VT"), 0),
    ("WST", "882", "Tala", Some("T"), 2),
    ("XAF", "950", "CFA Franc BEAC", Some("FCFA"), 0),
    ("XCD", "951", "East Caribbean Dollar", Some("$"), 2),
    ("XCG", "532", "Caribbean Guilder", Some("Cg"), 2),
    ("XOF", "952", "CFA Franc BCEAO", Some("CFA"), 0),
    ("XPF", "953", "CFP Franc", Some("₣"), 0),
    ("YER", "886", "Yemeni Rial", Some("﷼"), 2),
    ("ZAR", "710", "Rand", Some("R"), 2),
    ("ZMW", "967", "Zambian Kwacha", Some("ZK"), 2),
    ("ZWG", "924", "Zimbabwe Gold", Some("ZiG"), 2),
];

/// Instruments that are not subdivided: no minor unit, no symbol.
const INSTRUMENTS: &[(&str, &str, &str)] = &[
    ("XAG", "961", "Silver"),
    ("XAU", "959", "Gold"),
    ("XBA", "955", "Bond Markets Unit European Composite Unit (EURCO)"),
    ("XBB", "956", "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    ("XBC", "957", "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    ("XBD", "958", "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    ("XDR", "960", "SDR (Special Drawing Right)"),
    ("XPD", "964", "Palladium"),
    ("XPT", "962", "Platinum"),
    ("XSU", "994", "Sucre"),
    ("XTS", "963", "Codes specifically reserved for testing purposes"),
    ("XUA", "965", "ADB Unit of Account"),
    ("XXX", "999", "No currency"),
];

/// Withdrawn codes: `(code, numeric3, name, symbol, minor units)`.
const WITHDRAWN: &[CurrencyRow] = &[
    // Replaced by XCG in 2025; shares numeric 532 with its successor.
    ("ANG", "532", "Netherlands Antillean Guilder", Some("ƒ"), 2),
    // Replaced by EUR on 2026-01-01.
    ("BGN", "975", "Bulgarian Lev", Some("лв"), 2),
];

fn currency_rows(
    table: &[CurrencyRow],
    status: Status,
) -> impl Iterator<Item = NewCurrency> + '_ {
    table
        .iter()
        .map(move |&(code, numeric3, name, symbol, minor_units)| NewCurrency {
            code: code.to_owned(),
            name: name.to_owned(),
            symbol: symbol.map(str::to_owned),
            minor_units: Some(minor_units),
            numeric3: numeric3.to_owned(),
            status,
        })
}

pub(super) fn currencies() -> Vec<NewCurrency> {
    let mut rows: Vec<NewCurrency> = currency_rows(CURRENCIES, Status::Active).collect();

    rows.extend(INSTRUMENTS.iter().map(|&(code, numeric3, name)| NewCurrency {
        code: code.to_owned(),
        name: name.to_owned(),
        symbol: None,
        minor_units: None,
        numeric3: numeric3.to_owned(),
        status: Status::Active,
    }));

    rows.extend(currency_rows(WITHDRAWN, Status::Deprecated));
    rows
}
