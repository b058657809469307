//! ISO 3166-1 countries and ISO 3166-2 subdivisions.

use reference_data_sdk::{NewCountry, NewStateRegion, Status};
use serde_json::json;

/// `(code2, code3, numeric3, name, region, subregion, calling code)`; empty
/// strings stand for "none" (Antarctica has no M49 region, uninhabited
/// territories have no calling code).
type CountryRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const COUNTRIES: &[CountryRow] = &[
    ("AD", "AND", "020", "Andorra", "Europe", "Southern Europe", "+376"),
    ("AE", "ARE", "784", "United Arab Emirates", "Asia", "Western Asia", "+971"),
    ("AF", "AFG", "004", "Afghanistan", "Asia", "Southern Asia", "+93"),
    ("AG", "ATG", "028", "Antigua and Barbuda", "Americas", "Caribbean", "+1"),
    ("AI", "AIA", "660", "Anguilla", "Americas", "Caribbean", "+1"),
    ("AL", "ALB", "008", "Albania", "Europe", "Southern Europe", "+355"),
    ("AM", "ARM", "051", "Armenia", "Asia", "Western Asia", "+374"),
    ("AO", "AGO", "024", "Angola", "Africa", "Sub-Saharan Africa", "+244"),
    ("AQ", "ATA", "010", "Antarctica", "", "", "+672"),
    ("AR", "ARG", "032", "Argentina", "Americas", "South America", "+54"),
    ("AS", "ASM", "016", "American Samoa", "Oceania", "Polynesia", "+1"),
    ("AT", "AUT", "040", "Austria", "Europe", "Western Europe", "+43"),
    ("AU", "AUS", "036", "Australia", "Oceania", "Australia and New Zealand", "+61"),
    ("AW", "ABW", "533", "Aruba", "Americas", "Caribbean", "+297"),
    ("AX", "ALA", "248", "Åland Islands", "Europe", "Northern Europe", "+358"),
    ("AZ", "AZE", "031", "Azerbaijan", "Asia", "Western Asia", "+994"),
    ("BA", "BIH", "070", "Bosnia and Herzegovina", "Europe", "Southern Europe", "+387"),
    ("BB", "BRB", "052", "Barbados", "Americas", "Caribbean", "+1"),
    ("BD", "BGD", "050", "Bangladesh", "Asia", "Southern Asia", "+880"),
    ("BE", "BEL", "056", "Belgium", "Europe", "Western Europe", "+32"),
    ("BF", "BFA", "854", "Burkina Faso", "Africa", "Sub-Saharan Africa", "+226"),
    ("BG", "BGR", "100", "Bulgaria", "Europe", "Eastern Europe", "+359"),
    ("BH", "BHR", "048", "Bahrain", "Asia", "Western Asia", "+973"),
    ("BI", "BDI", "108", "Burundi", "Africa", "Sub-Saharan Africa", "+257"),
    ("BJ", "BEN", "204", "Benin", "Africa", "Sub-Saharan Africa", "+229"),
    ("BL", "BLM", "652", "Saint Barthélemy", "Americas", "Caribbean", "+590"),
    ("BM", "BMU", "060", "Bermuda", "Americas", "Northern America", "+1"),
    ("BN", "BRN", "096", "Brunei Darussalam", "Asia", "South-eastern Asia", "+673"),
    ("BO", "BOL", "068", "Bolivia, Plurinational State of", "Americas", "South America", "+591"),
    ("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba", "Americas", "Caribbean", "+599"),
    ("BR", "BRA", "076", "Brazil", "Americas", "South America", "+55"),
    ("BS", "BHS", "044", "Bahamas", "Americas", "Caribbean", "+1"),
    ("BT", "BTN", "064", "Bhutan", "Asia", "Southern Asia", "+975"),
    ("BV", "BVT", "074", "Bouvet Island", "Americas", "South America", ""),
    ("BW", "BWA", "072", "Botswana", "Africa", "Sub-Saharan Africa", "+267"),
    ("BY", "BLR", "112", "Belarus", "Europe", "Eastern Europe", "+375"),
    ("BZ", "BLZ", "084", "Belize", "Americas", "Central America", "+501"),
    ("CA", "CAN", "124", "Canada", "Americas", "Northern America", "+1"),
    ("CC", "CCK", "166", "Cocos (Keeling) Islands", "Oceania", "Australia and New Zealand", "+61"),
    (
        "CD",
        "COD",
        "180",
        "Congo, Democratic Republic of the",
        "Africa",
        "Sub-Saharan Africa",
        "+243",
    ),
    ("CF", "CAF", "140", "Central African Republic", "Africa", "Sub-Saharan Africa", "+236"),
    ("CG", "COG", "178", "Congo", "Africa", "Sub-Saharan Africa", "+242"),
    ("CH", "CHE", "756", "Switzerland", "Europe", "Western Europe", "+41"),
    ("CI", "CIV", "384", "Côte d'Ivoire", "Africa", "Sub-Saharan Africa", "+225"),
    ("CK", "COK", "184", "Cook Islands", "Oceania", "Polynesia", "+682"),
    ("CL", "CHL", "152", "Chile", "Americas", "South America", "+56"),
    ("CM", "CMR", "120", "Cameroon", "Africa", "Sub-Saharan Africa", "+237"),
    ("CN", "CHN", "156", "China", "Asia", "Eastern Asia", "+86"),
    ("CO", "COL", "170", "Colombia", "Americas", "South America", "+57"),
    ("CR", "CRI", "188", "Costa Rica", "Americas", "Central America", "+506"),
    ("CU", "CUB", "192", "Cuba", "Americas", "Caribbean", "+53"),
    ("CV", "CPV", "132", "Cabo Verde", "Africa", "Sub-Saharan Africa", "+238"),
    ("CW", "CUW", "531", "Curaçao", "Americas", "Caribbean", "+599"),
    ("CX", "CXR", "162", "Christmas Island", "Oceania", "Australia and New Zealand", "+61"),
    ("CY", "CYP", "196", "Cyprus", "Asia", "Western Asia", "+357"),
    ("CZ", "CZE", "203", "Czechia", "Europe", "Eastern Europe", "+420"),
    ("DE", "DEU", "276", "Germany", "Europe", "Western Europe", "+49"),
    ("DJ", "DJI", "262", "Djibouti", "Africa", "Sub-Saharan Africa", "+253"),
    ("DK", "DNK", "208", "Denmark", "Europe", "Northern Europe", "+45"),
    ("DM", "DMA", "212", "Dominica", "Americas", "Caribbean", "+1"),
    ("DO", "DOM", "214", "Dominican Republic", "Americas", "Caribbean", "+1"),
    ("DZ", "DZA", "012", "Algeria", "Africa", "Northern Africa", "+213"),
    ("EC", "ECU", "218", "Ecuador", "Americas", "South America", "+593"),
    ("EE", "EST", "233", "Estonia", "Europe", "Northern Europe", "+372"),
    ("EG", "EGY", "818", "Egypt", "Africa", "Northern Africa", "+20"),
    ("EH", "ESH", "732", "Western Sahara", "Africa", "Northern Africa", "+212"),
    ("ER", "ERI", "232", "Eritrea", "Africa", "Sub-Saharan Africa", "+291"),
    ("ES", "ESP", "724", "Spain", "Europe", "Southern Europe", "+34"),
    ("ET", "ETH", "231", "Ethiopia", "Africa", "Sub-Saharan Africa", "+251"),
    ("FI", "FIN", "246", "Finland", "Europe", "Northern Europe", "+358"),
    ("FJ", "FJI", "242", "Fiji", "Oceania", "Melanesia", "+679"),
    ("FK", "FLK", "238", "Falkland Islands (Malvinas)", "Americas", "South America", "+500"),
    ("FM", "FSM", "583", "Micronesia, Federated States of", "Oceania", "Micronesia", "+691"),
    ("FO", "FRO", "234", "Faroe Islands", "Europe", "Northern Europe", "+298"),
    ("FR", "FRA", "250", "France", "Europe", "Western Europe", "+33"),
    ("GA", "GAB", "266", "Gabon", "Africa", "Sub-Saharan Africa", "+241"),
    ("GB", "GBR", "826", "United Kingdom", "Europe", "Northern Europe", "+44"),
    ("GD", "GRD", "308", "Grenada", "Americas", "Caribbean", "+1"),
    ("GE", "GEO", "268", "Georgia", "Asia", "Western Asia", "+995"),
    ("GF", "GUF", "254", "French Guiana", "Americas", "South America", "+594"),
    ("GG", "GGY", "831", "Guernsey", "Europe", "Northern Europe", "+44"),
    ("GH", "GHA", "288", "Ghana", "Africa", "Sub-Saharan Africa", "+233"),
    ("GI", "GIB", "292", "Gibraltar", "Europe", "Southern Europe", "+350"),
    ("GL", "GRL", "304", "Greenland", "Americas", "Northern America", "+299"),
    ("GM", "GMB", "270", "Gambia", "Africa", "Sub-Saharan Africa", "+220"),
    ("GN", "GIN", "324", "Guinea", "Africa", "Sub-Saharan Africa", "+224"),
    ("GP", "GLP", "312", "Guadeloupe", "Americas", "Caribbean", "+590"),
    ("GQ", "GNQ", "226", "Equatorial Guinea", "Africa", "Sub-Saharan Africa", "+240"),
    ("GR", "GRC", "300", "Greece", "Europe", "Southern Europe", "+30"),
    (
        "GS",
        "SGS",
        "239",
        "South Georgia and the South Sandwich Islands",
        "Americas",
        "South America",
        "+500",
    ),
    ("GT", "GTM", "320", "Guatemala", "Americas", "Central America", "+502"),
    ("GU", "GUM", "316", "Guam", "Oceania", "Micronesia", "+1"),
    ("GW", "GNB", "624", "Guinea-Bissau", "Africa", "Sub-Saharan Africa", "+245"),
    ("GY", "GUY", "328", "Guyana", "Americas", "South America", "+592"),
    ("HK", "HKG", "344", "Hong Kong", "Asia", "Eastern Asia", "+852"),
    (
        "HM",
        "HMD",
        "334",
        "Heard Island and McDonald Islands",
        "Oceania",
        "Australia and New Zealand",
        "",
    ),
    ("HN", "HND", "340", "Honduras", "Americas", "Central America", "+504"),
    ("HR", "HRV", "191", "Croatia", "Europe", "Southern Europe", "+385"),
    ("HT", "HTI", "332", "Haiti", "Americas", "Caribbean", "+509"),
    ("HU", "HUN", "348", "Hungary", "Europe", "Eastern Europe", "+36"),
    ("ID", "IDN", "360", "Indonesia", "Asia", "South-eastern Asia", "+62"),
    ("IE", "IRL", "372", "Ireland", "Europe", "Northern Europe", "+353"),
    ("IL", "ISR", "376", "Israel", "Asia", "Western Asia", "+972"),
    ("IM", "IMN", "833", "Isle of Man", "Europe", "Northern Europe", "+44"),
    ("IN", "IND", "356", "India", "Asia", "Southern Asia", "+91"),
    ("IO", "IOT", "086", "British Indian Ocean Territory", "Africa", "Sub-Saharan Africa", "+246"),
    ("IQ", "IRQ", "368", "Iraq", "Asia", "Western Asia", "+964"),
    ("IR", "IRN", "364", "Iran", "Asia", "Southern Asia", "+98"),
    ("IS", "ISL", "352", "Iceland", "Europe", "Northern Europe", "+354"),
    ("IT", "ITA", "380", "Italy", "Europe", "Southern Europe", "+39"),
    ("JE", "JEY", "832", "Jersey", "Europe", "Northern Europe", "+44"),
    ("JM", "JAM", "388", "Jamaica", "Americas", "Caribbean", "+1"),
    ("JO", "JOR", "400", "Jordan", "Asia", "Western Asia", "+962"),
    ("JP", "JPN", "392", "Japan", "Asia", "Eastern Asia", "+81"),
    ("KE", "KEN", "404", "Kenya", "Africa", "Sub-Saharan Africa", "+254"),
    ("KG", "KGZ", "417", "Kyrgyzstan", "Asia", "Central Asia", "+996"),
    ("KH", "KHM", "116", "Cambodia", "Asia", "South-eastern Asia", "+855"),
    ("KI", "KIR", "296", "Kiribati", "Oceania", "Micronesia", "+686"),
    ("KM", "COM", "174", "Comoros", "Africa", "Sub-Saharan Africa", "+269"),
    ("KN", "KNA", "659", "Saint Kitts and Nevis", "Americas", "Caribbean", "+1"),
    ("KP", "PRK", "408", "Korea, Democratic People's Republic of", "Asia", "Eastern Asia", "+850"),
    ("KR", "KOR", "410", "Korea, Republic of", "Asia", "Eastern Asia", "+82"),
    ("KW", "KWT", "414", "Kuwait", "Asia", "Western Asia", "+965"),
    ("KY", "CYM", "136", "Cayman Islands", "Americas", "Caribbean", "+1"),
    ("KZ", "KAZ", "398", "Kazakhstan", "Asia", "Central Asia", "+7"),
    ("LA", "LAO", "418", "Lao People's Democratic Republic", "Asia", "South-eastern Asia", "+856"),
    ("LB", "LBN", "422", "Lebanon", "Asia", "Western Asia", "+961"),
    ("LC", "LCA", "662", "Saint Lucia", "Americas", "Caribbean", "+1"),
    ("LI", "LIE", "438", "Liechtenstein", "Europe", "Western Europe", "+423"),
    ("LK", "LKA", "144", "Sri Lanka", "Asia", "Southern Asia", "+94"),
    ("LR", "LBR", "430", "Liberia", "Africa", "Sub-Saharan Africa", "+231"),
    ("LS", "LSO", "426", "Lesotho", "Africa", "Sub-Saharan Africa", "+266"),
    ("LT", "LTU", "440", "Lithuania", "Europe", "Northern Europe", "+370"),
    ("LU", "LUX", "442", "Luxembourg", "Europe", "Western Europe", "+352"),
    ("LV", "LVA", "428", "Latvia", "Europe", "Northern Europe", "+371"),
    ("LY", "LBY", "434", "Libya", "Africa", "Northern Africa", "+218"),
    ("MA", "MAR", "504", "Morocco", "Africa", "Northern Africa", "+212"),
    ("MC", "MCO", "492", "Monaco", "Europe", "Western Europe", "+377"),
    ("MD", "MDA", "498", "Moldova, Republic of", "Europe", "Eastern Europe", "+373"),
    ("ME", "MNE", "499", "Montenegro", "Europe", "Southern Europe", "+382"),
    ("MF", "MAF", "663", "Saint Martin (French part)", "Americas", "Caribbean", "+590"),
    ("MG", "MDG", "450", "Madagascar", "Africa", "Sub-Saharan Africa", "+261"),
    ("MH", "MHL", "584", "Marshall Islands", "Oceania", "Micronesia", "+692"),
    ("MK", "MKD", "807", "North Macedonia", "Europe", "Southern Europe", "+389"),
    ("ML", "MLI", "466", "Mali", "Africa", "Sub-Saharan Africa", "+223"),
    ("MM", "MMR", "104", "Myanmar", "Asia", "South-eastern Asia", "+95"),
    ("MN", "MNG", "496", "Mongolia", "Asia", "Eastern Asia", "+976"),
    ("MO", "MAC", "446", "Macao", "Asia", "Eastern Asia", "+853"),
    ("MP", "MNP", "580", "Northern Mariana Islands", "Oceania", "Micronesia", "+1"),
    ("MQ", "MTQ", "474", "Martinique", "Americas", "Caribbean", "+596"),
    ("MR", "MRT", "478", "Mauritania", "Africa", "Sub-Saharan Africa", "+222"),
    ("MS", "MSR", "500", "Montserrat", "Americas", "Caribbean", "+1"),
    ("MT", "MLT", "470", "Malta", "Europe", "Southern Europe", "+356"),
    ("MU", "MUS", "480", "Mauritius", "Africa", "Sub-Saharan Africa", "+230"),
    ("MV", "MDV", "462", "Maldives", "Asia", "Southern Asia", "+960"),
    ("MW", "MWI", "454", "Malawi", "Africa", "Sub-Saharan Africa", "+265"),
    ("MX", "MEX", "484", "Mexico", "Americas", "Central America", "+52"),
    ("MY", "MYS", "458", "Malaysia", "Asia", "South-eastern Asia", "+60"),
    ("MZ", "MOZ", "508", "Mozambique", "Africa", "Sub-Saharan Africa", "+258"),
    ("NA", "NAM", "516", "Namibia", "Africa", "Sub-Saharan Africa", "+264"),
    ("NC", "NCL", "540", "New Caledonia", "Oceania", "Melanesia", "+687"),
    ("NE", "NER", "562", "Niger", "Africa", "Sub-Saharan Africa", "+227"),
    ("NF", "NFK", "574", "Norfolk Island", "Oceania", "Australia and New Zealand", "+672"),
    ("NG", "NGA", "566", "Nigeria", "Africa", "Sub-Saharan Africa", "+234"),
    ("NI", "NIC", "558", "Nicaragua", "Americas", "Central America", "+505"),
    ("NL", "NLD", "528", "Netherlands", "Europe", "Western Europe", "+31"),
    ("NO", "NOR", "578", "Norway", "Europe", "Northern Europe", "+47"),
    ("NP", "NPL", "524", "Nepal", "Asia", "Southern Asia", "+977"),
    ("NR", "NRU", "520", "Nauru", "Oceania", "Micronesia", "+674"),
    ("NU", "NIU", "570", "Niue", "Oceania", "Polynesia", "+683"),
    ("NZ", "NZL", "554", "New Zealand", "Oceania", "Australia and New Zealand", "+64"),
    ("OM", "OMN", "512", "Oman", "Asia", "Western Asia", "+968"),
    ("PA", "PAN", "591", "Panama", "Americas", "Central America", "+507"),
    ("PE", "PER", "604", "Peru", "Americas", "South America", "+51"),
    ("PF", "PYF", "258", "French Polynesia", "Oceania", "Polynesia", "+689"),
    ("PG", "PNG", "598", "Papua New Guinea", "Oceania", "Melanesia", "+675"),
    ("PH", "PHL", "608", "Philippines", "Asia", "South-eastern Asia", "+63"),
    ("PK", "PAK", "586", "Pakistan", "Asia", "Southern Asia", "+92"),
    ("PL", "POL", "616", "Poland", "Europe", "Eastern Europe", "+48"),
    ("PM", "SPM", "666", "Saint Pierre and Miquelon", "Americas", "Northern America", "+508"),
    ("PN", "PCN", "612", "Pitcairn", "Oceania", "Polynesia", "+64"),
    ("PR", "PRI", "630", "Puerto Rico", "Americas", "Caribbean", "+1"),
    ("PS", "PSE", "275", "Palestine, State of", "Asia", "Western Asia", "+970"),
    ("PT", "PRT", "620", "Portugal", "Europe", "Southern Europe", "+351"),
    ("PW", "PLW", "585", "Palau", "Oceania", "Micronesia", "+680"),
    ("PY", "PRY", "600", "Paraguay", "Americas", "South America", "+595"),
    ("QA", "QAT", "634", "Qatar", "Asia", "Western Asia", "+974"),
    ("RE", "REU", "638", "Réunion", "Africa", "Sub-Saharan Africa", "+262"),
    ("RO", "ROU", "642", "Romania", "Europe", "Eastern Europe", "+40"),
    ("RS", "SRB", "688", "Serbia", "Europe", "Southern Europe", "+381"),
    ("RU", "RUS", "643", "Russian Federation", "Europe", "Eastern Europe", "+7"),
    ("RW", "RWA", "646", "Rwanda", "Africa", "Sub-Saharan Africa", "+250"),
    ("SA", "SAU", "682", "Saudi Arabia", "Asia", "Western Asia", "+966"),
    ("SB", "SLB", "090", "Solomon Islands", "Oceania", "Melanesia", "+677"),
    ("SC", "SYC", "690", "Seychelles", "Africa", "Sub-Saharan Africa", "+248"),
    ("SD", "SDN", "729", "Sudan", "Africa", "Northern Africa", "+249"),
    ("SE", "SWE", "752", "Sweden", "Europe", "Northern Europe", "+46"),
    ("SG", "SGP", "702", "Singapore", "Asia", "South-eastern Asia", "+65"),
    (
        "SH",
        "SHN",
        "654",
        "Saint Helena, Ascension and Tristan da Cunha",
        "Africa",
        "Sub-Saharan Africa",
        "+290",
    ),
    ("SI", "SVN", "705", "Slovenia", "Europe", "Southern Europe", "+386"),
    ("SJ", "SJM", "744", "Svalbard and Jan Mayen", "Europe", "Northern Europe", "+47"),
    ("SK", "SVK", "703", "Slovakia", "Europe", "Eastern Europe", "+421"),
    ("SL", "SLE", "694", "Sierra Leone", "Africa", "Sub-Saharan Africa", "+232"),
    ("SM", "SMR", "674", "San Marino", "Europe", "Southern Europe", "+378"),
    ("SN", "SEN", "686", "Senegal", "Africa", "Sub-Saharan Africa", "+221"),
    ("SO", "SOM", "706", "Somalia", "Africa", "Sub-Saharan Africa", "+252"),
    ("SR", "SUR", "740", "Suriname", "Americas", "South America", "+597"),
    ("SS", "SSD", "728", "South Sudan", "Africa", "Sub-Saharan Africa", "+211"),
    ("ST", "STP", "678", "Sao Tome and Principe", "Africa", "Sub-Saharan Africa", "+239"),
    ("SV", "SLV", "222", "El Salvador", "Americas", "Central America", "+503"),
    ("SX", "SXM", "534", "Sint Maarten (Dutch part)", "Americas", "Caribbean", "+1"),
    ("SY", "SYR", "760", "Syrian Arab Republic", "Asia", "Western Asia", "+963"),
    ("SZ", "SWZ", "748", "Eswatini", "Africa", "Sub-Saharan Africa", "+268"),
    ("TC", "TCA", "796", "Turks and Caicos Islands", "Americas", "Caribbean", "+1"),
    ("TD", "TCD", "148", "Chad", "Africa", "Sub-Saharan Africa", "+235"),
    ("TF", "ATF", "260", "French Southern Territories", "Africa", "Sub-Saharan Africa", "+262"),
    ("TG", "TGO", "768", "Togo", "Africa", "Sub-Saharan Africa", "+228"),
    ("TH", "THA", "764", "Thailand", "Asia", "South-eastern Asia", "+66"),
    ("TJ", "TJK", "762", "Tajikistan", "Asia", "Central Asia", "+992"),
    ("TK", "TKL", "772", "Tokelau", "Oceania", "Polynesia", "+690"),
    ("TL", "TLS", "626", "Timor-Leste", "Asia", "South-eastern Asia", "+670"),
    ("TM", "TKM", "795", "Turkmenistan", "Asia", "Central Asia", "+993"),
    ("TN", "TUN", "788", "Tunisia", "Africa", "Northern Africa", "+216"),
    ("TO", "TON", "776", "Tonga", "Oceania", "Polynesia", "+676"),
    ("TR", "TUR", "792", "Türkiye", "Asia", "Western Asia", "+90"),
    ("TT", "TTO", "780", "Trinidad and Tobago", "Americas", "Caribbean", "+1"),
    ("TV", "TUV", "798", "Tuvalu", "Oceania", "Polynesia", "+688"),
    ("TW", "TWN", "158", "Taiwan", "Asia", "Eastern Asia", "+886"),
    ("TZ", "TZA", "834", "Tanzania, United Republic of", "Africa", "Sub-Saharan Africa", "+255"),
    ("UA", "UKR", "804", "Ukraine", "Europe", "Eastern Europe", "+380"),
    ("UG", "UGA", "800", "Uganda", "Africa", "Sub-Saharan Africa", "+256"),
    ("UM", "UMI", "581", "United States Minor Outlying Islands", "Oceania", "Micronesia", "+1"),
    ("US", "USA", "840", "United States of America", "Americas", "Northern America", "+1"),
    ("UY", "URY", "858", "Uruguay", "Americas", "South America", "+598"),
    ("UZ", "UZB", "860", "Uzbekistan", "Asia", "Central Asia", "+998"),
    ("VA", "VAT", "336", "Holy See", "Europe", "Southern Europe", "+39"),
    ("VC", "VCT", "670", "Saint Vincent and the Grenadines", "Americas", "Caribbean", "+1"),
    ("VE", "VEN", "862", "Venezuela, Bolivarian Republic of", "Americas", "South America", "+58"),
    ("VG", "VGB", "092", "Virgin Islands (British)", "Americas", "Caribbean", "+1"),
    ("VI", "VIR", "850", "Virgin Islands (U.S.)", "Americas", "Caribbean", "+1"),
    ("VN", "VNM", "704", "Viet Nam", "Asia", "South-eastern Asia", "+84"),
    ("VU", "VUT", "548", "Vanuatu", "Oceania", "Melanesia", "+678"),
    ("WF", "WLF", "876", "Wallis and Futuna", "Oceania", "Polynesia", "+681"),
    ("WS", "WSM", "882", "Samoa", "Oceania", "Polynesia", "+685"),
    ("YE", "YEM", "887", "Yemen", "Asia", "Western Asia", "+967"),
    ("YT", "MYT", "175", "Mayotte", "Africa", "Sub-Saharan Africa", "+262"),
    ("ZA", "ZAF", "710", "South Africa", "Africa", "Sub-Saharan Africa", "+27"),
    ("ZM", "ZMB", "894", "Zambia", "Africa", "Sub-Saharan Africa", "+260"),
    ("ZW", "ZWE", "716", "Zimbabwe", "Africa", "Sub-Saharan Africa", "+263"),
];

/// Official names where they differ from the short name.
const OFFICIAL_NAMES: &[(&str, &str)] = &[
    ("AE", "United Arab Emirates"),
    ("DE", "Federal Republic of Germany"),
    ("FR", "French Republic"),
    ("GB", "United Kingdom of Great Britain and Northern Ireland"),
    ("SA", "Kingdom of Saudi Arabia"),
    ("US", "United States of America"),
];

pub(super) fn countries() -> Vec<NewCountry> {
    let mut rows: Vec<NewCountry> = COUNTRIES
        .iter()
        .map(
            |&(code2, code3, numeric3, name, region, subregion, calling_code)| NewCountry {
                code2: code2.to_owned(),
                code3: code3.to_owned(),
                numeric3: numeric3.to_owned(),
                name: name.to_owned(),
                official_name: OFFICIAL_NAMES
                    .iter()
                    .find(|(c, _)| *c == code2)
                    .map(|(_, n)| (*n).to_owned()),
                region: non_empty(region),
                subregion: non_empty(subregion),
                status: Status::Active,
                metadata: non_empty(calling_code)
                    .map(|calling_code| json!({ "calling_code": calling_code })),
            },
        )
        .collect();

    // Dissolved in 2010; kept so historical references still resolve.
    rows.push(NewCountry {
        code2: "AN".to_owned(),
        code3: "ANT".to_owned(),
        numeric3: "530".to_owned(),
        name: "Netherlands Antilles".to_owned(),
        official_name: None,
        region: Some("Americas".to_owned()),
        subregion: Some("Caribbean".to_owned()),
        status: Status::Deprecated,
        metadata: Some(json!({ "calling_code": "+599", "successors": ["CW", "SX", "BQ"] })),
    });
    rows
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// `(code, country, parent, name, subdivision type)`
type SubdivisionRow = (
    &'static str,
    &'static str,
    Option<&'static str>,
    &'static str,
    &'static str,
);

const SUBDIVISIONS: &[SubdivisionRow] = &[
    ("SA-01", "SA", None, "Riyadh", "region"),
    ("SA-02", "SA", None, "Makkah", "region"),
    ("SA-03", "SA", None, "Al Madinah", "region"),
    ("SA-04", "SA", None, "Eastern Province", "region"),
    ("SA-05", "SA", None, "Al-Qassim", "region"),
    ("SA-06", "SA", None, "Ha'il", "region"),
    ("SA-07", "SA", None, "Tabuk", "region"),
    ("SA-08", "SA", None, "Northern Borders", "region"),
    ("SA-09", "SA", None, "Jazan", "region"),
    ("SA-10", "SA", None, "Najran", "region"),
    ("SA-11", "SA", None, "Al-Bahah", "region"),
    ("SA-12", "SA", None, "Al-Jawf", "region"),
    ("SA-14", "SA", None, "Asir", "region"),
    ("AE-AZ", "AE", None, "Abu Dhabi", "emirate"),
    ("AE-AJ", "AE", None, "Ajman", "emirate"),
    ("AE-DU", "AE", None, "Dubai", "emirate"),
    ("AE-FU", "AE", None, "Fujairah", "emirate"),
    ("AE-RK", "AE", None, "Ras al-Khaimah", "emirate"),
    ("AE-SH", "AE", None, "Sharjah", "emirate"),
    ("AE-UQ", "AE", None, "Umm al-Quwain", "emirate"),
    ("US-CA", "US", None, "California", "state"),
    ("US-DC", "US", None, "District of Columbia", "district"),
    ("US-FL", "US", None, "Florida", "state"),
    ("US-IL", "US", None, "Illinois", "state"),
    ("US-MA", "US", None, "Massachusetts", "state"),
    ("US-NY", "US", None, "New York", "state"),
    ("US-TX", "US", None, "Texas", "state"),
    ("US-WA", "US", None, "Washington", "state"),
    ("DE-BE", "DE", None, "Berlin", "land"),
    ("DE-BW", "DE", None, "Baden-Württemberg", "land"),
    ("DE-BY", "DE", None, "Bavaria", "land"),
    ("DE-HE", "DE", None, "Hesse", "land"),
    ("DE-HH", "DE", None, "Hamburg", "land"),
    ("DE-NW", "DE", None, "North Rhine-Westphalia", "land"),
    ("GB-ENG", "GB", None, "England", "country"),
    ("GB-NIR", "GB", None, "Northern Ireland", "province"),
    ("GB-SCT", "GB", None, "Scotland", "country"),
    ("GB-WLS", "GB", None, "Wales", "country"),
    ("GB-LND", "GB", Some("GB-ENG"), "City of London", "city corporation"),
    ("GB-MAN", "GB", Some("GB-ENG"), "Manchester", "metropolitan district"),
    ("GB-EDH", "GB", Some("GB-SCT"), "Edinburgh, City of", "council area"),
    ("GB-CRF", "GB", Some("GB-WLS"), "Cardiff", "unitary authority"),
    ("GB-BFS", "GB", Some("GB-NIR"), "Belfast", "district"),
];

pub(super) fn state_regions() -> Vec<NewStateRegion> {
    SUBDIVISIONS
        .iter()
        .map(|&(code, country, parent, name, kind)| NewStateRegion {
            code: code.to_owned(),
            country_code2: country.to_owned(),
            parent_code: parent.map(str::to_owned),
            name: name.to_owned(),
            subdivision_type: Some(kind.to_owned()),
        })
        .collect()
}
