//! Commodity (HS, CPC) and industry (ISIC, NAICS) classifications.
//!
//! Every ISIC section and NAICS sector is present; deeper levels are sample
//! drill-down paths.

use reference_data_sdk::{NewClassificationCode, NewClassificationDomain};

/// `(code, name, description)`
type DomainRow = (&'static str, &'static str, &'static str);

/// `(code, parent, level, name)`
type CodeRow = (&'static str, Option<&'static str>, u8, &'static str);

const COMMODITY_DOMAINS: &[DomainRow] = &[
    (
        "hs",
        "Harmonized System",
        "WCO Harmonized Commodity Description and Coding System, 2022 edition",
    ),
    (
        "cpc",
        "Central Product Classification",
        "UN Central Product Classification, version 2.1",
    ),
];

const HS: &[CodeRow] = &[
    ("01", None, 1, "Live animals"),
    ("0101", Some("01"), 2, "Live horses, asses, mules and hinnies"),
    ("010121", Some("0101"), 3, "Horses, pure-bred breeding animals"),
    ("010129", Some("0101"), 3, "Horses, other than pure-bred breeding animals"),
    ("02", None, 1, "Meat and edible meat offal"),
    ("0201", Some("02"), 2, "Meat of bovine animals, fresh or chilled"),
    ("09", None, 1, "Coffee, tea, maté and spices"),
    ("0901", Some("09"), 2, "Coffee, whether or not roasted or decaffeinated"),
    ("090111", Some("0901"), 3, "Coffee, not roasted, not decaffeinated"),
    ("27", None, 1, "Mineral fuels, mineral oils and products of their distillation"),
    ("2709", Some("27"), 2, "Petroleum oils and oils obtained from bituminous minerals, crude"),
    ("270900", Some("2709"), 3, "Petroleum oils and oils obtained from bituminous minerals, crude"),
    ("71", None, 1, "Natural or cultured pearls, precious stones, precious metals"),
    ("7108", Some("71"), 2, "Gold, unwrought or in semi-manufactured forms, or in powder form"),
    ("710812", Some("7108"), 3, "Gold, non-monetary, in other unwrought forms"),
    ("84", None, 1, "Nuclear reactors, boilers, machinery and mechanical appliances"),
    ("8471", Some("84"), 2, "Automatic data processing machines and units thereof"),
    ("847130", Some("8471"), 3, "Portable automatic data processing machines, not more than 10 kg"),
    ("85", None, 1, "Electrical machinery and equipment and parts thereof"),
    ("8517", Some("85"), 2, "Telephone sets, including smartphones"),
    ("851713", Some("8517"), 3, "Smartphones"),
];

const CPC: &[CodeRow] = &[
    ("0", None, 1, "Agriculture, forestry and fishery products"),
    ("01", Some("0"), 2, "Products of agriculture, horticulture and market gardening"),
    ("011", Some("01"), 3, "Cereals"),
    ("0111", Some("011"), 4, "Wheat"),
    ("01111", Some("0111"), 5, "Wheat, seed"),
    ("01112", Some("0111"), 5, "Wheat, other"),
    ("3", None, 1, "Other transportable goods, except metal products, machinery and equipment"),
    ("33", Some("3"), 2, "Coke oven products; refined petroleum products; nuclear fuel"),
    ("8", None, 1, "Business and production services"),
    ("83", Some("8"), 2, "Other professional, technical and business services"),
];

const INDUSTRY_DOMAINS: &[DomainRow] = &[
    (
        "isic",
        "ISIC Rev.4",
        "International Standard Industrial Classification of All Economic Activities, Revision 4",
    ),
    (
        "naics",
        "NAICS 2022",
        "North American Industry Classification System, 2022 edition",
    ),
];

const ISIC: &[CodeRow] = &[
    ("A", None, 1, "Agriculture, forestry and fishing"),
    ("01", Some("A"), 2, "Crop and animal production, hunting and related service activities"),
    ("011", Some("01"), 3, "Growing of non-perennial crops"),
    ("0111", Some("011"), 4, "Growing of cereals (except rice), leguminous crops and oil seeds"),
    ("0112", Some("011"), 4, "Growing of rice"),
    ("B", None, 1, "Mining and quarrying"),
    ("06", Some("B"), 2, "Extraction of crude petroleum and natural gas"),
    ("061", Some("06"), 3, "Extraction of crude petroleum"),
    ("0610", Some("061"), 4, "Extraction of crude petroleum"),
    ("C", None, 1, "Manufacturing"),
    ("10", Some("C"), 2, "Manufacture of food products"),
    ("26", Some("C"), 2, "Manufacture of computer, electronic and optical products"),
    ("262", Some("26"), 3, "Manufacture of computers and peripheral equipment"),
    ("2620", Some("262"), 4, "Manufacture of computers and peripheral equipment"),
    ("D", None, 1, "Electricity, gas, steam and air conditioning supply"),
    ("E", None, 1, "Water supply; sewerage, waste management and remediation activities"),
    ("F", None, 1, "Construction"),
    ("G", None, 1, "Wholesale and retail trade; repair of motor vehicles and motorcycles"),
    ("H", None, 1, "Transportation and storage"),
    ("I", None, 1, "Accommodation and food service activities"),
    ("J", None, 1, "Information and communication"),
    ("62", Some("J"), 2, "Computer programming, consultancy and related activities"),
    ("620", Some("62"), 3, "Computer programming, consultancy and related activities"),
    ("6201", Some("620"), 4, "Computer programming activities"),
    ("6202", Some("620"), 4, "Computer consultancy and computer facilities management activities"),
    ("K", None, 1, "Financial and insurance activities"),
    ("64", Some("K"), 2, "Financial service activities, except insurance and pension funding"),
    ("641", Some("64"), 3, "Monetary intermediation"),
    ("6419", Some("641"), 4, "Other monetary intermediation"),
    ("L", None, 1, "Real estate activities"),
    ("M", None, 1, "Professional, scientific and technical activities"),
    ("N", None, 1, "Administrative and support service activities"),
    ("O", None, 1, "Public administration and defence; compulsory social security"),
    ("P", None, 1, "Education"),
    ("Q", None, 1, "Human health and social work activities"),
    ("R", None, 1, "Arts, entertainment and recreation"),
    ("S", None, 1, "Other service activities"),
    (
        "T",
        None,
        1,
        "Activities of households as employers; undifferentiated goods- and services-producing activities of households for own use",
    ),
    ("U", None, 1, "Activities of extraterritorial organizations and bodies"),
];

const NAICS: &[CodeRow] = &[
    ("11", None, 1, "Agriculture, Forestry, Fishing and Hunting"),
    ("111", Some("11"), 2, "Crop Production"),
    ("1111", Some("111"), 3, "Oilseed and Grain Farming"),
    ("11114", Some("1111"), 4, "Wheat Farming"),
    ("111140", Some("11114"), 5, "Wheat Farming"),
    ("21", None, 1, "Mining, Quarrying, and Oil and Gas Extraction"),
    ("211", Some("21"), 2, "Oil and Gas Extraction"),
    ("2111", Some("211"), 3, "Oil and Gas Extraction"),
    ("21112", Some("2111"), 4, "Crude Petroleum Extraction"),
    ("211120", Some("21112"), 5, "Crude Petroleum Extraction"),
    ("22", None, 1, "Utilities"),
    ("23", None, 1, "Construction"),
    ("31-33", None, 1, "Manufacturing"),
    ("42", None, 1, "Wholesale Trade"),
    ("44-45", None, 1, "Retail Trade"),
    ("48-49", None, 1, "Transportation and Warehousing"),
    ("51", None, 1, "Information"),
    ("513", Some("51"), 2, "Publishing Industries"),
    ("5132", Some("513"), 3, "Software Publishers"),
    ("51321", Some("5132"), 4, "Software Publishers"),
    ("513210", Some("51321"), 5, "Software Publishers"),
    ("52", None, 1, "Finance and Insurance"),
    ("522", Some("52"), 2, "Credit Intermediation and Related Activities"),
    ("5221", Some("522"), 3, "Depository Credit Intermediation"),
    ("52211", Some("5221"), 4, "Commercial Banking"),
    ("522110", Some("52211"), 5, "Commercial Banking"),
    ("53", None, 1, "Real Estate and Rental and Leasing"),
    ("54", None, 1, "Professional, Scientific, and Technical Services"),
    ("541", Some("54"), 2, "Professional, Scientific, and Technical Services"),
    ("5415", Some("541"), 3, "Computer Systems Design and Related Services"),
    ("54151", Some("5415"), 4, "Computer Systems Design and Related Services"),
    ("541511", Some("54151"), 5, "Custom Computer Programming Services"),
    ("55", None, 1, "Management of Companies and Enterprises"),
    ("56", None, 1, "Administrative and Support and Waste Management and Remediation Services"),
    ("61", None, 1, "Educational Services"),
    ("62", None, 1, "Health Care and Social Assistance"),
    ("71", None, 1, "Arts, Entertainment, and Recreation"),
    ("72", None, 1, "Accommodation and Food Services"),
    ("81", None, 1, "Other Services (except Public Administration)"),
    ("92", None, 1, "Public Administration"),
];

fn domains(rows: &[DomainRow]) -> Vec<NewClassificationDomain> {
    rows.iter()
        .map(|&(code, name, description)| NewClassificationDomain {
            code: code.to_owned(),
            name: name.to_owned(),
            description: Some(description.to_owned()),
        })
        .collect()
}

fn codes(domain: &str, rows: &[CodeRow]) -> Vec<NewClassificationCode> {
    rows.iter()
        .map(|&(code, parent, level, name)| NewClassificationCode {
            domain: domain.to_owned(),
            code: code.to_owned(),
            name: name.to_owned(),
            description: None,
            parent_code: parent.map(str::to_owned),
            level,
        })
        .collect()
}

pub(super) fn commodity_domains() -> Vec<NewClassificationDomain> {
    domains(COMMODITY_DOMAINS)
}

pub(super) fn commodity_codes() -> Vec<NewClassificationCode> {
    let mut rows = codes("hs", HS);
    rows.extend(codes("cpc", CPC));
    rows
}

pub(super) fn industry_domains() -> Vec<NewClassificationDomain> {
    domains(INDUSTRY_DOMAINS)
}

pub(super) fn industry_codes() -> Vec<NewClassificationCode> {
    let mut rows = codes("isic", ISIC);
    rows.extend(codes("naics", NAICS));
    rows
}
