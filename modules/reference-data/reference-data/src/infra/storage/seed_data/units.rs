//! UN/ECE Recommendation 20 units of measure.

use reference_data_sdk::{NewUom, QuantityType};

/// `(code, name, symbol, quantity type)`
type UnitRow = (&'static str, &'static str, Option<&'static str>, QuantityType);

const UNITS: &[UnitRow] = &[
    ("KGM", "kilogram", Some("kg"), QuantityType::Mass),
    ("GRM", "gram", Some("g"), QuantityType::Mass),
    ("MGM", "milligram", Some("mg"), QuantityType::Mass),
    ("TNE", "tonne (metric ton)", Some("t"), QuantityType::Mass),
    ("LBR", "pound", Some("lb"), QuantityType::Mass),
    ("ONZ", "ounce (avoirdupois)", Some("oz"), QuantityType::Mass),
    ("APZ", "troy ounce", Some("tr oz"), QuantityType::Mass),
    ("MTR", "metre", Some("m"), QuantityType::Length),
    ("CMT", "centimetre", Some("cm"), QuantityType::Length),
    ("MMT", "millimetre", Some("mm"), QuantityType::Length),
    ("KMT", "kilometre", Some("km"), QuantityType::Length),
    ("INH", "inch", Some("in"), QuantityType::Length),
    ("FOT", "foot", Some("ft"), QuantityType::Length),
    ("YRD", "yard", Some("yd"), QuantityType::Length),
    ("SMI", "mile (statute mile)", Some("mi"), QuantityType::Length),
    ("LTR", "litre", Some("l"), QuantityType::Volume),
    ("MLT", "millilitre", Some("ml"), QuantityType::Volume),
    ("MTQ", "cubic metre", Some("m³"), QuantityType::Volume),
    ("GLL", "gallon (US)", Some("gal (US)"), QuantityType::Volume),
    ("BLL", "barrel (US)", Some("barrel (US)"), QuantityType::Volume),
    ("MTK", "square metre", Some("m²"), QuantityType::Area),
    ("KMK", "square kilometre", Some("km²"), QuantityType::Area),
    ("HAR", "hectare", Some("ha"), QuantityType::Area),
    ("ACR", "acre", Some("acre"), QuantityType::Area),
    ("FTK", "square foot", Some("ft²"), QuantityType::Area),
    ("SEC", "second [unit of time]", Some("s"), QuantityType::Time),
    ("MIN", "minute [unit of time]", Some("min"), QuantityType::Time),
    ("HUR", "hour", Some("h"), QuantityType::Time),
    ("DAY", "day", Some("d"), QuantityType::Time),
    ("WEE", "week", Some("wk"), QuantityType::Time),
    ("MON", "month", Some("mo"), QuantityType::Time),
    ("ANN", "year", Some("y"), QuantityType::Time),
    ("CEL", "degree Celsius", Some("°C"), QuantityType::Temperature),
    ("FAH", "degree Fahrenheit", Some("°F"), QuantityType::Temperature),
    ("KEL", "kelvin", Some("K"), QuantityType::Temperature),
    ("C62", "one", Some("1"), QuantityType::Count),
    ("H87", "piece", None, QuantityType::Count),
    ("DZN", "dozen", Some("DOZ"), QuantityType::Count),
    ("PR", "pair", None, QuantityType::Count),
    ("SET", "set", None, QuantityType::Count),
    ("NEW", "newton", Some("N"), QuantityType::Force),
    ("B47", "kilonewton", Some("kN"), QuantityType::Force),
    ("PAL", "pascal", Some("Pa"), QuantityType::Pressure),
    ("KPA", "kilopascal", Some("kPa"), QuantityType::Pressure),
    ("BAR", "bar [unit of pressure]", Some("bar"), QuantityType::Pressure),
    ("PS", "pound-force per square inch", Some("lbf/in²"), QuantityType::Pressure),
    ("JOU", "joule", Some("J"), QuantityType::Energy),
    ("KJO", "kilojoule", Some("kJ"), QuantityType::Energy),
    ("WHR", "watt hour", Some("W·h"), QuantityType::Energy),
    ("KWH", "kilowatt hour", Some("kW·h"), QuantityType::Energy),
    ("D70", "calorie (international table)", Some("calIT"), QuantityType::Energy),
    ("A99", "bit", Some("bit"), QuantityType::Data),
    ("AD", "byte", Some("byte"), QuantityType::Data),
    ("2P", "kilobyte", Some("kbyte"), QuantityType::Data),
    ("4L", "megabyte", Some("Mbyte"), QuantityType::Data),
    ("E34", "gigabyte", Some("Gbyte"), QuantityType::Data),
    ("E35", "terabyte", Some("Tbyte"), QuantityType::Data),
    ("MTS", "metre per second", Some("m/s"), QuantityType::Speed),
    ("KMH", "kilometre per hour", Some("km/h"), QuantityType::Speed),
    ("HM", "mile per hour (statute mile)", Some("mile/h"), QuantityType::Speed),
    ("KNT", "knot", Some("kn"), QuantityType::Speed),
    ("KMQ", "kilogram per cubic metre", Some("kg/m³"), QuantityType::Density),
    ("23", "gram per cubic centimetre", Some("g/cm³"), QuantityType::Density),
    ("HTZ", "hertz", Some("Hz"), QuantityType::Frequency),
    ("KHZ", "kilohertz", Some("kHz"), QuantityType::Frequency),
    ("MHZ", "megahertz", Some("MHz"), QuantityType::Frequency),
    ("A86", "gigahertz", Some("GHz"), QuantityType::Frequency),
    ("AMP", "ampere", Some("A"), QuantityType::Electric),
    ("VLT", "volt", Some("V"), QuantityType::Electric),
    ("WTT", "watt", Some("W"), QuantityType::Electric),
    ("KWT", "kilowatt", Some("kW"), QuantityType::Electric),
    ("OHM", "ohm", Some("Ω"), QuantityType::Electric),
    ("COU", "coulomb", Some("C"), QuantityType::Electric),
    ("DD", "degree [unit of angle]", Some("°"), QuantityType::Angle),
    ("C81", "radian", Some("rad"), QuantityType::Angle),
    ("M4", "monetary value", None, QuantityType::Currency),
];

pub(super) fn uoms() -> Vec<NewUom> {
    UNITS
        .iter()
        .map(|&(code, name, symbol, quantity_type)| NewUom {
            code: code.to_owned(),
            name: name.to_owned(),
            symbol: symbol.map(str::to_owned),
            quantity_type,
        })
        .collect()
}
