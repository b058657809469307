//! IANA time zones and tzdb link aliases.

use reference_data_sdk::NewTimezone;

/// `(id, name, standard UTC offset)`
const CANONICAL: &[(&str, &str, &str)] = &[
    ("Africa/Cairo", "Eastern European Time (Cairo)", "+02:00"),
    ("Africa/Casablanca", "Western European Time (Casablanca)", "+01:00"),
    ("Africa/Johannesburg", "South Africa Standard Time", "+02:00"),
    ("Africa/Lagos", "West Africa Time", "+01:00"),
    ("Africa/Nairobi", "East Africa Time", "+03:00"),
    ("America/Argentina/Buenos_Aires", "Argentina Time", "-03:00"),
    ("America/Bogota", "Colombia Time", "-05:00"),
    ("America/Chicago", "Central Time (US)", "-06:00"),
    ("America/Denver", "Mountain Time (US)", "-07:00"),
    ("America/Los_Angeles", "Pacific Time (US)", "-08:00"),
    ("America/Mexico_City", "Central Time (Mexico)", "-06:00"),
    ("America/New_York", "Eastern Time (US)", "-05:00"),
    ("America/Puerto_Rico", "Atlantic Standard Time", "-04:00"),
    ("America/Santiago", "Chile Time", "-04:00"),
    ("America/Sao_Paulo", "Brasilia Time", "-03:00"),
    ("America/Toronto", "Eastern Time (Canada)", "-05:00"),
    ("America/Vancouver", "Pacific Time (Canada)", "-08:00"),
    ("Asia/Amman", "Jordan Time", "+03:00"),
    ("Asia/Baghdad", "Arabia Standard Time (Baghdad)", "+03:00"),
    ("Asia/Bangkok", "Indochina Time", "+07:00"),
    ("Asia/Beirut", "Eastern European Time (Beirut)", "+02:00"),
    ("Asia/Dhaka", "Bangladesh Standard Time", "+06:00"),
    ("Asia/Dubai", "Gulf Standard Time", "+04:00"),
    ("Asia/Ho_Chi_Minh", "Indochina Time (Ho Chi Minh)", "+07:00"),
    ("Asia/Hong_Kong", "Hong Kong Time", "+08:00"),
    ("Asia/Jakarta", "Western Indonesia Time", "+07:00"),
    ("Asia/Jerusalem", "Israel Standard Time", "+02:00"),
    ("Asia/Karachi", "Pakistan Standard Time", "+05:00"),
    ("Asia/Kolkata", "India Standard Time", "+05:30"),
    ("Asia/Manila", "Philippine Standard Time", "+08:00"),
    ("Asia/Qatar", "Arabia Standard Time (Qatar)", "+03:00"),
    ("Asia/Riyadh", "Arabia Standard Time", "+03:00"),
    ("Asia/Seoul", "Korean Standard Time", "+09:00"),
    ("Asia/Shanghai", "China Standard Time", "+08:00"),
    ("Asia/Singapore", "Singapore Standard Time", "+08:00"),
    ("Asia/Taipei", "Taipei Standard Time", "+08:00"),
    ("Asia/Tehran", "Iran Standard Time", "+03:30"),
    ("Asia/Tokyo", "Japan Standard Time", "+09:00"),
    ("Australia/Sydney", "Australian Eastern Time", "+10:00"),
    ("Etc/UTC", "Coordinated Universal Time", "+00:00"),
    ("Europe/Amsterdam", "Central European Time (Amsterdam)", "+01:00"),
    ("Europe/Athens", "Eastern European Time (Athens)", "+02:00"),
    ("Europe/Berlin", "Central European Time", "+01:00"),
    ("Europe/Brussels", "Central European Time (Brussels)", "+01:00"),
    ("Europe/Bucharest", "Eastern European Time (Bucharest)", "+02:00"),
    ("Europe/Budapest", "Central European Time (Budapest)", "+01:00"),
    ("Europe/Copenhagen", "Central European Time (Copenhagen)", "+01:00"),
    ("Europe/Dublin", "Irish Time", "+00:00"),
    ("Europe/Helsinki", "Eastern European Time (Helsinki)", "+02:00"),
    ("Europe/Istanbul", "Turkey Time", "+03:00"),
    ("Europe/Kyiv", "Eastern European Time (Kyiv)", "+02:00"),
    ("Europe/Lisbon", "Western European Time", "+00:00"),
    ("Europe/London", "Greenwich Mean Time", "+00:00"),
    ("Europe/Madrid", "Central European Time (Madrid)", "+01:00"),
    ("Europe/Moscow", "Moscow Standard Time", "+03:00"),
    ("Europe/Oslo", "Central European Time (Oslo)", "+01:00"),
    ("Europe/Paris", "Central European Time (Paris)", "+01:00"),
    ("Europe/Prague", "Central European Time (Prague)", "+01:00"),
    ("Europe/Rome", "Central European Time (Rome)", "+01:00"),
    ("Europe/Stockholm", "Central European Time (Stockholm)", "+01:00"),
    ("Europe/Vienna", "Central European Time (Vienna)", "+01:00"),
    ("Europe/Warsaw", "Central European Time (Warsaw)", "+01:00"),
    ("Europe/Zurich", "Central European Time (Zurich)", "+01:00"),
    ("Pacific/Auckland", "New Zealand Time", "+12:00"),
];

/// `(alias, canonical)` as linked in the tzdb `backward` file.
const LINKS: &[(&str, &str)] = &[
    ("America/Curacao", "America/Puerto_Rico"),
    ("Asia/Bahrain", "Asia/Qatar"),
    ("Asia/Calcutta", "Asia/Kolkata"),
    ("Asia/Istanbul", "Europe/Istanbul"),
    ("Asia/Kuala_Lumpur", "Asia/Singapore"),
    ("Asia/Kuwait", "Asia/Riyadh"),
    ("Asia/Muscat", "Asia/Dubai"),
    ("Asia/Saigon", "Asia/Ho_Chi_Minh"),
    ("Asia/Tel_Aviv", "Asia/Jerusalem"),
    ("Australia/NSW", "Australia/Sydney"),
    ("Brazil/East", "America/Sao_Paulo"),
    ("Canada/Eastern", "America/Toronto"),
    ("Canada/Pacific", "America/Vancouver"),
    ("Egypt", "Africa/Cairo"),
    ("Etc/Universal", "Etc/UTC"),
    ("Europe/Belfast", "Europe/London"),
    ("Europe/Kiev", "Europe/Kyiv"),
    ("GB", "Europe/London"),
    ("Hongkong", "Asia/Hong_Kong"),
    ("Iran", "Asia/Tehran"),
    ("Israel", "Asia/Jerusalem"),
    ("Japan", "Asia/Tokyo"),
    ("NZ", "Pacific/Auckland"),
    ("PRC", "Asia/Shanghai"),
    ("ROK", "Asia/Seoul"),
    ("Singapore", "Asia/Singapore"),
    ("Turkey", "Europe/Istanbul"),
    ("US/Central", "America/Chicago"),
    ("US/Eastern", "America/New_York"),
    ("US/Mountain", "America/Denver"),
    ("US/Pacific", "America/Los_Angeles"),
    ("UTC", "Etc/UTC"),
    ("Zulu", "Etc/UTC"),
];

/// Canonical zones first, then aliases carrying their target's name and offset.
pub(super) fn timezones() -> Vec<NewTimezone> {
    let canonical = CANONICAL.iter().map(|&(id, name, offset)| NewTimezone {
        id: id.to_owned(),
        name: name.to_owned(),
        utc_offset: offset.to_owned(),
        is_alias: false,
        canonical_id: None,
    });

    let aliases = LINKS.iter().filter_map(|&(alias, target)| {
        let &(_, name, offset) = CANONICAL.iter().find(|(id, _, _)| *id == target)?;
        Some(NewTimezone {
            id: alias.to_owned(),
            name: name.to_owned(),
            utc_offset: offset.to_owned(),
            is_alias: true,
            canonical_id: Some(target.to_owned()),
        })
    });

    canonical.chain(aliases).collect()
}
