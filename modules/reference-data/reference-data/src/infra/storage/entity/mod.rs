pub mod commodity_code;
pub mod commodity_domain;
pub mod country;
pub mod currency;
pub mod industry_code;
pub mod industry_domain;
pub mod label;
pub mod language;
pub mod locale;
pub mod state_region;
pub mod timezone;
pub mod uom;
