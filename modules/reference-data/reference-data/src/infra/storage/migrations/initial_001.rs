use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => POSTGRES_UP,
            sea_orm::DatabaseBackend::Sqlite => SQLITE_UP,
            sea_orm::DatabaseBackend::MySql => {
                return Err(DbErr::Migration(
                    "reference-data schema is not supported on MySQL".to_owned(),
                ));
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = r"
DROP TABLE IF EXISTS label;
DROP TABLE IF EXISTS industry_code;
DROP TABLE IF EXISTS industry_domain;
DROP TABLE IF EXISTS commodity_code;
DROP TABLE IF EXISTS commodity_domain;
DROP TABLE IF EXISTS uom;
DROP TABLE IF EXISTS timezone;
DROP TABLE IF EXISTS locale;
DROP TABLE IF EXISTS language;
DROP TABLE IF EXISTS currency;
DROP TABLE IF EXISTS state_region;
DROP TABLE IF EXISTS country;
        ";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}

const POSTGRES_UP: &str = r"
CREATE TABLE IF NOT EXISTS country (
    code2 VARCHAR(2) PRIMARY KEY NOT NULL,
    code3 VARCHAR(3) NOT NULL UNIQUE,
    numeric3 VARCHAR(3) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    official_name VARCHAR(255),
    region VARCHAR(64),
    subregion VARCHAR(64),
    status VARCHAR(16) NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    metadata JSONB,
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE TABLE IF NOT EXISTS state_region (
    code VARCHAR(16) PRIMARY KEY NOT NULL,
    country_code2 VARCHAR(2) NOT NULL REFERENCES country(code2),
    parent_code VARCHAR(16) REFERENCES state_region(code),
    name VARCHAR(255) NOT NULL,
    subdivision_type VARCHAR(64),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128),
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_state_region_country ON state_region(country_code2);
CREATE INDEX IF NOT EXISTS idx_state_region_parent ON state_region(parent_code);

CREATE TABLE IF NOT EXISTS currency (
    code VARCHAR(3) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    symbol VARCHAR(16),
    minor_units INTEGER CHECK (minor_units IS NULL OR minor_units >= 0),
    numeric3 VARCHAR(3) NOT NULL,
    status VARCHAR(16) NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE UNIQUE INDEX IF NOT EXISTS ux_currency_numeric3_active
    ON currency(numeric3) WHERE status = 'active';

CREATE TABLE IF NOT EXISTS language (
    code VARCHAR(8) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    native_name VARCHAR(255),
    code3 VARCHAR(3),
    direction VARCHAR(3) NOT NULL DEFAULT 'ltr' CHECK (direction IN ('ltr', 'rtl')),
    status VARCHAR(16) NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE TABLE IF NOT EXISTS locale (
    code VARCHAR(35) PRIMARY KEY NOT NULL,
    language_code VARCHAR(8) NOT NULL REFERENCES language(code),
    country_code2 VARCHAR(2) REFERENCES country(code2),
    script VARCHAR(4),
    name VARCHAR(255) NOT NULL,
    direction VARCHAR(3) CHECK (direction IS NULL OR direction IN ('ltr', 'rtl')),
    status VARCHAR(16) NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE INDEX IF NOT EXISTS idx_locale_language ON locale(language_code);

CREATE TABLE IF NOT EXISTS timezone (
    id VARCHAR(64) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    utc_offset VARCHAR(6) NOT NULL,
    is_alias BOOLEAN NOT NULL DEFAULT FALSE,
    canonical_id VARCHAR(64) REFERENCES timezone(id),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128),
    CHECK (
        (is_alias AND canonical_id IS NOT NULL AND canonical_id <> id)
        OR (NOT is_alias AND canonical_id IS NULL)
    )
);

CREATE TABLE IF NOT EXISTS uom (
    code VARCHAR(3) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    symbol VARCHAR(16),
    quantity_type VARCHAR(16) NOT NULL CHECK (quantity_type IN (
        'mass', 'length', 'volume', 'area', 'time', 'temperature', 'count', 'force',
        'pressure', 'energy', 'data', 'speed', 'density', 'frequency', 'electric',
        'angle', 'currency'
    )),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE TABLE IF NOT EXISTS commodity_domain (
    code VARCHAR(32) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE TABLE IF NOT EXISTS commodity_code (
    domain VARCHAR(32) NOT NULL REFERENCES commodity_domain(code),
    code VARCHAR(32) NOT NULL,
    name VARCHAR(512) NOT NULL,
    description TEXT,
    parent_code VARCHAR(32),
    level INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128),
    PRIMARY KEY (domain, code),
    FOREIGN KEY (domain, parent_code) REFERENCES commodity_code(domain, code),
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_commodity_code_parent ON commodity_code(domain, parent_code);

CREATE TABLE IF NOT EXISTS industry_domain (
    code VARCHAR(32) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128)
);

CREATE TABLE IF NOT EXISTS industry_code (
    domain VARCHAR(32) NOT NULL REFERENCES industry_domain(code),
    code VARCHAR(32) NOT NULL,
    name VARCHAR(512) NOT NULL,
    description TEXT,
    parent_code VARCHAR(32),
    level INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128),
    PRIMARY KEY (domain, code),
    FOREIGN KEY (domain, parent_code) REFERENCES industry_code(domain, code),
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_industry_code_parent ON industry_code(domain, parent_code);

CREATE TABLE IF NOT EXISTS label (
    entity VARCHAR(32) NOT NULL CHECK (entity IN (
        'country', 'state_region', 'currency', 'language', 'locale', 'timezone', 'uom',
        'commodity_domain', 'commodity_code', 'industry_domain', 'industry_code'
    )),
    code VARCHAR(80) NOT NULL,
    locale_code VARCHAR(35) NOT NULL REFERENCES locale(code),
    name VARCHAR(512) NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    created_by VARCHAR(128) NOT NULL,
    updated_at TIMESTAMPTZ,
    updated_by VARCHAR(128),
    PRIMARY KEY (entity, code, locale_code)
);
";

const SQLITE_UP: &str = r"
CREATE TABLE IF NOT EXISTS country (
    code2 TEXT PRIMARY KEY NOT NULL,
    code3 TEXT NOT NULL UNIQUE,
    numeric3 TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    official_name TEXT,
    region TEXT,
    subregion TEXT,
    status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    metadata TEXT,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE TABLE IF NOT EXISTS state_region (
    code TEXT PRIMARY KEY NOT NULL,
    country_code2 TEXT NOT NULL REFERENCES country(code2),
    parent_code TEXT REFERENCES state_region(code),
    name TEXT NOT NULL,
    subdivision_type TEXT,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT,
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_state_region_country ON state_region(country_code2);
CREATE INDEX IF NOT EXISTS idx_state_region_parent ON state_region(parent_code);

CREATE TABLE IF NOT EXISTS currency (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    symbol TEXT,
    minor_units INTEGER CHECK (minor_units IS NULL OR minor_units >= 0),
    numeric3 TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE UNIQUE INDEX IF NOT EXISTS ux_currency_numeric3_active
    ON currency(numeric3) WHERE status = 'active';

CREATE TABLE IF NOT EXISTS language (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    native_name TEXT,
    code3 TEXT,
    direction TEXT NOT NULL DEFAULT 'ltr' CHECK (direction IN ('ltr', 'rtl')),
    status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE TABLE IF NOT EXISTS locale (
    code TEXT PRIMARY KEY NOT NULL,
    language_code TEXT NOT NULL REFERENCES language(code),
    country_code2 TEXT REFERENCES country(code2),
    script TEXT,
    name TEXT NOT NULL,
    direction TEXT CHECK (direction IS NULL OR direction IN ('ltr', 'rtl')),
    status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deprecated')),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE INDEX IF NOT EXISTS idx_locale_language ON locale(language_code);

CREATE TABLE IF NOT EXISTS timezone (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    utc_offset TEXT NOT NULL,
    is_alias BOOLEAN NOT NULL DEFAULT 0,
    canonical_id TEXT REFERENCES timezone(id),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT,
    CHECK (
        (is_alias = 1 AND canonical_id IS NOT NULL AND canonical_id <> id)
        OR (is_alias = 0 AND canonical_id IS NULL)
    )
);

CREATE TABLE IF NOT EXISTS uom (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    symbol TEXT,
    quantity_type TEXT NOT NULL CHECK (quantity_type IN (
        'mass', 'length', 'volume', 'area', 'time', 'temperature', 'count', 'force',
        'pressure', 'energy', 'data', 'speed', 'density', 'frequency', 'electric',
        'angle', 'currency'
    )),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE TABLE IF NOT EXISTS commodity_domain (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE TABLE IF NOT EXISTS commodity_code (
    domain TEXT NOT NULL REFERENCES commodity_domain(code),
    code TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    parent_code TEXT,
    level INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT,
    PRIMARY KEY (domain, code),
    FOREIGN KEY (domain, parent_code) REFERENCES commodity_code(domain, code),
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_commodity_code_parent ON commodity_code(domain, parent_code);

CREATE TABLE IF NOT EXISTS industry_domain (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT
);

CREATE TABLE IF NOT EXISTS industry_code (
    domain TEXT NOT NULL REFERENCES industry_domain(code),
    code TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    parent_code TEXT,
    level INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT,
    PRIMARY KEY (domain, code),
    FOREIGN KEY (domain, parent_code) REFERENCES industry_code(domain, code),
    CHECK (parent_code IS NULL OR parent_code <> code)
);

CREATE INDEX IF NOT EXISTS idx_industry_code_parent ON industry_code(domain, parent_code);

CREATE TABLE IF NOT EXISTS label (
    entity TEXT NOT NULL CHECK (entity IN (
        'country', 'state_region', 'currency', 'language', 'locale', 'timezone', 'uom',
        'commodity_domain', 'commodity_code', 'industry_domain', 'industry_code'
    )),
    code TEXT NOT NULL,
    locale_code TEXT NOT NULL REFERENCES locale(code),
    name TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_at TEXT,
    updated_by TEXT,
    PRIMARY KEY (entity, code, locale_code)
);
";
