use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend};

/// Server-side `ref.localized_name(entity, code, locale)` for SQL consumers.
///
/// Exact tag first, then the base language before the first hyphen, else
/// NULL. `STABLE`: the result depends only on the label table snapshot.
/// The function lives in its own `ref` schema; the tables stay on the
/// connection's search path, which the function captures at creation time.
/// SQLite has no stored functions; there the lookup lives in the service only.
#[derive(DeriveMigrationName)]
pub struct Migration;

const PG_UP: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS ref;",
    r"
CREATE OR REPLACE FUNCTION ref.localized_name(p_entity TEXT, p_code TEXT, p_locale TEXT)
RETURNS TEXT
LANGUAGE sql
STABLE
SET search_path FROM CURRENT
AS $$
    SELECT l.name
    FROM label l
    WHERE l.entity = p_entity
      AND l.code = p_code
      AND l.locale_code IN (p_locale, split_part(p_locale, '-', 1))
    ORDER BY (l.locale_code = p_locale) DESC
    LIMIT 1
$$;
    ",
];

// The schema is left in place: other objects may have been added to it.
const PG_DOWN: &[&str] = &["DROP FUNCTION IF EXISTS ref.localized_name(TEXT, TEXT, TEXT);"];

fn up_statements(backend: DatabaseBackend) -> Result<&'static [&'static str], DbErr> {
    match backend {
        DatabaseBackend::Postgres => Ok(PG_UP),
        DatabaseBackend::Sqlite => Ok(&[]),
        DatabaseBackend::MySql => Err(DbErr::Migration(
            "reference-data schema is not supported on MySQL".to_owned(),
        )),
    }
}

fn down_statements(backend: DatabaseBackend) -> &'static [&'static str] {
    match backend {
        DatabaseBackend::Postgres => PG_DOWN,
        DatabaseBackend::Sqlite | DatabaseBackend::MySql => &[],
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in up_statements(manager.get_database_backend())? {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in down_statements(manager.get_database_backend()) {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }
}
