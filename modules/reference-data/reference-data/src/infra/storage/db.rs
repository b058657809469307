//! Connection factory and `DbErr` classification.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, SqlErr};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;

/// Whether `dsn` names an in-memory SQLite database.
#[must_use]
pub fn is_memory_dsn(dsn: &str) -> bool {
    dsn.starts_with("sqlite:") && (dsn.contains(":memory:") || dsn.contains("mode=memory"))
}

/// Opens a pool for `cfg.dsn`.
///
/// In-memory SQLite lives and dies with its connection, so the pool is pinned
/// to exactly one. Foreign keys are switched on for SQLite.
///
/// # Errors
///
/// Returns the driver error if the database cannot be reached.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let memory = is_memory_dsn(&cfg.dsn);

    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(if memory { 1 } else { cfg.max_connections.max(1) })
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await?;
    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    info!(backend = ?db.get_database_backend(), memory, "Connected to reference-data store");
    Ok(db)
}

/// Maps a SeaORM error to the domain error space.
///
/// Unique, foreign-key, CHECK and NOT NULL violations become
/// `DomainError::Constraint`; everything else is `DomainError::Database`.
#[must_use]
pub fn db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::constraint(format!("unique constraint violated: {msg}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            DomainError::constraint(format!("foreign key violated: {msg}"))
        }
        _ => {
            let msg = err.to_string();
            if msg.to_ascii_lowercase().contains("constraint") {
                DomainError::constraint(msg)
            } else {
                debug!(error = %msg, "Database error");
                DomainError::database(msg)
            }
        }
    }
}
