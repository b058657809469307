//! Reference Data module definition.

use std::sync::Arc;

use anyhow::Context;
use reference_data_sdk::{ReferenceDataClientV1, SeedReport};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::ReferenceDataConfig;
use crate::domain::repo::ReferenceDataRepository;
use crate::domain::service::{ReferenceDataService, ServiceConfig};
use crate::infra::storage::db;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::seed_data::builtin_bundle;
use crate::infra::storage::SeaOrmReferenceDataRepository;
use crate::local_client::ReferenceDataLocalClient;

/// Reference Data module.
///
/// This module provides:
/// - Schema migrations for PostgreSQL and SQLite
/// - Idempotent seeding of the built-in catalog and operator bundles
/// - Lookups, tree walks and localized names through [`ReferenceDataClientV1`]
pub struct ReferenceData {
    config: ReferenceDataConfig,
    db: DatabaseConnection,
    service: Arc<ReferenceDataService>,
}

impl ReferenceData {
    /// Connects to the configured store, then migrates and seeds as configured.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is out of range, the database is
    /// unreachable, a migration fails, or the startup seed is rejected.
    pub async fn connect(cfg: &ReferenceDataConfig) -> anyhow::Result<Self> {
        info!("Initializing reference-data module");
        cfg.validate()
            .context("invalid reference-data configuration")?;

        let db = db::connect(&cfg.database)
            .await
            .context("failed to connect to the reference-data store")?;

        // Wire repository and service
        let repo: Arc<dyn ReferenceDataRepository> =
            Arc::new(SeaOrmReferenceDataRepository::new(db.clone()));
        let service = Arc::new(ReferenceDataService::new(repo, ServiceConfig::from(cfg)));

        let module = Self {
            config: cfg.clone(),
            db,
            service,
        };

        if cfg.auto_migrate {
            module.migrate().await?;
        }
        if cfg.seed_on_startup {
            module.seed_builtin(&cfg.seed_actor).await?;
        }

        Ok(module)
    }

    /// SDK client backed by this module's service.
    #[must_use]
    pub fn client(&self) -> Arc<dyn ReferenceDataClientV1> {
        Arc::new(ReferenceDataLocalClient::new(Arc::clone(&self.service)))
    }

    #[must_use]
    pub fn service(&self) -> &Arc<ReferenceDataService> {
        &self.service
    }

    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    #[must_use]
    pub fn config(&self) -> &ReferenceDataConfig {
        &self.config
    }

    /// Applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns the migration error, e.g. on an unsupported backend.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running reference-data database migrations");
        Migrator::up(&self.db, None)
            .await
            .context("reference-data migrations failed")?;
        Ok(())
    }

    /// Number of migrations not applied yet.
    ///
    /// # Errors
    ///
    /// Fails if the migration table cannot be read.
    pub async fn pending_migrations(&self) -> anyhow::Result<usize> {
        let pending = Migrator::get_pending_migrations(&self.db)
            .await
            .context("failed to read migration status")?;
        Ok(pending.len())
    }

    /// Rolls every migration back and applies them again. All rows are lost.
    ///
    /// # Errors
    ///
    /// Returns the migration error.
    pub async fn reset(&self) -> anyhow::Result<()> {
        info!("Resetting reference-data schema");
        Migrator::refresh(&self.db)
            .await
            .context("reference-data schema reset failed")?;
        Ok(())
    }

    /// Insert-or-skip the built-in catalog.
    ///
    /// # Errors
    ///
    /// Fails on validation issues or constraint violations.
    pub async fn seed_builtin(&self, actor: &str) -> anyhow::Result<SeedReport> {
        let report = self
            .service
            .seed(builtin_bundle(), actor)
            .await
            .context("built-in catalog seed failed")?;
        Ok(report)
    }
}
