mod config;
mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reference_data::ReferenceData;
use reference_data::domain::validation::validate_bundle;
use reference_data::infra::storage::seed_data::builtin_bundle;
use reference_data_sdk::{
    ClassificationKind, EntityKind, ReferenceDataClientV1, SeedBundle, SeedReport,
    split_classification_label_code,
};

use crate::config::AppConfig;

/// refdata - reference data store administration
#[derive(Parser)]
#[command(name = "refdata")]
#[command(about = "Migrate, seed and inspect the reference-data store")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database connection string (overrides config)
    #[arg(long)]
    dsn: Option<String>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Drop and recreate the schema (all rows are lost)
    Reset,
    /// Insert-or-skip the built-in catalog and an optional JSON bundle
    Seed {
        /// JSON seed bundle applied after the built-in catalog
        #[arg(long)]
        bundle: Option<PathBuf>,

        /// Do not apply the built-in catalog
        #[arg(long)]
        skip_builtin: bool,

        /// Name recorded in the audit columns (defaults to `seed_actor`)
        #[arg(long)]
        actor: Option<String>,
    },
    /// Print the translated name of a row
    Localize {
        /// Entity type, e.g. `country` or `industry_code`
        entity: EntityKind,
        /// Row code; classification codes are written as `domain:code`
        code: String,
        /// BCP 47 locale tag
        locale: String,

        /// Fall back to the canonical name when no translation exists
        #[arg(long)]
        canonical_fallback: bool,
    },
    /// Print a row as JSON
    Show {
        entity: EntityKind,
        code: String,
    },
    /// Validate configuration and the built-in catalog
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML (if provided) -> 3) env (REFDATA__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.dsn.as_deref(), cli.verbose);

    logging::init(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Migrate => migrate(&config).await,
        Commands::Reset => reset(&config).await,
        Commands::Seed {
            bundle,
            skip_builtin,
            actor,
        } => {
            let actor = actor.unwrap_or_else(|| config.reference_data.seed_actor.clone());
            seed(&config, bundle.as_deref(), skip_builtin, &actor).await
        }
        Commands::Localize {
            entity,
            code,
            locale,
            canonical_fallback,
        } => localize(&config, entity, &code, &locale, canonical_fallback).await,
        Commands::Show { entity, code } => show(&config, entity, &code).await,
        Commands::Check => check(&config).await,
    }
}

/// Connects without the startup hooks; the command decides what to run.
async fn open(config: &AppConfig, migrate: bool) -> Result<ReferenceData> {
    let mut cfg = config.reference_data.clone();
    cfg.auto_migrate = migrate;
    cfg.seed_on_startup = false;
    ReferenceData::connect(&cfg).await
}

async fn migrate(config: &AppConfig) -> Result<()> {
    let module = open(config, false).await?;
    let pending = module.pending_migrations().await?;
    module.migrate().await?;
    println!("Applied {pending} migration(s)");
    Ok(())
}

async fn reset(config: &AppConfig) -> Result<()> {
    let module = open(config, false).await?;
    module.reset().await?;
    println!("Schema recreated");
    Ok(())
}

async fn seed(
    config: &AppConfig,
    bundle: Option<&Path>,
    skip_builtin: bool,
    actor: &str,
) -> Result<()> {
    // Parse before touching the store so a bad file leaves it unchanged.
    let extra = bundle.map(read_bundle).transpose()?;
    let module = open(config, config.reference_data.auto_migrate).await?;

    if !skip_builtin {
        let report = module.seed_builtin(actor).await?;
        print_report("built-in catalog", &report);
    }
    if let Some((path, bundle)) = bundle.zip(extra) {
        let report = module
            .client()
            .seed(bundle, actor)
            .await
            .with_context(|| format!("seed bundle {} rejected", path.display()))?;
        print_report(&path.display().to_string(), &report);
    }
    Ok(())
}

fn read_bundle(path: &Path) -> Result<SeedBundle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed bundle {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid seed bundle {}", path.display()))
}

fn print_report(source: &str, report: &SeedReport) {
    println!("{source}:");
    println!("  {:<18} {:>8} {:>8}", "table", "inserted", "skipped");
    for t in &report.tables {
        println!("  {:<18} {:>8} {:>8}", t.table, t.inserted, t.skipped);
    }
    println!(
        "  {:<18} {:>8} {:>8}",
        "total",
        report.inserted(),
        report.skipped()
    );
}

async fn localize(
    config: &AppConfig,
    entity: EntityKind,
    code: &str,
    locale: &str,
    canonical_fallback: bool,
) -> Result<()> {
    let module = open(config, config.reference_data.auto_migrate).await?;
    let client = module.client();

    if canonical_fallback {
        println!("{}", client.display_name(entity, code, locale).await?);
        return Ok(());
    }
    match client.localized_name(entity, code, locale).await? {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => anyhow::bail!("no {entity} label for '{code}' in locale '{locale}'"),
    }
}

async fn show(config: &AppConfig, entity: EntityKind, code: &str) -> Result<()> {
    let module = open(config, config.reference_data.auto_migrate).await?;
    let row = fetch_row(&module.client(), entity, code).await?;
    println!("{}", serde_json::to_string_pretty(&row)?);
    Ok(())
}

async fn fetch_row(
    client: &Arc<dyn ReferenceDataClientV1>,
    entity: EntityKind,
    code: &str,
) -> Result<serde_json::Value> {
    let value = match entity {
        EntityKind::Country => serde_json::to_value(client.get_country(code).await?)?,
        EntityKind::StateRegion => serde_json::to_value(client.get_state_region(code).await?)?,
        EntityKind::Currency => serde_json::to_value(client.get_currency(code).await?)?,
        EntityKind::Language => serde_json::to_value(client.get_language(code).await?)?,
        EntityKind::Locale => serde_json::to_value(client.get_locale(code).await?)?,
        EntityKind::Timezone => serde_json::to_value(client.get_timezone(code).await?)?,
        EntityKind::Uom => serde_json::to_value(client.get_uom(code).await?)?,
        EntityKind::CommodityDomain | EntityKind::IndustryDomain => {
            let kind = if entity == EntityKind::CommodityDomain {
                ClassificationKind::Commodity
            } else {
                ClassificationKind::Industry
            };
            let domain = client
                .list_classification_domains(kind)
                .await?
                .into_iter()
                .find(|d| d.code == code)
                .with_context(|| format!("{entity} '{code}' not found"))?;
            serde_json::to_value(domain)?
        }
        EntityKind::CommodityCode | EntityKind::IndustryCode => {
            let kind = entity
                .classification_code()
                .context("entity is not a classification code")?;
            let (domain, code) = split_classification_label_code(code)
                .with_context(|| format!("{entity} codes are written as domain:code"))?;
            serde_json::to_value(client.get_classification_code(kind, domain, code).await?)?
        }
    };
    Ok(value)
}

async fn check(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    let catalog = builtin_bundle();
    if let Err(e) = validate_bundle(&catalog, &config.reference_data.canonical_locale) {
        for issue in e.validation_issues().unwrap_or_default() {
            eprintln!("  {issue}");
        }
        return Err(e).context("built-in catalog is invalid");
    }
    println!("Built-in catalog is valid ({} rows)", catalog.len());

    let module = open(config, false).await?;
    let pending = module.pending_migrations().await?;
    println!("Database reachable, {pending} pending migration(s)");
    println!("Configuration is valid");
    Ok(())
}
