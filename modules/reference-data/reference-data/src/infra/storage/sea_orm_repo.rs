use async_trait::async_trait;
use reference_data_sdk::{
    ClassificationCode, ClassificationDomain, ClassificationKind, Country, Currency, EntityKind,
    Label, Language, Locale, NewLabel, QuantityType, SeedBundle, SeedReport, StateRegion, Status,
    TableSeedStats, Timezone, Uom, split_classification_label_code,
};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use time::OffsetDateTime;
use tracing::debug;

use super::db::db_err;
use super::entity::{
    commodity_code, commodity_domain, country, currency, industry_code, industry_domain, label,
    language, locale, state_region, timezone, uom,
};
use super::mapper;
use crate::domain::error::DomainError;
use crate::domain::repo::ReferenceDataRepository;

/// Rows per multi-row INSERT; keeps bind counts well under driver limits.
const SEED_BATCH: usize = 200;

pub struct SeaOrmReferenceDataRepository {
    db: DatabaseConnection,
}

impl SeaOrmReferenceDataRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn name_of<E>(
        &self,
        select: Select<E>,
        column: E::Column,
    ) -> Result<Option<String>, DomainError>
    where
        E: EntityTrait,
    {
        select
            .select_only()
            .column(column)
            .into_tuple::<String>()
            .one(&self.db)
            .await
            .map_err(db_err)
    }
}

fn try_collect<M, T>(models: Vec<M>) -> Result<Vec<T>, DomainError>
where
    T: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(T::try_from).collect()
}

/// Inserts `rows` in batches, skipping every row whose key already exists.
async fn insert_or_skip<A, C>(
    conn: &C,
    table: &'static str,
    rows: Vec<A>,
    conflict: &OnConflict,
) -> Result<TableSeedStats, DomainError>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let total = rows.len() as u64;
    let mut inserted = 0;
    let mut rows = rows.into_iter().peekable();

    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(SEED_BATCH).collect();
        inserted += A::Entity::insert_many(batch)
            .on_conflict(conflict.clone())
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
    }

    debug!(table, inserted, total, "Seeded rows");
    Ok(TableSeedStats {
        table: table.to_owned(),
        inserted,
        skipped: total.saturating_sub(inserted),
    })
}

fn skip_on<C: ColumnTrait>(columns: impl IntoIterator<Item = C>) -> OnConflict {
    OnConflict::columns(columns).do_nothing().to_owned()
}

#[async_trait]
impl ReferenceDataRepository for SeaOrmReferenceDataRepository {
    async fn find_country(&self, code2: &str) -> Result<Option<Country>, DomainError> {
        country::Entity::find_by_id(code2.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Country::try_from)
            .transpose()
    }

    async fn list_countries(&self, status: Option<Status>) -> Result<Vec<Country>, DomainError> {
        let mut query = country::Entity::find();
        if let Some(status) = status {
            query = query.filter(country::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_asc(country::Column::Code2)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        try_collect(models)
    }

    async fn find_state_region(&self, code: &str) -> Result<Option<StateRegion>, DomainError> {
        Ok(state_region::Entity::find_by_id(code.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(StateRegion::from))
    }

    async fn list_state_regions(
        &self,
        country_code2: &str,
    ) -> Result<Vec<StateRegion>, DomainError> {
        let models = state_region::Entity::find()
            .filter(state_region::Column::CountryCode2.eq(country_code2))
            .order_by_asc(state_region::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(StateRegion::from).collect())
    }

    async fn find_currency(&self, code: &str) -> Result<Option<Currency>, DomainError> {
        currency::Entity::find_by_id(code.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Currency::try_from)
            .transpose()
    }

    async fn list_currencies(&self, status: Option<Status>) -> Result<Vec<Currency>, DomainError> {
        let mut query = currency::Entity::find();
        if let Some(status) = status {
            query = query.filter(currency::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_asc(currency::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        try_collect(models)
    }

    async fn find_language(&self, code: &str) -> Result<Option<Language>, DomainError> {
        language::Entity::find_by_id(code.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Language::try_from)
            .transpose()
    }

    async fn list_languages(&self, status: Option<Status>) -> Result<Vec<Language>, DomainError> {
        let mut query = language::Entity::find();
        if let Some(status) = status {
            query = query.filter(language::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_asc(language::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        try_collect(models)
    }

    async fn find_locale(&self, code: &str) -> Result<Option<Locale>, DomainError> {
        locale::Entity::find_by_id(code.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Locale::try_from)
            .transpose()
    }

    async fn list_locales(&self, language_code: Option<&str>) -> Result<Vec<Locale>, DomainError> {
        let mut query = locale::Entity::find();
        if let Some(language_code) = language_code {
            query = query.filter(locale::Column::LanguageCode.eq(language_code));
        }
        let models = query
            .order_by_asc(locale::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        try_collect(models)
    }

    async fn find_timezone(&self, id: &str) -> Result<Option<Timezone>, DomainError> {
        Ok(timezone::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Timezone::from))
    }

    async fn find_uom(&self, code: &str) -> Result<Option<Uom>, DomainError> {
        uom::Entity::find_by_id(code.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Uom::try_from)
            .transpose()
    }

    async fn list_uoms(
        &self,
        quantity_type: Option<QuantityType>,
    ) -> Result<Vec<Uom>, DomainError> {
        let mut query = uom::Entity::find();
        if let Some(quantity_type) = quantity_type {
            query = query.filter(uom::Column::QuantityType.eq(quantity_type.as_str()));
        }
        let models = query
            .order_by_asc(uom::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        try_collect(models)
    }

    async fn list_classification_domains(
        &self,
        kind: ClassificationKind,
    ) -> Result<Vec<ClassificationDomain>, DomainError> {
        let domains = match kind {
            ClassificationKind::Commodity => commodity_domain::Entity::find()
                .order_by_asc(commodity_domain::Column::Code)
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(mapper::from_commodity_domain)
                .collect(),
            ClassificationKind::Industry => industry_domain::Entity::find()
                .order_by_asc(industry_domain::Column::Code)
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(mapper::from_industry_domain)
                .collect(),
        };
        Ok(domains)
    }

    async fn find_classification_code(
        &self,
        kind: ClassificationKind,
        domain: &str,
        code: &str,
    ) -> Result<Option<ClassificationCode>, DomainError> {
        let key = (domain.to_owned(), code.to_owned());
        match kind {
            ClassificationKind::Commodity => commodity_code::Entity::find_by_id(key)
                .one(&self.db)
                .await
                .map_err(db_err)?
                .map(mapper::from_commodity_code)
                .transpose(),
            ClassificationKind::Industry => industry_code::Entity::find_by_id(key)
                .one(&self.db)
                .await
                .map_err(db_err)?
                .map(mapper::from_industry_code)
                .transpose(),
        }
    }

    async fn list_classification_children(
        &self,
        kind: ClassificationKind,
        domain: &str,
        parent: Option<&str>,
    ) -> Result<Vec<ClassificationCode>, DomainError> {
        match kind {
            ClassificationKind::Commodity => {
                let parent_filter = match parent {
                    Some(p) => commodity_code::Column::ParentCode.eq(p),
                    None => commodity_code::Column::ParentCode.is_null(),
                };
                commodity_code::Entity::find()
                    .filter(commodity_code::Column::Domain.eq(domain))
                    .filter(parent_filter)
                    .order_by_asc(commodity_code::Column::Code)
                    .all(&self.db)
                    .await
                    .map_err(db_err)?
                    .into_iter()
                    .map(mapper::from_commodity_code)
                    .collect()
            }
            ClassificationKind::Industry => {
                let parent_filter = match parent {
                    Some(p) => industry_code::Column::ParentCode.eq(p),
                    None => industry_code::Column::ParentCode.is_null(),
                };
                industry_code::Entity::find()
                    .filter(industry_code::Column::Domain.eq(domain))
                    .filter(parent_filter)
                    .order_by_asc(industry_code::Column::Code)
                    .all(&self.db)
                    .await
                    .map_err(db_err)?
                    .into_iter()
                    .map(mapper::from_industry_code)
                    .collect()
            }
        }
    }

    async fn find_label_names(
        &self,
        entity: EntityKind,
        code: &str,
        locales: &[&str],
    ) -> Result<Vec<(String, String)>, DomainError> {
        if locales.is_empty() {
            return Ok(Vec::new());
        }
        label::Entity::find()
            .select_only()
            .column(label::Column::LocaleCode)
            .column(label::Column::Name)
            .filter(label::Column::EntityType.eq(entity.as_str()))
            .filter(label::Column::Code.eq(code))
            .filter(label::Column::LocaleCode.is_in(locales.iter().copied()))
            .into_tuple::<(String, String)>()
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn canonical_name(
        &self,
        entity: EntityKind,
        code: &str,
    ) -> Result<Option<String>, DomainError> {
        let code = code.to_owned();
        match entity {
            EntityKind::Country => {
                self.name_of(country::Entity::find_by_id(code), country::Column::Name)
                    .await
            }
            EntityKind::StateRegion => {
                self.name_of(
                    state_region::Entity::find_by_id(code),
                    state_region::Column::Name,
                )
                .await
            }
            EntityKind::Currency => {
                self.name_of(currency::Entity::find_by_id(code), currency::Column::Name)
                    .await
            }
            EntityKind::Language => {
                self.name_of(language::Entity::find_by_id(code), language::Column::Name)
                    .await
            }
            EntityKind::Locale => {
                self.name_of(locale::Entity::find_by_id(code), locale::Column::Name)
                    .await
            }
            EntityKind::Timezone => {
                self.name_of(timezone::Entity::find_by_id(code), timezone::Column::Name)
                    .await
            }
            EntityKind::Uom => {
                self.name_of(uom::Entity::find_by_id(code), uom::Column::Name)
                    .await
            }
            EntityKind::CommodityDomain => {
                self.name_of(
                    commodity_domain::Entity::find_by_id(code),
                    commodity_domain::Column::Name,
                )
                .await
            }
            EntityKind::IndustryDomain => {
                self.name_of(
                    industry_domain::Entity::find_by_id(code),
                    industry_domain::Column::Name,
                )
                .await
            }
            EntityKind::CommodityCode => {
                let Some((domain, code)) = split_classification_label_code(&code) else {
                    return Ok(None);
                };
                self.name_of(
                    commodity_code::Entity::find_by_id((domain.to_owned(), code.to_owned())),
                    commodity_code::Column::Name,
                )
                .await
            }
            EntityKind::IndustryCode => {
                let Some((domain, code)) = split_classification_label_code(&code) else {
                    return Ok(None);
                };
                self.name_of(
                    industry_code::Entity::find_by_id((domain.to_owned(), code.to_owned())),
                    industry_code::Column::Name,
                )
                .await
            }
        }
    }

    async fn upsert_label(
        &self,
        new_label: NewLabel,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<Label, DomainError> {
        let key = (
            new_label.entity.as_str().to_owned(),
            new_label.code.clone(),
            new_label.locale_code.clone(),
        );

        label::Entity::insert(mapper::label_row(&new_label, actor, now))
            .on_conflict(
                OnConflict::columns([
                    label::Column::EntityType,
                    label::Column::Code,
                    label::Column::LocaleCode,
                ])
                .update_columns([label::Column::Name, label::Column::Description])
                .value(label::Column::UpdatedAt, now)
                .value(label::Column::UpdatedBy, actor)
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        let model = label::Entity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::database("label missing after upsert"))?;
        Label::try_from(model)
    }

    async fn set_status(
        &self,
        entity: EntityKind,
        code: &str,
        status: Status,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<u64, DomainError> {
        let result = match entity {
            EntityKind::Country => {
                country::Entity::update_many()
                    .col_expr(country::Column::Status, Expr::value(status.as_str()))
                    .col_expr(country::Column::UpdatedAt, Expr::value(now))
                    .col_expr(country::Column::UpdatedBy, Expr::value(actor))
                    .filter(country::Column::Code2.eq(code))
                    .exec(&self.db)
                    .await
            }
            EntityKind::Currency => {
                currency::Entity::update_many()
                    .col_expr(currency::Column::Status, Expr::value(status.as_str()))
                    .col_expr(currency::Column::UpdatedAt, Expr::value(now))
                    .col_expr(currency::Column::UpdatedBy, Expr::value(actor))
                    .filter(currency::Column::Code.eq(code))
                    .exec(&self.db)
                    .await
            }
            EntityKind::Language => {
                language::Entity::update_many()
                    .col_expr(language::Column::Status, Expr::value(status.as_str()))
                    .col_expr(language::Column::UpdatedAt, Expr::value(now))
                    .col_expr(language::Column::UpdatedBy, Expr::value(actor))
                    .filter(language::Column::Code.eq(code))
                    .exec(&self.db)
                    .await
            }
            EntityKind::Locale => {
                locale::Entity::update_many()
                    .col_expr(locale::Column::Status, Expr::value(status.as_str()))
                    .col_expr(locale::Column::UpdatedAt, Expr::value(now))
                    .col_expr(locale::Column::UpdatedBy, Expr::value(actor))
                    .filter(locale::Column::Code.eq(code))
                    .exec(&self.db)
                    .await
            }
            other => {
                return Err(DomainError::validation(
                    "entity",
                    format!("{other} rows carry no status"),
                ));
            }
        };
        Ok(result.map_err(db_err)?.rows_affected)
    }

    async fn seed(
        &self,
        bundle: &SeedBundle,
        actor: &str,
        now: OffsetDateTime,
    ) -> Result<SeedReport, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let mut report = SeedReport::default();

        report.tables.push(
            insert_or_skip(
                &txn,
                "country",
                bundle.countries.iter().map(|r| mapper::country_row(r, actor, now)).collect(),
                &skip_on([country::Column::Code2]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "state_region",
                bundle
                    .state_regions
                    .iter()
                    .map(|r| mapper::state_region_row(r, actor, now))
                    .collect(),
                &skip_on([state_region::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "currency",
                bundle.currencies.iter().map(|r| mapper::currency_row(r, actor, now)).collect(),
                &skip_on([currency::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "language",
                bundle.languages.iter().map(|r| mapper::language_row(r, actor, now)).collect(),
                &skip_on([language::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "locale",
                bundle.locales.iter().map(|r| mapper::locale_row(r, actor, now)).collect(),
                &skip_on([locale::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "timezone",
                bundle.timezones.iter().map(|r| mapper::timezone_row(r, actor, now)).collect(),
                &skip_on([timezone::Column::Id]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "uom",
                bundle.uoms.iter().map(|r| mapper::uom_row(r, actor, now)).collect(),
                &skip_on([uom::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "commodity_domain",
                bundle
                    .commodity_domains
                    .iter()
                    .map(|r| mapper::commodity_domain_row(r, actor, now))
                    .collect(),
                &skip_on([commodity_domain::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "commodity_code",
                bundle
                    .commodity_codes
                    .iter()
                    .map(|r| mapper::commodity_code_row(r, actor, now))
                    .collect(),
                &skip_on([commodity_code::Column::Domain, commodity_code::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "industry_domain",
                bundle
                    .industry_domains
                    .iter()
                    .map(|r| mapper::industry_domain_row(r, actor, now))
                    .collect(),
                &skip_on([industry_domain::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "industry_code",
                bundle
                    .industry_codes
                    .iter()
                    .map(|r| mapper::industry_code_row(r, actor, now))
                    .collect(),
                &skip_on([industry_code::Column::Domain, industry_code::Column::Code]),
            )
            .await?,
        );
        report.tables.push(
            insert_or_skip(
                &txn,
                "label",
                bundle.labels.iter().map(|r| mapper::label_row(r, actor, now)).collect(),
                &skip_on([
                    label::Column::EntityType,
                    label::Column::Code,
                    label::Column::LocaleCode,
                ]),
            )
            .await?,
        );

        txn.commit().await.map_err(db_err)?;
        Ok(report)
    }

    async fn row_counts(&self) -> Result<Vec<(&'static str, u64)>, DomainError> {
        let db = &self.db;
        let counts = vec![
            ("country", country::Entity::find().count(db).await),
            ("state_region", state_region::Entity::find().count(db).await),
            ("currency", currency::Entity::find().count(db).await),
            ("language", language::Entity::find().count(db).await),
            ("locale", locale::Entity::find().count(db).await),
            ("timezone", timezone::Entity::find().count(db).await),
            ("uom", uom::Entity::find().count(db).await),
            ("commodity_domain", commodity_domain::Entity::find().count(db).await),
            ("commodity_code", commodity_code::Entity::find().count(db).await),
            ("industry_domain", industry_domain::Entity::find().count(db).await),
            ("industry_code", industry_code::Entity::find().count(db).await),
            ("label", label::Entity::find().count(db).await),
        ];
        counts
            .into_iter()
            .map(|(table, count)| count.map(|n| (table, n)).map_err(db_err))
            .collect()
    }
}
