use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Translation overlay keyed by `(entity, code, locale_code)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "label")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "entity")]
    pub entity_type: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub updated_at: Option<OffsetDateTime>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleCode",
        to = "super::locale::Column::Code"
    )]
    Locale,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locale.def()
    }
}
