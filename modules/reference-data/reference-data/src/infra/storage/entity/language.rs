use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "language")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub code3: Option<String>,
    pub direction: String,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub updated_at: Option<OffsetDateTime>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::locale::Entity")]
    Locales,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locales.def()
    }
}
