use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code2: String,
    #[sea_orm(unique)]
    pub code3: String,
    #[sea_orm(unique)]
    pub numeric3: String,
    pub name: String,
    pub official_name: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata: Option<Json>,
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub updated_at: Option<OffsetDateTime>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::state_region::Entity")]
    StateRegions,
    #[sea_orm(has_many = "super::locale::Entity")]
    Locales,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::state_region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StateRegions.def()
    }
}

impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locales.def()
    }
}
