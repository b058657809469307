use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Node of a industry classification forest. The parent is scoped to the
/// same domain through the composite key `(domain, parent_code)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "industry_code")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub domain: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_code: Option<String>,
    pub level: i32,
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub updated_at: Option<OffsetDateTime>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::industry_domain::Entity",
        from = "Column::Domain",
        to = "super::industry_domain::Column::Code"
    )]
    Domain,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::industry_domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}
