use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bonus_translations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub template_id: String,
    pub language: String,
    pub currency: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bonus_templates::Entity",
        from = "Column::TemplateId",
        to = "super::bonus_templates::Column::Id",
        on_delete = "Cascade"
    )]
    BonusTemplate,
}

impl Related<super::bonus_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BonusTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
