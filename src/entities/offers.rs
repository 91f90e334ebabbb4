use crate::models::CurrencyMap;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub offer_type: Option<String>,
    pub bonus_percentage: Option<f64>,
    pub min_deposit_eur: f64,
    pub wagering_multiplier: Option<f64>,
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub currency_conversions: Option<CurrencyMap>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::offer_translations::Entity")]
    OfferTranslations,
}

impl Related<super::offer_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfferTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
