use crate::models::{CurrencyMap, TextMap};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bonus_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub schedule_type: Option<String>,
    pub schedule_from: Option<String>,
    pub schedule_to: Option<String>,
    pub trigger_type: Option<String>,
    pub trigger_iterations: Option<i32>,
    pub trigger_duration: Option<i64>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub trigger_name: Option<TextMap>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub trigger_description: Option<TextMap>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub minimum_amount: Option<CurrencyMap>,
    pub percentage: Option<f64>,
    pub wagering_multiplier: Option<f64>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub minimum_stake_to_wager: Option<CurrencyMap>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub maximum_stake_to_wager: Option<CurrencyMap>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub maximum_amount: Option<CurrencyMap>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub maximum_withdraw: Option<CurrencyMap>,
    pub include_amount_on_target_wager: Option<bool>,
    pub cap_calculation_to_maximum: Option<bool>,
    pub compensate_overspending: Option<bool>,
    pub withdraw_active: Option<bool>,
    pub category: Option<String>,
    pub provider: Option<String>,
    pub brand: Option<String>,
    pub bonus_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bonus_translations::Entity")]
    BonusTranslations,
}

impl Related<super::bonus_translations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BonusTranslations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
