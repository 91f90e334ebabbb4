//! Rendered bonus/offer documents.
//!
//! `BonusJson` mirrors the downstream `config.json` shape: three top-level
//! groups (schedule / trigger / config) with camelCase keys. `OfferJson`
//! keeps the flat snake_case shape the offer export always had.

use crate::models::{CurrencyMap, TextMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BonusJson {
    pub id: String,
    pub schedule: BonusSchedule,
    pub trigger: BonusTrigger,
    pub config: BonusConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BonusSchedule {
    #[serde(rename = "type")]
    pub schedule_type: Option<String>,
    #[serde(rename = "from")]
    pub schedule_from: Option<String>,
    #[serde(rename = "to")]
    pub schedule_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BonusTrigger {
    pub name: TextMap,
    pub description: TextMap,
    pub minimum_amount: CurrencyMap,
    pub iterations: Option<i32>,
    #[serde(rename = "type")]
    pub trigger_type: Option<String>,
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BonusConfig {
    pub minimum_stake_to_wager: CurrencyMap,
    pub maximum_stake_to_wager: CurrencyMap,
    pub compensate_overspending: Option<bool>,
    pub maximum_amount: CurrencyMap,
    pub percentage: Option<f64>,
    pub wagering_multiplier: Option<f64>,
    pub include_amount_on_target_wager_calculation: Option<bool>,
    pub cap_calculation_amount_to_maximum_bonus: Option<bool>,
    #[serde(rename = "type")]
    pub bonus_type: Option<String>,
    pub withdraw_active: Option<bool>,
    pub category: Option<String>,
    pub provider: Option<String>,
    pub brand: Option<String>,
    pub maximum_withdraw: CurrencyMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfferJson {
    pub offer_id: i64,
    pub offer_name: String,
    pub offer_type: Option<String>,
    pub bonus_percentage: Option<f64>,
    pub wagering_multiplier: Option<f64>,
    pub min_deposits: CurrencyMap,
    pub translations: BTreeMap<String, OfferTranslationText>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfferTranslationText {
    pub name: Option<String>,
    pub description: Option<String>,
}
