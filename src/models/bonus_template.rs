use crate::entities::bonus_template_entity as bonus_templates;
use crate::entities::bonus_translation_entity as bonus_translations;
use crate::models::{CurrencyMap, TextMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full field set of a template. Used for both create and update: PUT
/// replaces every mutable field with the values given here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BonusTemplateRequest {
    pub id: String,
    pub schedule_type: Option<String>,
    pub schedule_from: Option<String>,
    pub schedule_to: Option<String>,
    pub trigger_type: Option<String>,
    pub trigger_iterations: Option<i32>,
    pub trigger_duration: Option<i64>,
    pub trigger_name: Option<TextMap>,
    pub trigger_description: Option<TextMap>,
    pub minimum_amount: Option<CurrencyMap>,
    pub percentage: Option<f64>,
    pub wagering_multiplier: Option<f64>,
    pub minimum_stake_to_wager: Option<CurrencyMap>,
    pub maximum_stake_to_wager: Option<CurrencyMap>,
    pub maximum_amount: Option<CurrencyMap>,
    pub maximum_withdraw: Option<CurrencyMap>,
    pub include_amount_on_target_wager: Option<bool>,
    pub cap_calculation_to_maximum: Option<bool>,
    pub compensate_overspending: Option<bool>,
    pub withdraw_active: Option<bool>,
    pub category: Option<String>,
    pub provider: Option<String>,
    pub brand: Option<String>,
    pub bonus_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BonusTemplateResponse {
    pub id: String,
    pub schedule_type: Option<String>,
    pub schedule_from: Option<String>,
    pub schedule_to: Option<String>,
    pub trigger_type: Option<String>,
    pub trigger_iterations: Option<i32>,
    pub trigger_duration: Option<i64>,
    pub trigger_name: Option<TextMap>,
    pub trigger_description: Option<TextMap>,
    pub minimum_amount: Option<CurrencyMap>,
    pub percentage: Option<f64>,
    pub wagering_multiplier: Option<f64>,
    pub minimum_stake_to_wager: Option<CurrencyMap>,
    pub maximum_stake_to_wager: Option<CurrencyMap>,
    pub maximum_amount: Option<CurrencyMap>,
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

impl From<bonus_templates::Model> for BonusTemplateResponse {
    fn from(template: bonus_templates::Model) -> Self {
        Self {
            id: template.id,
            schedule_type: template.schedule_type,
            schedule_from: template.schedule_from,
            schedule_to: template.schedule_to,
            trigger_type: template.trigger_type,
            trigger_iterations: template.trigger_iterations,
            trigger_duration: template.trigger_duration,
            trigger_name: template.trigger_name,
            trigger_description: template.trigger_description,
            minimum_amount: template.minimum_amount,
            percentage: template.percentage,
            wagering_multiplier: template.wagering_multiplier,
            minimum_stake_to_wager: template.minimum_stake_to_wager,
            maximum_stake_to_wager: template.maximum_stake_to_wager,
            maximum_amount: template.maximum_amount,
            maximum_withdraw: template.maximum_withdraw,
            include_amount_on_target_wager: template.include_amount_on_target_wager,
            cap_calculation_to_maximum: template.cap_calculation_to_maximum,
            compensate_overspending: template.compensate_overspending,
            withdraw_active: template.withdraw_active,
            category: template.category,
            provider: template.provider,
            brand: template.brand,
            bonus_type: template.bonus_type,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BonusTranslationRequest {
    pub language: String,
    /// Currency qualifier for texts that differ by currency within the same
    /// language (rendered under the `"{currency}_{language}"` key).
    pub currency: Option<String>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BonusTranslationResponse {
    pub id: i64,
    pub template_id: String,
    pub language: String,
    pub currency: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<bonus_translations::Model> for BonusTranslationResponse {
    fn from(translation: bonus_translations::Model) -> Self {
        Self {
            id: translation.id,
            template_id: translation.template_id,
            language: translation.language,
            currency: translation.currency,
            name: translation.name,
            description: translation.description,
            created_at: translation.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
