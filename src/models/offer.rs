use crate::entities::offer_entity as offers;
use crate::entities::offer_translation_entity as offer_translations;
use crate::models::CurrencyMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offer payload for create and update. `currency_conversions` is never
/// taken from the caller; it is recomputed from `min_deposit_eur`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfferRequest {
    pub name: String,
    pub offer_type: Option<String>,
    pub bonus_percentage: Option<f64>,
    pub min_deposit_eur: f64,
    pub wagering_multiplier: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfferResponse {
    pub id: i64,
    pub name: String,
    pub offer_type: Option<String>,
    pub bonus_percentage: Option<f64>,
    pub min_deposit_eur: f64,
    pub wagering_multiplier: Option<f64>,
    pub description: Option<String>,
    pub currency_conversions: CurrencyMap,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<offers::Model> for OfferResponse {
    fn from(offer: offers::Model) -> Self {
        Self {
            id: offer.id,
            name: offer.name,
            offer_type: offer.offer_type,
            bonus_percentage: offer.bonus_percentage,
            min_deposit_eur: offer.min_deposit_eur,
            wagering_multiplier: offer.wagering_multiplier,
            description: offer.description,
            currency_conversions: offer.currency_conversions.unwrap_or_default(),
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfferTranslationItem {
    pub language: String,
    pub offer_name: Option<String>,
    pub offer_description: Option<String>,
}

/// Wholesale replacement of an offer's translations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfferTranslationsRequest {
    pub translations: Vec<OfferTranslationItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfferTranslationResponse {
    pub id: i64,
    pub offer_id: i64,
    pub language: String,
    pub offer_name: Option<String>,
    pub offer_description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<offer_translations::Model> for OfferTranslationResponse {
    fn from(translation: offer_translations::Model) -> Self {
        Self {
            id: translation.id,
            offer_id: translation.offer_id,
            language: translation.language,
            offer_name: translation.offer_name,
            offer_description: translation.offer_description,
            created_at: translation.created_at,
        }
    }
}
