use crate::database::DbPool;
use crate::entities::{offer_entity as offers, offer_translation_entity as offer_translations};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::currency_service::all_currency_conversions;
use crate::services::json_service;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct OfferService {
    pool: DbPool,
}

impl OfferService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Conversions for every supported currency are computed from the EUR
    /// deposit at write time and cached on the row.
    pub async fn create_offer(&self, request: OfferRequest) -> AppResult<OfferResponse> {
        let conversions = all_currency_conversions(request.min_deposit_eur);

        let offer = offers::ActiveModel {
            name: Set(request.name),
            offer_type: Set(request.offer_type),
            bonus_percentage: Set(request.bonus_percentage),
            min_deposit_eur: Set(request.min_deposit_eur),
            wagering_multiplier: Set(request.wagering_multiplier),
            description: Set(request.description),
            currency_conversions: Set(Some(conversions)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(OfferResponse::from(offer))
    }

    pub async fn list_offers(&self, query: &ListQuery) -> AppResult<Vec<OfferResponse>> {
        let offers = offers::Entity::find()
            .order_by_asc(offers::Column::Id)
            .offset(query.get_skip())
            .limit(query.get_limit())
            .all(&self.pool)
            .await?;

        Ok(offers.into_iter().map(OfferResponse::from).collect())
    }

    pub async fn get_offer(&self, offer_id: i64) -> AppResult<OfferResponse> {
        let offer = self.find_offer(offer_id).await?;
        Ok(OfferResponse::from(offer))
    }

    /// Full replace; the cached conversions are recomputed only when the EUR
    /// deposit actually changed.
    pub async fn update_offer(
        &self,
        offer_id: i64,
        request: OfferRequest,
    ) -> AppResult<OfferResponse> {
        let offer = self.find_offer(offer_id).await?;

        let deposit_changed = request.min_deposit_eur != offer.min_deposit_eur;

        let mut model = offer.into_active_model();
        if deposit_changed {
            model.currency_conversions =
                Set(Some(all_currency_conversions(request.min_deposit_eur)));
        }
        model.name = Set(request.name);
        model.offer_type = Set(request.offer_type);
        model.bonus_percentage = Set(request.bonus_percentage);
        model.min_deposit_eur = Set(request.min_deposit_eur);
        model.wagering_multiplier = Set(request.wagering_multiplier);
        model.description = Set(request.description);
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(&self.pool).await?;
        Ok(OfferResponse::from(updated))
    }

    pub async fn delete_offer(&self, offer_id: i64) -> AppResult<()> {
        let txn = self.pool.begin().await?;

        let offer = offers::Entity::find_by_id(offer_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        offer_translations::Entity::delete_many()
            .filter(offer_translations::Column::OfferId.eq(offer_id))
            .exec(&txn)
            .await?;
        offer.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Translations are replaced wholesale: delete everything the offer has,
    /// then insert the new rows, in one transaction.
    pub async fn replace_translations(
        &self,
        offer_id: i64,
        request: OfferTranslationsRequest,
    ) -> AppResult<Vec<OfferTranslationResponse>> {
        let txn = self.pool.begin().await?;

        offers::Entity::find_by_id(offer_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        offer_translations::Entity::delete_many()
            .filter(offer_translations::Column::OfferId.eq(offer_id))
            .exec(&txn)
            .await?;

        let mut inserted = Vec::with_capacity(request.translations.len());
        for item in request.translations {
            let row = offer_translations::ActiveModel {
                offer_id: Set(offer_id),
                language: Set(item.language),
                offer_name: Set(item.offer_name),
                offer_description: Set(item.offer_description),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            inserted.push(OfferTranslationResponse::from(row));
        }

        txn.commit().await?;
        Ok(inserted)
    }

    pub async fn list_translations(
        &self,
        offer_id: i64,
    ) -> AppResult<Vec<OfferTranslationResponse>> {
        self.find_offer(offer_id).await?;

        let translations = offer_translations::Entity::find()
            .filter(offer_translations::Column::OfferId.eq(offer_id))
            .order_by_asc(offer_translations::Column::Language)
            .all(&self.pool)
            .await?;

        Ok(translations
            .into_iter()
            .map(OfferTranslationResponse::from)
            .collect())
    }

    /// Render the offer export from the cached conversions and translations.
    pub async fn generate_json(&self, offer_id: i64) -> AppResult<OfferJson> {
        let offer = self.find_offer(offer_id).await?;

        let translations = offer_translations::Entity::find()
            .filter(offer_translations::Column::OfferId.eq(offer_id))
            .all(&self.pool)
            .await?;

        Ok(json_service::build_offer_json(&offer, &translations))
    }

    async fn find_offer(&self, offer_id: i64) -> AppResult<offers::Model> {
        offers::Entity::find_by_id(offer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))
    }
}
