use crate::database::DbPool;
use crate::entities::{
    bonus_template_entity as bonus_templates, bonus_translation_entity as bonus_translations,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::json_service;
use crate::utils::{month_window, parse_date_window};
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct BonusTemplateService {
    pool: DbPool,
}

impl BonusTemplateService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create_template(
        &self,
        request: BonusTemplateRequest,
    ) -> AppResult<BonusTemplateResponse> {
        let existing = bonus_templates::Entity::find_by_id(request.id.as_str())
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Template with ID '{}' already exists",
                request.id
            )));
        }

        let mut model = bonus_templates::ActiveModel {
            id: Set(request.id.clone()),
            ..Default::default()
        };
        apply_template_fields(&mut model, request);

        let created = model.insert(&self.pool).await?;
        Ok(BonusTemplateResponse::from(created))
    }

    pub async fn list_templates(&self, query: &ListQuery) -> AppResult<Vec<BonusTemplateResponse>> {
        let templates = bonus_templates::Entity::find()
            .order_by_asc(bonus_templates::Column::CreatedAt)
            .offset(query.get_skip())
            .limit(query.get_limit())
            .all(&self.pool)
            .await?;

        Ok(templates
            .into_iter()
            .map(BonusTemplateResponse::from)
            .collect())
    }

    pub async fn get_template(&self, template_id: &str) -> AppResult<BonusTemplateResponse> {
        let template = self.find_template(template_id).await?;
        Ok(BonusTemplateResponse::from(template))
    }

    /// Full replace: every mutable field takes the value from the request.
    /// The path id is authoritative; the key itself is never rewritten.
    pub async fn update_template(
        &self,
        template_id: &str,
        request: BonusTemplateRequest,
    ) -> AppResult<BonusTemplateResponse> {
        let template = self.find_template(template_id).await?;

        let mut model = template.into_active_model();
        apply_template_fields(&mut model, request);
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(&self.pool).await?;
        Ok(BonusTemplateResponse::from(updated))
    }

    pub async fn delete_template(&self, template_id: &str) -> AppResult<()> {
        let txn = self.pool.begin().await?;

        let template = bonus_templates::Entity::find_by_id(template_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))?;

        bonus_translations::Entity::delete_many()
            .filter(bonus_translations::Column::TemplateId.eq(template_id))
            .exec(&txn)
            .await?;
        template.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Free-text search over id/provider/brand/category, OR-combined with a
    /// creation-date window when the query reads as a date, month or year.
    pub async fn search_templates(&self, query: &str) -> AppResult<Vec<BonusTemplateResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let pattern = format!("%{}%", query.to_lowercase());
        let contains = |column: bonus_templates::Column| {
            Expr::expr(Func::lower(Expr::col(column))).like(pattern.as_str())
        };

        let mut condition = Condition::any()
            .add(contains(bonus_templates::Column::Id))
            .add(contains(bonus_templates::Column::Provider))
            .add(contains(bonus_templates::Column::Brand))
            .add(contains(bonus_templates::Column::Category));

        if let Some((start, end)) = parse_date_window(query) {
            condition = condition.add(
                Condition::all()
                    .add(bonus_templates::Column::CreatedAt.gte(start))
                    .add(bonus_templates::Column::CreatedAt.lt(end)),
            );
        }

        let templates = bonus_templates::Entity::find()
            .filter(condition)
            .order_by_asc(bonus_templates::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        if templates.is_empty() {
            return Err(AppError::NotFound(format!(
                "No templates found matching '{query}'"
            )));
        }

        Ok(templates
            .into_iter()
            .map(BonusTemplateResponse::from)
            .collect())
    }

    /// Templates created in the given calendar month, newest first.
    pub async fn list_templates_by_month(
        &self,
        query: &MonthQuery,
    ) -> AppResult<Vec<BonusTemplateResponse>> {
        let (start, end) = month_window(query.year, query.month).ok_or_else(|| {
            AppError::ValidationError(format!("Invalid month: {}-{}", query.year, query.month))
        })?;

        let templates = bonus_templates::Entity::find()
            .filter(bonus_templates::Column::CreatedAt.gte(start))
            .filter(bonus_templates::Column::CreatedAt.lt(end))
            .order_by_desc(bonus_templates::Column::CreatedAt)
            .offset(query.skip.unwrap_or(0))
            .limit(query.limit.unwrap_or(100))
            .all(&self.pool)
            .await?;

        Ok(templates
            .into_iter()
            .map(BonusTemplateResponse::from)
            .collect())
    }

    /// One translation row per (template, language): a second upsert for the
    /// same language overwrites text and currency instead of duplicating.
    pub async fn upsert_translation(
        &self,
        template_id: &str,
        request: BonusTranslationRequest,
    ) -> AppResult<BonusTranslationResponse> {
        self.find_template(template_id).await?;

        let existing = bonus_translations::Entity::find()
            .filter(bonus_translations::Column::TemplateId.eq(template_id))
            .filter(bonus_translations::Column::Language.eq(request.language.as_str()))
            .one(&self.pool)
            .await?;

        let translation = match existing {
            Some(row) => {
                let mut model = row.into_active_model();
                model.currency = Set(request.currency);
                model.name = Set(Some(request.name));
                model.description = Set(Some(request.description));
                model.update(&self.pool).await?
            }
            None => {
                bonus_translations::ActiveModel {
                    template_id: Set(template_id.to_string()),
                    language: Set(request.language),
                    currency: Set(request.currency),
                    name: Set(Some(request.name)),
                    description: Set(Some(request.description)),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?
            }
        };

        Ok(BonusTranslationResponse::from(translation))
    }

    pub async fn list_translations(
        &self,
        template_id: &str,
    ) -> AppResult<Vec<BonusTranslationResponse>> {
        self.find_template(template_id).await?;

        let translations = bonus_translations::Entity::find()
            .filter(bonus_translations::Column::TemplateId.eq(template_id))
            .order_by_asc(bonus_translations::Column::Language)
            .all(&self.pool)
            .await?;

        Ok(translations
            .into_iter()
            .map(BonusTranslationResponse::from)
            .collect())
    }

    /// Deleting a translation that does not exist is a no-op success.
    pub async fn delete_translation(&self, template_id: &str, language: &str) -> AppResult<()> {
        self.find_template(template_id).await?;

        bonus_translations::Entity::delete_many()
            .filter(bonus_translations::Column::TemplateId.eq(template_id))
            .filter(bonus_translations::Column::Language.eq(language))
            .exec(&self.pool)
            .await?;

        Ok(())
    }

    /// Render the currency-expanded document for a template.
    pub async fn generate_json(&self, template_id: &str) -> AppResult<BonusJson> {
        let template = self.find_template(template_id).await?;

        let translations = bonus_translations::Entity::find()
            .filter(bonus_translations::Column::TemplateId.eq(template_id))
            .all(&self.pool)
            .await?;

        Ok(json_service::build_bonus_json_with_currencies(
            &template,
            &translations,
        ))
    }

    async fn find_template(&self, template_id: &str) -> AppResult<bonus_templates::Model> {
        bonus_templates::Entity::find_by_id(template_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))
    }
}

/// Copy every mutable field of the request onto the active model (id and
/// timestamps are handled by the callers).
fn apply_template_fields(
    model: &mut bonus_templates::ActiveModel,
    request: BonusTemplateRequest,
) {
    model.schedule_type = Set(request.schedule_type);
    model.schedule_from = Set(request.schedule_from);
    model.schedule_to = Set(request.schedule_to);
    model.trigger_type = Set(request.trigger_type);
    model.trigger_iterations = Set(request.trigger_iterations);
    model.trigger_duration = Set(request.trigger_duration);
    model.trigger_name = Set(request.trigger_name);
    model.trigger_description = Set(request.trigger_description);
    model.minimum_amount = Set(request.minimum_amount);
    model.percentage = Set(request.percentage);
    model.wagering_multiplier = Set(request.wagering_multiplier);
    model.minimum_stake_to_wager = Set(request.minimum_stake_to_wager);
    model.maximum_stake_to_wager = Set(request.maximum_stake_to_wager);
    model.maximum_amount = Set(request.maximum_amount);
    model.maximum_withdraw = Set(request.maximum_withdraw);
    model.include_amount_on_target_wager = Set(request.include_amount_on_target_wager);
    model.cap_calculation_to_maximum = Set(request.cap_calculation_to_maximum);
    model.compensate_overspending = Set(request.compensate_overspending);
    model.withdraw_active = Set(request.withdraw_active);
    model.category = Set(request.category);
    model.provider = Set(request.provider);
    model.brand = Set(request.brand);
    model.bonus_type = Set(request.bonus_type);
}
