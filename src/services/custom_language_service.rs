use crate::database::DbPool;
use crate::entities::custom_language_entity as custom_languages;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct CustomLanguageService {
    pool: DbPool,
}

impl CustomLanguageService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_languages(&self) -> AppResult<Vec<CustomLanguageResponse>> {
        let languages = custom_languages::Entity::find()
            .order_by_asc(custom_languages::Column::Code)
            .all(&self.pool)
            .await?;

        Ok(languages
            .into_iter()
            .map(CustomLanguageResponse::from)
            .collect())
    }

    /// Codes are stored lower-cased and must be unique.
    pub async fn create_language(
        &self,
        request: CustomLanguageRequest,
    ) -> AppResult<CustomLanguageResponse> {
        let code = request.code.to_lowercase();

        let existing = custom_languages::Entity::find()
            .filter(custom_languages::Column::Code.eq(code.as_str()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "Language code already exists".to_string(),
            ));
        }

        let language = custom_languages::ActiveModel {
            code: Set(code),
            name: Set(request.name),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(CustomLanguageResponse::from(language))
    }

    pub async fn delete_language(&self, code: &str) -> AppResult<()> {
        let code = code.to_lowercase();

        let language = custom_languages::Entity::find()
            .filter(custom_languages::Column::Code.eq(code.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Language not found".to_string()))?;

        language.delete(&self.pool).await?;
        Ok(())
    }
}
