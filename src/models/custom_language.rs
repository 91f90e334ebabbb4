use crate::entities::custom_language_entity as custom_languages;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomLanguageRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomLanguageResponse {
    pub code: String,
    pub name: String,
    #[serde(rename = "isCustom")]
    pub is_custom: bool,
}

impl From<custom_languages::Model> for CustomLanguageResponse {
    fn from(language: custom_languages::Model) -> Self {
        Self {
            code: language.code,
            name: language.name,
            is_custom: true,
        }
    }
}
