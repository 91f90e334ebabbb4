use crate::models::*;
use crate::services::CustomLanguageService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/custom-languages",
    tag = "custom-language",
    responses(
        (status = 200, description = "All custom languages")
    )
)]
pub async fn list_custom_languages(
    language_service: web::Data<CustomLanguageService>,
) -> Result<HttpResponse> {
    match language_service.list_languages().await {
        Ok(languages) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": languages
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/custom-languages",
    tag = "custom-language",
    request_body = CustomLanguageRequest,
    responses(
        (status = 201, description = "Language created", body = CustomLanguageResponse),
        (status = 409, description = "Language code already exists")
    )
)]
pub async fn create_custom_language(
    language_service: web::Data<CustomLanguageService>,
    request: web::Json<CustomLanguageRequest>,
) -> Result<HttpResponse> {
    match language_service.create_language(request.into_inner()).await {
        Ok(language) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": language
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/custom-languages/{code}",
    tag = "custom-language",
    params(
        ("code" = String, Path, description = "Language code (case-insensitive)")
    ),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 404, description = "Language not found")
    )
)]
pub async fn delete_custom_language(
    language_service: web::Data<CustomLanguageService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match language_service.delete_language(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn custom_language_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/custom-languages")
            .route("", web::get().to(list_custom_languages))
            .route("", web::post().to(create_custom_language))
            .route("/{code}", web::delete().to(delete_custom_language)),
    );
}
