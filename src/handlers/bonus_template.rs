use crate::models::*;
use crate::services::BonusTemplateService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/bonus-templates",
    tag = "bonus-template",
    request_body = BonusTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = BonusTemplateResponse),
        (status = 409, description = "Template id already exists")
    )
)]
pub async fn create_template(
    template_service: web::Data<BonusTemplateService>,
    request: web::Json<BonusTemplateRequest>,
) -> Result<HttpResponse> {
    match template_service.create_template(request.into_inner()).await {
        Ok(template) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates",
    tag = "bonus-template",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, default 100")
    ),
    responses(
        (status = 200, description = "Templates in insertion order")
    )
)]
pub async fn list_templates(
    template_service: web::Data<BonusTemplateService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    match template_service.list_templates(&query.into_inner()).await {
        Ok(templates) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": templates
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates/search",
    tag = "bonus-template",
    params(
        ("q" = String, Query, description = "Free text; a YYYY, YYYY-MM or YYYY-MM-DD query also matches creation dates")
    ),
    responses(
        (status = 200, description = "Matching templates"),
        (status = 400, description = "Empty query"),
        (status = 404, description = "No matches")
    )
)]
pub async fn search_templates(
    template_service: web::Data<BonusTemplateService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    match template_service.search_templates(&query.q).await {
        Ok(templates) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": templates
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates/by-month",
    tag = "bonus-template",
    params(
        ("year" = i32, Query, description = "Calendar year"),
        ("month" = u32, Query, description = "Month 1-12"),
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, default 100")
    ),
    responses(
        (status = 200, description = "Templates created that month, newest first"),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn list_templates_by_month(
    template_service: web::Data<BonusTemplateService>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    match template_service
        .list_templates_by_month(&query.into_inner())
        .await
    {
        Ok(templates) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": templates
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates/{template_id}",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    responses(
        (status = 200, description = "Template found", body = BonusTemplateResponse),
        (status = 404, description = "Template not found")
    )
)]
pub async fn get_template(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match template_service.get_template(&path.into_inner()).await {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/bonus-templates/{template_id}",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    request_body = BonusTemplateRequest,
    responses(
        (status = 200, description = "Template replaced", body = BonusTemplateResponse),
        (status = 404, description = "Template not found")
    )
)]
pub async fn update_template(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
    request: web::Json<BonusTemplateRequest>,
) -> Result<HttpResponse> {
    match template_service
        .update_template(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/bonus-templates/{template_id}",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    responses(
        (status = 204, description = "Template and its translations deleted"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn delete_template(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match template_service.delete_template(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/bonus-templates/{template_id}/translations",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    request_body = BonusTranslationRequest,
    responses(
        (status = 201, description = "Translation stored (upsert per language)", body = BonusTranslationResponse),
        (status = 404, description = "Template not found")
    )
)]
pub async fn upsert_translation(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
    request: web::Json<BonusTranslationRequest>,
) -> Result<HttpResponse> {
    match template_service
        .upsert_translation(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(translation) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": translation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates/{template_id}/translations",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    responses(
        (status = 200, description = "All translations for the template"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn list_translations(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match template_service.list_translations(&path.into_inner()).await {
        Ok(translations) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": translations
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/bonus-templates/{template_id}/translations/{language}",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id"),
        ("language" = String, Path, description = "Language code")
    ),
    responses(
        (status = 204, description = "Translation deleted (no-op when absent)"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn delete_translation(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (template_id, language) = path.into_inner();
    match template_service
        .delete_translation(&template_id, &language)
        .await
    {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bonus-templates/{template_id}/json",
    tag = "bonus-template",
    params(
        ("template_id" = String, Path, description = "Template id")
    ),
    responses(
        (status = 200, description = "Rendered currency-expanded document", body = BonusJson),
        (status = 404, description = "Template not found")
    )
)]
pub async fn generate_template_json(
    template_service: web::Data<BonusTemplateService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match template_service.generate_json(&path.into_inner()).await {
        Ok(document) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": document
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn bonus_template_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bonus-templates")
            // literal segments before the template_id catch-all
            .route("/search", web::get().to(search_templates))
            .route("/by-month", web::get().to(list_templates_by_month))
            .route("", web::post().to(create_template))
            .route("", web::get().to(list_templates))
            .route("/{template_id}", web::get().to(get_template))
            .route("/{template_id}", web::put().to(update_template))
            .route("/{template_id}", web::delete().to(delete_template))
            .route(
                "/{template_id}/translations",
                web::post().to(upsert_translation),
            )
            .route(
                "/{template_id}/translations",
                web::get().to(list_translations),
            )
            .route(
                "/{template_id}/translations/{language}",
                web::delete().to(delete_translation),
            )
            .route("/{template_id}/json", web::get().to(generate_template_json)),
    );
}
