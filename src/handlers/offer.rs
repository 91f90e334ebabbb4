use crate::models::*;
use crate::services::OfferService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/offers",
    tag = "offer",
    request_body = OfferRequest,
    responses(
        (status = 201, description = "Offer created with currency conversions", body = OfferResponse)
    )
)]
pub async fn create_offer(
    offer_service: web::Data<OfferService>,
    request: web::Json<OfferRequest>,
) -> Result<HttpResponse> {
    match offer_service.create_offer(request.into_inner()).await {
        Ok(offer) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": offer
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/offers",
    tag = "offer",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, default 100")
    ),
    responses(
        (status = 200, description = "Offers in insertion order")
    )
)]
pub async fn list_offers(
    offer_service: web::Data<OfferService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    match offer_service.list_offers(&query.into_inner()).await {
        Ok(offers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": offers
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/offers/{offer_id}",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "Offer found", body = OfferResponse),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match offer_service.get_offer(path.into_inner()).await {
        Ok(offer) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": offer
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/offers/{offer_id}",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    request_body = OfferRequest,
    responses(
        (status = 200, description = "Offer replaced; conversions recomputed when the deposit changed", body = OfferResponse),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn update_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
    request: web::Json<OfferRequest>,
) -> Result<HttpResponse> {
    match offer_service
        .update_offer(path.into_inner(), request.into_inner())
        .await
    {
        Ok(offer) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": offer
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/offers/{offer_id}",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    responses(
        (status = 204, description = "Offer and its translations deleted"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn delete_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match offer_service.delete_offer(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/offers/{offer_id}/translations",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    request_body = OfferTranslationsRequest,
    responses(
        (status = 201, description = "Translations replaced wholesale"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn replace_translations(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
    request: web::Json<OfferTranslationsRequest>,
) -> Result<HttpResponse> {
    match offer_service
        .replace_translations(path.into_inner(), request.into_inner())
        .await
    {
        Ok(translations) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": translations
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/offers/{offer_id}/translations",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "All translations for the offer"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn list_offer_translations(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match offer_service.list_translations(path.into_inner()).await {
        Ok(translations) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": translations
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/offers/{offer_id}/json",
    tag = "offer",
    params(
        ("offer_id" = i64, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "Rendered offer document", body = OfferJson),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn generate_offer_json(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match offer_service.generate_json(path.into_inner()).await {
        Ok(document) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": document
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn offer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/offers")
            .route("", web::post().to(create_offer))
            .route("", web::get().to(list_offers))
            .route("/{offer_id}", web::get().to(get_offer))
            .route("/{offer_id}", web::put().to(update_offer))
            .route("/{offer_id}", web::delete().to(delete_offer))
            .route(
                "/{offer_id}/translations",
                web::post().to(replace_translations),
            )
            .route(
                "/{offer_id}/translations",
                web::get().to(list_offer_translations),
            )
            .route("/{offer_id}/json", web::get().to(generate_offer_json)),
    );
}
