use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::bonus_template::create_template,
        handlers::bonus_template::list_templates,
        handlers::bonus_template::search_templates,
        handlers::bonus_template::list_templates_by_month,
        handlers::bonus_template::get_template,
        handlers::bonus_template::update_template,
        handlers::bonus_template::delete_template,
        handlers::bonus_template::upsert_translation,
        handlers::bonus_template::list_translations,
        handlers::bonus_template::delete_translation,
        handlers::bonus_template::generate_template_json,
        handlers::offer::create_offer,
        handlers::offer::list_offers,
        handlers::offer::get_offer,
        handlers::offer::update_offer,
        handlers::offer::delete_offer,
        handlers::offer::replace_translations,
        handlers::offer::list_offer_translations,
        handlers::offer::generate_offer_json,
        handlers::custom_language::list_custom_languages,
        handlers::custom_language::create_custom_language,
        handlers::custom_language::delete_custom_language,
    ),
    components(
        schemas(
            BonusTemplateRequest,
            BonusTemplateResponse,
            BonusTranslationRequest,
            BonusTranslationResponse,
            OfferRequest,
            OfferResponse,
            OfferTranslationItem,
            OfferTranslationsRequest,
            OfferTranslationResponse,
            CustomLanguageRequest,
            CustomLanguageResponse,
            BonusJson,
            BonusSchedule,
            BonusTrigger,
            BonusConfig,
            OfferJson,
            OfferTranslationText,
            CurrencyMap,
            TextMap,
            ListQuery,
            SearchQuery,
            MonthQuery,
            ApiError,
        )
    ),
    tags(
        (name = "bonus-template", description = "Bonus template management API"),
        (name = "offer", description = "Promotional offer management API"),
        (name = "custom-language", description = "Custom language reference API"),
    ),
    info(
        title = "Bonus CRM Backend API",
        version = "1.0.0",
        description = "Bonus template and offer management REST API documentation",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
