pub mod bonus_template_service;
pub mod currency_service;
pub mod custom_language_service;
pub mod json_service;
pub mod offer_service;

pub use bonus_template_service::BonusTemplateService;
pub use custom_language_service::CustomLanguageService;
pub use offer_service::OfferService;
