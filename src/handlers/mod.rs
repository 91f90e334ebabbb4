pub mod bonus_template;
pub mod custom_language;
pub mod offer;

pub use bonus_template::bonus_template_config;
pub use custom_language::custom_language_config;
pub use offer::offer_config;
