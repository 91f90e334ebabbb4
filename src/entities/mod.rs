pub mod bonus_templates;
pub mod bonus_translations;
pub mod custom_languages;
pub mod offer_translations;
pub mod offers;

pub use bonus_templates as bonus_template_entity;
pub use bonus_translations as bonus_translation_entity;
pub use custom_languages as custom_language_entity;
pub use offer_translations as offer_translation_entity;
pub use offers as offer_entity;
