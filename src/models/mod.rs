pub mod bonus_json;
pub mod bonus_template;
pub mod common;
pub mod custom_language;
pub mod maps;
pub mod offer;

pub use bonus_json::*;
pub use bonus_template::*;
pub use common::*;
pub use custom_language::*;
pub use maps::*;
pub use offer::*;
