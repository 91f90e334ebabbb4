use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Offset/limit window for list endpoints; the default window is the
/// first 100 rows.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn get_skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn get_limit(&self) -> u64 {
        self.limit.unwrap_or(100)
    }
}
