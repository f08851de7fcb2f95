use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::storage::catalog::CatalogStore;

/// Shared application context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
}

fn default_limit() -> i64 {
    100
}

/// Query parameters of the paged list endpoint.
#[derive(Deserialize, Debug)]
pub struct ListParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreatePriceRequest {
    pub name: String,
    pub cost: i64,
}

/// Partial update body. Absent fields leave the stored values untouched.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdatePriceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cost: Option<i64>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
