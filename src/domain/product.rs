//! The persisted catalog record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One product price record. `name` is the logical identity key the
/// ingestion path deduplicates on; `cost` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub cost: i64,
}

/// Partial update. Absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub cost: Option<i64>,
}
