use serde::Serialize;
use utoipa::ToSchema;

use crate::models::category::CategoryMap;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_categories: usize,
}
