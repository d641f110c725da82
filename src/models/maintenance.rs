use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of information_schema.columns, as reported by the schema
/// introspection endpoint and dbtool.
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct SchemaColumn {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
    pub column_default: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedRequest {
    #[schema(example = 1)]
    pub restaurant_id: Option<i32>,
}
