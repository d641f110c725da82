use crate::entities::customer_entity as customers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Required fields are optional in the shape so that missing values surface
/// as a descriptive 400 instead of a deserialization failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    #[schema(example = "+1 (555) 123-4567")]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[schema(example = "Active")]
    pub status: Option<String>,
}

impl From<customers::Model> for CustomerResponse {
    fn from(model: customers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_created_at_serializes_as_null() {
        let dto = CustomerResponse::from(customers::Model {
            id: 1,
            restaurant_id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: None,
            address: None,
            status: "Active".to_string(),
            created_at: None,
        });

        assert!(dto.created_at.is_none());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["created_at"].is_null());
    }
}
