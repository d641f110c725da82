use crate::entities::order_entity as orders;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub quantity: i32,
    pub weeks: i32,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: Option<i32>,
    #[schema(example = 2)]
    pub quantity: Option<i32>,
    #[schema(example = 4)]
    pub weeks: Option<i32>,
    #[schema(example = 1596.0)]
    pub total_amount: Option<f64>,
    #[schema(example = "pending")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    #[schema(example = "completed")]
    pub status: Option<String>,
}

impl From<orders::Model> for OrderResponse {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            quantity: model.quantity,
            weeks: model.weeks,
            total_amount: model.total_amount.to_f64().unwrap_or(0.0),
            status: model.status,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_total_amount_is_a_number() {
        let dto = OrderResponse::from(orders::Model {
            id: 1,
            restaurant_id: 1,
            customer_id: 5,
            quantity: 2,
            weeks: 4,
            total_amount: Decimal::new(159600, 2),
            status: "pending".to_string(),
            created_at: None,
            updated_at: None,
        });
        assert_eq!(dto.total_amount, 1596.0);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["total_amount"].is_f64());
    }
}
