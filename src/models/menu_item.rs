use crate::entities::menu_item_entity as menu_items;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape for a menu item. Price and discount leave the database as
/// DECIMAL; they are normalized to JSON numbers here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub is_available: bool,
    pub discount: Option<f64>,
    pub item_list: Option<String>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    #[schema(example = "Veg Thali")]
    pub name: Option<String>,
    #[schema(example = 199.0)]
    pub price: Option<f64>,
    #[schema(example = "Thali")]
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    #[schema(example = 10.0)]
    pub discount: Option<f64>,
    #[schema(example = "Dal, Rice, Roti, Sabzi")]
    pub item_list: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "Veg")]
    pub item_type: Option<String>,
    pub image_url: Option<String>,
}

/// PUT applies full-field replacement, so the update shape is the create
/// shape re-submitted.
pub type UpdateMenuItemRequest = CreateMenuItemRequest;

impl From<menu_items::Model> for MenuItemResponse {
    fn from(model: menu_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price.to_f64().unwrap_or(0.0),
            category: model.category,
            description: model.description,
            is_available: model.is_available,
            discount: model.discount.and_then(|d| d.to_f64()),
            item_list: model.item_list,
            item_type: model.item_type,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_model() -> menu_items::Model {
        menu_items::Model {
            id: 7,
            restaurant_id: 1,
            name: "Veg Thali".to_string(),
            price: Decimal::new(19900, 2),
            category: "Thali".to_string(),
            description: None,
            is_available: true,
            discount: Some(Decimal::new(1050, 2)),
            item_list: Some("Dal, Rice, Roti".to_string()),
            item_type: "Veg".to_string(),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_decimal_columns_become_numbers() {
        let dto = MenuItemResponse::from(sample_model());
        assert_eq!(dto.price, 199.0);
        assert_eq!(dto.discount, Some(10.5));
        // NULL timestamps are reported as null, not invented at read time
        assert!(dto.created_at.is_none());
        assert!(dto.updated_at.is_none());
    }

    #[test]
    fn test_price_and_discount_round_trip_separately() {
        // The server stores raw price and discount; the discounted display
        // price is a client-side computation.
        let dto = MenuItemResponse::from(sample_model());
        let display = dto.price * (1.0 - dto.discount.unwrap() / 100.0);
        assert!((display - 178.105).abs() < 1e-9);
    }

    #[test]
    fn test_type_field_renamed_on_the_wire() {
        let dto = MenuItemResponse::from(sample_model());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Veg");
        assert!(json.get("item_type").is_none());
    }
}
