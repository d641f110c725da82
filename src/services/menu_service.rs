use crate::entities::menu_item_entity as menu_items;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

fn price_to_decimal(value: f64, field: &str) -> AppResult<Decimal> {
    Decimal::try_from(value).map_err(|_| AppError::Validation(format!("Invalid {field}")))
}

#[derive(Clone)]
pub struct MenuService {
    pool: Arc<DatabaseConnection>,
}

impl MenuService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn list(&self, restaurant_id: i32) -> AppResult<Vec<MenuItemResponse>> {
        let models = menu_items::Entity::find()
            .filter(menu_items::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(menu_items::Column::Category)
            .order_by_asc(menu_items::Column::Name)
            .all(self.pool.as_ref())
            .await?;

        Ok(models.into_iter().map(MenuItemResponse::from).collect())
    }

    pub async fn create(
        &self,
        restaurant_id: i32,
        request: CreateMenuItemRequest,
    ) -> AppResult<MenuItemResponse> {
        let (Some(name), Some(price), Some(category)) =
            (&request.name, request.price, &request.category)
        else {
            return Err(AppError::Validation(
                "Name, price, and category are required".to_string(),
            ));
        };

        let discount = request
            .discount
            .map(|d| price_to_decimal(d, "discount"))
            .transpose()?;

        let model = menu_items::ActiveModel {
            restaurant_id: Set(restaurant_id),
            name: Set(name.clone()),
            price: Set(price_to_decimal(price, "price")?),
            category: Set(category.clone()),
            description: Set(request.description.clone()),
            is_available: Set(request.is_available.unwrap_or(true)),
            discount: Set(discount),
            item_list: Set(request.item_list.clone()),
            item_type: Set(request
                .item_type
                .clone()
                .unwrap_or_else(|| "Veg".to_string())),
            image_url: Set(request.image_url.clone()),
            ..Default::default()
        }
        .insert(self.pool.as_ref())
        .await?;

        Ok(MenuItemResponse::from(model))
    }

    /// Full-field replacement; omitted optional fields reset to their
    /// defaults, matching the PUT semantics of the menu form.
    pub async fn update(
        &self,
        restaurant_id: i32,
        id: i32,
        request: UpdateMenuItemRequest,
    ) -> AppResult<MenuItemResponse> {
        let (Some(name), Some(price), Some(category)) =
            (&request.name, request.price, &request.category)
        else {
            return Err(AppError::Validation(
                "Name, price, and category are required".to_string(),
            ));
        };

        let existing = menu_items::Entity::find()
            .filter(menu_items::Column::Id.eq(id))
            .filter(menu_items::Column::RestaurantId.eq(restaurant_id))
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))?;

        let discount = request
            .discount
            .map(|d| price_to_decimal(d, "discount"))
            .transpose()?;

        let mut model = existing.into_active_model();
        model.name = Set(name.clone());
        model.price = Set(price_to_decimal(price, "price")?);
        model.category = Set(category.clone());
        model.description = Set(request.description.clone());
        model.is_available = Set(request.is_available.unwrap_or(true));
        model.discount = Set(discount);
        model.item_list = Set(request.item_list.clone());
        model.item_type = Set(request
            .item_type
            .clone()
            .unwrap_or_else(|| "Veg".to_string()));
        model.image_url = Set(request.image_url.clone());
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(self.pool.as_ref()).await?;
        Ok(MenuItemResponse::from(updated))
    }

    pub async fn delete(&self, restaurant_id: i32, id: i32) -> AppResult<()> {
        menu_items::Entity::delete_many()
            .filter(menu_items::Column::Id.eq(id))
            .filter(menu_items::Column::RestaurantId.eq(restaurant_id))
            .exec(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_to_decimal_rejects_non_finite() {
        assert!(price_to_decimal(199.0, "price").is_ok());
        assert!(price_to_decimal(f64::NAN, "price").is_err());
        assert!(price_to_decimal(f64::INFINITY, "price").is_err());
    }
}
