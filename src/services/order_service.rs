use crate::entities::{customer_entity as customers, order_entity as orders};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pool: Arc<DatabaseConnection>,
}

impl OrderService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn list(&self, restaurant_id: i32) -> AppResult<Vec<OrderResponse>> {
        let models = orders::Entity::find()
            .filter(orders::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(self.pool.as_ref())
            .await?;

        Ok(models.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn create(
        &self,
        restaurant_id: i32,
        request: CreateOrderRequest,
    ) -> AppResult<OrderResponse> {
        let (Some(customer_id), Some(total_amount)) = (request.customer_id, request.total_amount)
        else {
            return Err(AppError::Validation(
                "Customer ID and total amount are required".to_string(),
            ));
        };

        // The referenced customer must belong to the same tenant
        customers::Entity::find()
            .filter(customers::Column::Id.eq(customer_id))
            .filter(customers::Column::RestaurantId.eq(restaurant_id))
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let total_amount = Decimal::try_from(total_amount)
            .map_err(|_| AppError::Validation("Invalid total amount".to_string()))?;

        let model = orders::ActiveModel {
            restaurant_id: Set(restaurant_id),
            customer_id: Set(customer_id),
            quantity: Set(request.quantity.unwrap_or(1)),
            weeks: Set(request.weeks.unwrap_or(1)),
            total_amount: Set(total_amount),
            status: Set(request
                .status
                .clone()
                .unwrap_or_else(|| "pending".to_string())),
            ..Default::default()
        }
        .insert(self.pool.as_ref())
        .await?;

        Ok(OrderResponse::from(model))
    }

    pub async fn update_status(
        &self,
        restaurant_id: i32,
        id: i32,
        request: UpdateOrderRequest,
    ) -> AppResult<OrderResponse> {
        let Some(status) = request.status else {
            return Err(AppError::Validation("Status is required".to_string()));
        };

        let existing = orders::Entity::find()
            .filter(orders::Column::Id.eq(id))
            .filter(orders::Column::RestaurantId.eq(restaurant_id))
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let mut model = existing.into_active_model();
        model.status = Set(status);
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(self.pool.as_ref()).await?;
        Ok(OrderResponse::from(updated))
    }

    pub async fn delete(&self, restaurant_id: i32, id: i32) -> AppResult<()> {
        orders::Entity::delete_many()
            .filter(orders::Column::Id.eq(id))
            .filter(orders::Column::RestaurantId.eq(restaurant_id))
            .exec(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_requires_customer_and_amount() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = OrderService::new(db);

        let err = service
            .create(
                1,
                CreateOrderRequest {
                    customer_id: None,
                    quantity: None,
                    weeks: None,
                    total_amount: Some(100.0),
                    status: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_foreign_customer() {
        // Tenant-scoped customer lookup returns nothing
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<customers::Model>::new()])
            .into_connection();
        let service = OrderService::new(db);

        let err = service
            .create(
                1,
                CreateOrderRequest {
                    customer_id: Some(99),
                    quantity: Some(1),
                    weeks: Some(1),
                    total_amount: Some(100.0),
                    status: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
