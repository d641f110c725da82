use crate::entities::customer_entity as customers;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    pool: Arc<DatabaseConnection>,
}

impl CustomerService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn list(&self, restaurant_id: i32) -> AppResult<Vec<CustomerResponse>> {
        let models = customers::Entity::find()
            .filter(customers::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(customers::Column::CreatedAt)
            .all(self.pool.as_ref())
            .await?;

        Ok(models.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn create(
        &self,
        restaurant_id: i32,
        request: CreateCustomerRequest,
    ) -> AppResult<CustomerResponse> {
        let (Some(name), Some(email)) = (&request.name, &request.email) else {
            return Err(AppError::Validation(
                "Name and email are required".to_string(),
            ));
        };

        let model = customers::ActiveModel {
            restaurant_id: Set(restaurant_id),
            name: Set(name.clone()),
            email: Set(email.clone()),
            phone: Set(request.phone.clone()),
            address: Set(request.address.clone()),
            status: Set(request.status.clone().unwrap_or_else(|| "Active".to_string())),
            ..Default::default()
        }
        .insert(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from_db(e, "Email already exists"))?;

        Ok(CustomerResponse::from(model))
    }

    /// Idempotent: succeeds whether or not a row matched the tenant+id pair.
    pub async fn delete(&self, restaurant_id: i32, id: i32) -> AppResult<()> {
        customers::Entity::delete_many()
            .filter(customers::Column::Id.eq(id))
            .filter(customers::Column::RestaurantId.eq(restaurant_id))
            .exec(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn customer_row(id: i32, restaurant_id: i32, email: &str) -> customers::Model {
        customers::Model {
            id,
            restaurant_id,
            name: "John Doe".to_string(),
            email: email.to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            address: None,
            status: "Active".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows_to_dtos() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                customer_row(1, 7, "john.doe@example.com"),
                customer_row(2, 7, "jane.smith@example.com"),
            ]])
            .into_connection();

        let service = CustomerService::new(db);
        let list = service.list(7).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].email, "john.doe@example.com");
        assert_eq!(list[0].status, "Active");
    }

    #[tokio::test]
    async fn test_create_requires_name_and_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = CustomerService::new(db);

        let err = service
            .create(
                7,
                CreateCustomerRequest {
                    name: Some("John".to_string()),
                    email: None,
                    phone: None,
                    address: None,
                    status: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_row_still_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let service = CustomerService::new(db);
        assert!(service.delete(7, 999).await.is_ok());
    }
}
