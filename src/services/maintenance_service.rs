use crate::error::{AppError, AppResult};
use crate::models::SchemaColumn;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use std::sync::Arc;

/// The six application tables, in dependency order.
pub const MANAGED_TABLES: [&str; 6] = [
    "restaurants",
    "admins",
    "customers",
    "menu_items",
    "orders",
    "payments",
];

/// Operator-only maintenance: schema inspection, sample-data seeding, and
/// table teardown. One statement at a time, no retries; the first failure
/// aborts the whole run.
#[derive(Clone)]
pub struct MaintenanceService {
    pool: Arc<DatabaseConnection>,
}

impl MaintenanceService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn table_schema(&self, table: &str) -> AppResult<Vec<SchemaColumn>> {
        if !MANAGED_TABLES.contains(&table) {
            return Err(AppError::Validation(format!("Unknown table: {table}")));
        }

        let columns = SchemaColumn::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT column_name, data_type, is_nullable, column_default
               FROM information_schema.columns
               WHERE table_name = $1
               ORDER BY ordinal_position"#,
            [table.into()],
        ))
        .all(self.pool.as_ref())
        .await?;

        Ok(columns)
    }

    /// Insert sample customers and menu items for one restaurant. Duplicate
    /// customers are skipped via the per-restaurant unique email; menu rows
    /// have no unique key and insert again on every run.
    pub async fn seed(&self, restaurant_id: i32) -> AppResult<()> {
        self.pool
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                r#"INSERT INTO customers (restaurant_id, name, email, phone, address, status) VALUES
                   ($1, 'John Doe', 'john.doe@example.com', '+1 (555) 123-4567', '123 Oak Street, New York, NY 10001', 'Active'),
                   ($1, 'Jane Smith', 'jane.smith@example.com', '+1 (555) 234-5678', '456 Maple Avenue, Brooklyn, NY 11201', 'Active'),
                   ($1, 'Bob Johnson', 'bob.johnson@example.com', '+1 (555) 345-6789', '789 Pine Road, Queens, NY 11354', 'Inactive'),
                   ($1, 'Alice Brown', 'alice.brown@example.com', '+1 (555) 456-7890', '321 Elm Drive, Manhattan, NY 10002', 'Active'),
                   ($1, 'Charlie Wilson', 'charlie.wilson@example.com', '+1 (555) 567-8901', '654 Cedar Lane, Bronx, NY 10451', 'Active')
                   ON CONFLICT (restaurant_id, email) DO NOTHING"#,
                [restaurant_id.into()],
            ))
            .await?;

        self.pool
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                r#"INSERT INTO menu_items (restaurant_id, name, price, category, description, is_available, type) VALUES
                   ($1, 'Paneer Tikka Masala', 13.99, 'Main Course', 'Cottage cheese in creamy tomato sauce', true, 'Veg'),
                   ($1, 'Chicken Biryani', 15.99, 'Main Course', 'Fragrant basmati rice with spiced chicken', true, 'Non-Veg'),
                   ($1, 'Veg Thali', 16.99, 'Thali', 'Traditional thali with a variety of vegetarian dishes', true, 'Veg'),
                   ($1, 'Non-Veg Thali', 19.99, 'Thali', 'Traditional thali with a variety of non-vegetarian dishes', true, 'Non-Veg'),
                   ($1, 'Masala Dosa', 8.99, 'South Indian', 'Crispy dosa with spiced potato filling', true, 'Veg'),
                   ($1, 'Gulab Jamun', 4.99, 'Desserts', 'Fried milk dumplings in rose syrup', true, 'Veg'),
                   ($1, 'Mango Lassi', 3.99, 'Beverages', 'Sweet yogurt drink with mango pulp', true, 'Veg'),
                   ($1, 'Masala Chai', 2.49, 'Beverages', 'Spiced milk tea', true, 'Veg')
                   ON CONFLICT DO NOTHING"#,
                [restaurant_id.into()],
            ))
            .await?;

        Ok(())
    }

    /// Drop all application tables plus the migration bookkeeping table, in
    /// reverse dependency order so foreign keys never block the teardown.
    pub async fn drop_tables(&self) -> AppResult<()> {
        for table in [
            "payments",
            "orders",
            "menu_items",
            "customers",
            "admins",
            "restaurants",
            "seaql_migrations",
        ] {
            self.pool
                .execute(Statement::from_string(
                    DbBackend::Postgres,
                    format!("DROP TABLE IF EXISTS {table} CASCADE"),
                ))
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_table_schema_rejects_unknown_tables() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = MaintenanceService::new(db);

        let err = service.table_schema("pg_shadow").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
