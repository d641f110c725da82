use crate::entities::{customer_entity as customers, order_entity as orders};
use crate::error::AppResult;
use crate::models::DashboardStats;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use std::sync::Arc;

// Database-side date predicates, evaluated against the server's current date.
const TODAY: &str = "DATE(created_at) = CURRENT_DATE";
const LAST_7_DAYS: &str = "created_at >= CURRENT_DATE - INTERVAL '7 days'";
const LAST_30_DAYS: &str = "created_at >= CURRENT_DATE - INTERVAL '30 days'";

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    revenue: Option<Decimal>,
}

#[derive(Clone)]
pub struct DashboardService {
    pool: Arc<DatabaseConnection>,
}

impl DashboardService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    /// Full recomputation on every request; there is no caching layer.
    pub async fn get_stats(&self, restaurant_id: i32) -> AppResult<DashboardStats> {
        let active_customers = self.active_customer_count(restaurant_id).await?;

        let todays_orders = self.order_count(restaurant_id, TODAY).await?;
        let todays_revenue = self.order_revenue(restaurant_id, TODAY).await?;

        let weekly_orders = self.order_count(restaurant_id, LAST_7_DAYS).await?;
        let weekly_revenue = self.order_revenue(restaurant_id, LAST_7_DAYS).await?;

        let monthly_orders = self.order_count(restaurant_id, LAST_30_DAYS).await?;
        let monthly_revenue = self.order_revenue(restaurant_id, LAST_30_DAYS).await?;

        Ok(DashboardStats {
            active_customers,
            todays_orders,
            todays_revenue,
            weekly_orders,
            weekly_revenue,
            monthly_orders,
            monthly_revenue,
        })
    }

    async fn active_customer_count(&self, restaurant_id: i32) -> AppResult<i64> {
        let row = customers::Entity::find()
            .filter(customers::Column::RestaurantId.eq(restaurant_id))
            .filter(customers::Column::Status.eq("Active"))
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn order_count(&self, restaurant_id: i32, period: &str) -> AppResult<i64> {
        let row = orders::Entity::find()
            .filter(orders::Column::RestaurantId.eq(restaurant_id))
            .filter(Expr::cust(period))
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn order_revenue(&self, restaurant_id: i32, period: &str) -> AppResult<f64> {
        let row = orders::Entity::find()
            .filter(orders::Column::RestaurantId.eq(restaurant_id))
            .filter(Expr::cust(period))
            .select_only()
            .column_as(Expr::col(orders::Column::TotalAmount).sum(), "revenue")
            .into_model::<RevenueRow>()
            .one(self.pool.as_ref())
            .await?;

        // SUM over zero rows is NULL; an empty tenant reports 0
        Ok(row
            .and_then(|r| r.revenue)
            .and_then(|d| d.to_f64())
            .unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("count", Value::BigInt(Some(count)))])
    }

    fn revenue_row(revenue: Option<Decimal>) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("revenue", Value::Decimal(revenue.map(Box::new)))])
    }

    #[tokio::test]
    async fn test_stats_are_zero_for_an_empty_tenant() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![revenue_row(None)]])
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![revenue_row(None)]])
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![revenue_row(None)]])
            .into_connection();

        let stats = DashboardService::new(db).get_stats(1).await.unwrap();

        assert_eq!(stats.active_customers, 0);
        assert_eq!(stats.todays_orders, 0);
        assert_eq!(stats.todays_revenue, 0.0);
        assert_eq!(stats.monthly_revenue, 0.0);
    }

    #[tokio::test]
    async fn test_stats_map_counts_and_sums() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(4)]])
            .append_query_results(vec![vec![count_row(2)]])
            .append_query_results(vec![vec![revenue_row(Some(Decimal::new(39800, 2)))]])
            .append_query_results(vec![vec![count_row(9)]])
            .append_query_results(vec![vec![revenue_row(Some(Decimal::new(179100, 2)))]])
            .append_query_results(vec![vec![count_row(30)]])
            .append_query_results(vec![vec![revenue_row(Some(Decimal::new(597000, 2)))]])
            .into_connection();

        let stats = DashboardService::new(db).get_stats(1).await.unwrap();

        assert_eq!(stats.active_customers, 4);
        assert_eq!(stats.todays_orders, 2);
        assert_eq!(stats.todays_revenue, 398.0);
        assert_eq!(stats.weekly_orders, 9);
        assert_eq!(stats.weekly_revenue, 1791.0);
        assert_eq!(stats.monthly_orders, 30);
        assert_eq!(stats.monthly_revenue, 5970.0);
    }
}
