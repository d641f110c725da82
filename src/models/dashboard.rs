use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-tenant aggregates, recomputed in full on every request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub active_customers: i64,
    pub todays_orders: i64,
    pub todays_revenue: f64,
    pub weekly_orders: i64,
    pub weekly_revenue: f64,
    pub monthly_orders: i64,
    pub monthly_revenue: f64,
}
