pub mod auth_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod maintenance_service;
pub mod menu_service;
pub mod order_service;
pub mod restaurant_service;

pub use auth_service::AuthService;
pub use customer_service::CustomerService;
pub use dashboard_service::DashboardService;
pub use maintenance_service::{MANAGED_TABLES, MaintenanceService};
pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use restaurant_service::RestaurantService;
