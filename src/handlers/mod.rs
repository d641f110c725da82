pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod dev;
pub mod media;
pub mod menu;
pub mod orders;
pub mod restaurant;

pub use auth::auth_config;
pub use customers::customers_config;
pub use dashboard::dashboard_config;
pub use dev::dev_config;
pub use media::media_config;
pub use menu::menu_config;
pub use orders::orders_config;
pub use restaurant::restaurant_config;
