pub mod admins;
pub mod customers;
pub mod menu_items;
pub mod orders;
pub mod payments;
pub mod restaurants;

pub use admins as admin_entity;
pub use customers as customer_entity;
pub use menu_items as menu_item_entity;
pub use orders as order_entity;
pub use payments as payment_entity;
pub use restaurants as restaurant_entity;
