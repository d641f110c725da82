pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod maintenance;
pub mod media;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use auth::*;
pub use customer::*;
pub use dashboard::*;
pub use maintenance::*;
pub use media::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
