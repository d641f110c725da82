pub mod cors;
pub mod tenant;

pub use cors::create_cors;
pub use tenant::{RESTAURANT_ID_HEADER, TenantContext, TenantMiddleware, tenant_from_request};
