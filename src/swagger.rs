use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::signup,
        handlers::customers::list_customers,
        handlers::customers::create_customer,
        handlers::customers::delete_customer,
        handlers::menu::list_menu_items,
        handlers::menu::create_menu_item,
        handlers::menu::update_menu_item,
        handlers::menu::delete_menu_item,
        handlers::orders::list_orders,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::update_restaurant,
        handlers::dashboard::get_dashboard_stats,
        handlers::media::get_upload_signature,
        handlers::dev::get_table_schema,
        handlers::dev::seed_database,
        handlers::dev::drop_tables,
    ),
    components(
        schemas(
            LoginRequest,
            SignupRequest,
            AdminInfo,
            AuthResponse,
            SignupResponse,
            CustomerResponse,
            CreateCustomerRequest,
            MenuItemResponse,
            CreateMenuItemRequest,
            OrderResponse,
            CreateOrderRequest,
            UpdateOrderRequest,
            RestaurantResponse,
            UpdateRestaurantRequest,
            DashboardStats,
            UploadSignature,
            SchemaColumn,
            SeedRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication API"),
        (name = "customers", description = "Customer management API"),
        (name = "menu", description = "Menu item management API"),
        (name = "orders", description = "Order management API"),
        (name = "restaurant", description = "Restaurant profile API"),
        (name = "dashboard", description = "Dashboard aggregates API"),
        (name = "media", description = "Media upload signing API"),
        (name = "dev", description = "Developer maintenance API"),
    ),
    info(
        title = "Restaurant Admin Backend API",
        version = "1.0.0",
        description = "Multi-tenant restaurant administration REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
