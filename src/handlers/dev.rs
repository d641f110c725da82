//! Developer-only endpoints: schema introspection and seeding/teardown.
//! These mirror the dbtool commands for operators who only have HTTP access.

use crate::error::AppError;
use crate::models::SeedRequest;
use crate::services::MaintenanceService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/dev/schema/{table}",
    tag = "dev",
    params(("table" = String, Path, description = "One of the six application tables")),
    responses(
        (status = 200, description = "Column listing from information_schema"),
        (status = 400, description = "Unknown table")
    )
)]
pub async fn get_table_schema(
    maintenance_service: web::Data<MaintenanceService>,
    table: web::Path<String>,
) -> Result<HttpResponse> {
    match maintenance_service.table_schema(&table).await {
        Ok(columns) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "columns": columns,
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/dev/seed",
    tag = "dev",
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Sample rows inserted"),
        (status = 400, description = "Restaurant ID is required")
    )
)]
pub async fn seed_database(
    maintenance_service: web::Data<MaintenanceService>,
    request: web::Json<SeedRequest>,
) -> Result<HttpResponse> {
    let Some(restaurant_id) = request.restaurant_id else {
        return Ok(
            AppError::Validation("Restaurant ID is required".to_string()).error_response(),
        );
    };

    match maintenance_service.seed(restaurant_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Sample data added successfully",
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/dev/drop-tables",
    tag = "dev",
    responses(
        (status = 200, description = "All application tables dropped")
    )
)]
pub async fn drop_tables(
    maintenance_service: web::Data<MaintenanceService>,
) -> Result<HttpResponse> {
    match maintenance_service.drop_tables().await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "All tables dropped successfully",
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dev_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dev")
            .route("/schema/{table}", web::get().to(get_table_schema))
            .route("/seed", web::post().to(seed_database))
            .route("/drop-tables", web::post().to(drop_tables)),
    );
}
