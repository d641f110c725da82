use crate::middlewares::tenant_from_request;
use crate::models::DashboardStats;
use crate::services::DashboardService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tenant aggregates for today / 7 days / 30 days", body = DashboardStats),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn get_dashboard_stats(
    dashboard_service: web::Data<DashboardService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match dashboard_service.get_stats(tenant.restaurant_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(stats)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dashboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/dashboard").route("", web::get().to(get_dashboard_stats)));
}
