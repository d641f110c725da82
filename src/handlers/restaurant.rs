use crate::middlewares::tenant_from_request;
use crate::models::*;
use crate::services::RestaurantService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/restaurant",
    tag = "restaurant",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the caller's restaurant", body = RestaurantResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    restaurant_service: web::Data<RestaurantService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match restaurant_service.get_profile(tenant.restaurant_id).await {
        Ok(restaurant) => Ok(HttpResponse::Ok().json(restaurant)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/restaurant",
    tag = "restaurant",
    request_body = UpdateRestaurantRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated; omitted fields keep their stored values", body = RestaurantResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn update_restaurant(
    restaurant_service: web::Data<RestaurantService>,
    req: HttpRequest,
    request: web::Json<UpdateRestaurantRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match restaurant_service
        .update_profile(tenant.restaurant_id, request.into_inner())
        .await
    {
        Ok(restaurant) => Ok(HttpResponse::Ok().json(restaurant)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn restaurant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/restaurant")
            .route("", web::get().to(get_restaurant))
            .route("", web::put().to(update_restaurant)),
    );
}
