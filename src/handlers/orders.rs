use crate::error::AppError;
use crate::middlewares::tenant_from_request;
use crate::models::*;
use crate::services::OrderService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders for the caller's restaurant, newest first", body = [OrderResponse]),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn list_orders(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match order_service.list(tenant.restaurant_id).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(orders)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Customer ID and total amount are required"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match order_service
        .create(tenant.restaurant_id, request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Created().json(order)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders",
    tag = "orders",
    params(("id" = i32, Query, description = "Order id")),
    request_body = UpdateOrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order status updated", body = OrderResponse),
        (status = 400, description = "Missing id or status"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    query: web::Query<IdQuery>,
    request: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    let Some(id) = query.id else {
        return Ok(AppError::Validation("Order ID is required".to_string()).error_response());
    };

    match order_service
        .update_status(tenant.restaurant_id, id, request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(order)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/orders",
    tag = "orders",
    params(("id" = i32, Query, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted (idempotent)"),
        (status = 400, description = "Order ID is required")
    )
)]
pub async fn delete_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    let Some(id) = query.id else {
        return Ok(AppError::Validation("Order ID is required".to_string()).error_response());
    };

    match order_service.delete(tenant.restaurant_id, id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn orders_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(list_orders))
            .route("", web::post().to(create_order))
            .route("", web::put().to(update_order))
            .route("", web::delete().to(delete_order)),
    );
}
