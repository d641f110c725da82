use crate::error::AppError;
use crate::middlewares::tenant_from_request;
use crate::models::*;
use crate::services::CustomerService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Customers for the caller's restaurant, newest first", body = [CustomerResponse]),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn list_customers(
    customer_service: web::Data<CustomerService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match customer_service.list(tenant.restaurant_id).await {
        Ok(customers) => Ok(HttpResponse::Ok().json(customers)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Name and email are required"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_customer(
    customer_service: web::Data<CustomerService>,
    req: HttpRequest,
    request: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match customer_service
        .create(tenant.restaurant_id, request.into_inner())
        .await
    {
        Ok(customer) => Ok(HttpResponse::Created().json(customer)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/customers",
    tag = "customers",
    params(("id" = i32, Query, description = "Customer id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted (idempotent)"),
        (status = 400, description = "Customer ID is required")
    )
)]
pub async fn delete_customer(
    customer_service: web::Data<CustomerService>,
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    let Some(id) = query.id else {
        return Ok(
            AppError::Validation("Customer ID is required".to_string()).error_response(),
        );
    };

    match customer_service.delete(tenant.restaurant_id, id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn customers_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("", web::post().to(create_customer))
            .route("", web::delete().to(delete_customer)),
    );
}
