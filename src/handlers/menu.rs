use crate::error::AppError;
use crate::middlewares::tenant_from_request;
use crate::models::*;
use crate::services::MenuService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/menu",
    tag = "menu",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Menu items ordered by category, then name", body = [MenuItemResponse]),
        (status = 401, description = "Missing or invalid access token")
    )
)]
pub async fn list_menu_items(
    menu_service: web::Data<MenuService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match menu_service.list(tenant.restaurant_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/menu",
    tag = "menu",
    request_body = CreateMenuItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Name, price, and category are required")
    )
)]
pub async fn create_menu_item(
    menu_service: web::Data<MenuService>,
    req: HttpRequest,
    request: web::Json<CreateMenuItemRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    match menu_service
        .create(tenant.restaurant_id, request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Created().json(item)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/menu",
    tag = "menu",
    params(("id" = i32, Query, description = "Menu item id")),
    request_body = UpdateMenuItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Menu item replaced", body = MenuItemResponse),
        (status = 400, description = "Missing id or required fields"),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn update_menu_item(
    menu_service: web::Data<MenuService>,
    req: HttpRequest,
    query: web::Query<IdQuery>,
    request: web::Json<UpdateMenuItemRequest>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    let Some(id) = query.id else {
        return Ok(
            AppError::Validation("Menu item ID is required".to_string()).error_response(),
        );
    };

    match menu_service
        .update(tenant.restaurant_id, id, request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(item)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/menu",
    tag = "menu",
    params(("id" = i32, Query, description = "Menu item id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted (idempotent)"),
        (status = 400, description = "Menu item ID is required")
    )
)]
pub async fn delete_menu_item(
    menu_service: web::Data<MenuService>,
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse> {
    let tenant = tenant_from_request(&req)?;

    let Some(id) = query.id else {
        return Ok(
            AppError::Validation("Menu item ID is required".to_string()).error_response(),
        );
    };

    match menu_service.delete(tenant.restaurant_id, id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn menu_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/menu")
            .route("", web::get().to(list_menu_items))
            .route("", web::post().to(create_menu_item))
            .route("", web::put().to(update_menu_item))
            .route("", web::delete().to(delete_menu_item)),
    );
}
