use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a database error to the 409 branch when it is a unique-constraint
    /// violation, so duplicate keys never surface as a 500.
    pub fn from_db(err: DbErr, conflict_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => {
                log::warn!("Validation error: {msg}");
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            AppError::Auth(msg) => {
                log::warn!("Authentication error: {msg}");
                HttpResponse::Unauthorized().json(json!({ "error": msg }))
            }
            AppError::Jwt(err) => {
                log::warn!("JWT error: {err}");
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid access token" }))
            }
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "error": msg })),
            AppError::Conflict(msg) => {
                log::warn!("Conflict: {msg}");
                HttpResponse::Conflict().json(json!({ "error": msg }))
            }
            AppError::Database(err) => {
                log::error!("Database error: {err}");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Database error",
                    "details": err.to_string(),
                }))
            }
            AppError::Config(msg) | AppError::Internal(msg) => {
                log::error!("Internal error: {msg}");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error",
                    "details": msg,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("name required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Auth("Invalid email or password".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("Restaurant not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("Email already exists".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_status_matches() {
        let resp = AppError::Validation("Name and email are required".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Conflict("Email already exists".into()).error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_plain_db_error_is_not_conflict() {
        let err = AppError::from_db(DbErr::Custom("boom".into()), "Email already exists");
        assert!(matches!(err, AppError::Database(_)));
    }
}
