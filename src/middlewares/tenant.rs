use crate::error::{AppError, AppResult};
use crate::utils::JwtService;
use actix_web::http::Method;
use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

pub const RESTAURANT_ID_HEADER: &str = "x-restaurant-id";

/// Authenticated tenant identity resolved from the access token. Every
/// protected handler reads this from request extensions; no handler trusts
/// a client-supplied restaurant id on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    pub admin_id: i32,
    pub restaurant_id: i32,
}

struct PublicPaths {
    exact_paths: Vec<&'static str>,
    prefix_paths: Vec<&'static str>,
}

impl PublicPaths {
    fn new() -> Self {
        Self {
            exact_paths: vec!["/swagger-ui", "/swagger-ui/", "/api-docs/openapi.json"],
            // /api/auth issues tokens; /api/dev is operator tooling and ships
            // unauthenticated, matching the deployed behavior.
            prefix_paths: vec!["/swagger-ui/", "/api-docs/", "/api/auth/", "/api/dev/"],
        }
    }

    fn is_public_path(&self, path: &str) -> bool {
        if self.exact_paths.contains(&path) {
            return true;
        }

        self.prefix_paths
            .iter()
            .any(|&prefix| path.starts_with(prefix))
    }
}

pub struct TenantMiddleware {
    jwt_service: JwtService,
}

impl TenantMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TenantMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TenantMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TenantMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            public_paths: PublicPaths::new(),
        }))
    }
}

pub struct TenantMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    public_paths: PublicPaths,
}

impl<S, B> Service<ServiceRequest> for TenantMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflights pass through
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        if self.public_paths.is_public_path(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req.headers().get("Authorization");

        let token = if let Some(auth_value) = auth_header {
            if let Ok(auth_str) = auth_value.to_str() {
                auth_str.strip_prefix("Bearer ")
            } else {
                None
            }
        } else {
            None
        };

        let Some(token) = token else {
            let error = AppError::Auth("Missing access token".to_string());
            return Box::pin(async move { Err(error.into()) });
        };

        let claims = match self.jwt_service.verify_access_token(token) {
            Ok(claims) => claims,
            Err(_) => {
                let error = AppError::Auth("Invalid access token".to_string());
                return Box::pin(async move { Err(error.into()) });
            }
        };

        let Ok(admin_id) = claims.sub.parse::<i32>() else {
            let error = AppError::Auth("Invalid access token".to_string());
            return Box::pin(async move { Err(error.into()) });
        };

        // The legacy tenant header is tolerated but no longer authoritative:
        // when present it must agree with the signed claim.
        if let Some(header_value) = req.headers().get(RESTAURANT_ID_HEADER)
            && header_value
                .to_str()
                .ok()
                .and_then(|v| v.parse::<i32>().ok())
                != Some(claims.restaurant_id)
        {
            let error = AppError::Auth("Restaurant ID does not match session".to_string());
            return Box::pin(async move { Err(error.into()) });
        }

        req.extensions_mut().insert(TenantContext {
            admin_id,
            restaurant_id: claims.restaurant_id,
        });

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}

/// Tenant context for a handler; fails with a 400-class error before any
/// database access when the context is missing.
pub fn tenant_from_request(req: &HttpRequest) -> AppResult<TenantContext> {
    req.extensions()
        .get::<TenantContext>()
        .copied()
        .ok_or_else(|| AppError::Validation("Restaurant ID is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        let paths = PublicPaths::new();
        assert!(paths.is_public_path("/api/auth/login"));
        assert!(paths.is_public_path("/api/auth/signup"));
        assert!(paths.is_public_path("/api/dev/seed"));
        assert!(paths.is_public_path("/api-docs/openapi.json"));

        assert!(!paths.is_public_path("/api/customers"));
        assert!(!paths.is_public_path("/api/restaurant"));
        assert!(!paths.is_public_path("/api/dashboard"));
    }
}
