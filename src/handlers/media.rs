use crate::config::CloudinaryConfig;
use crate::middlewares::tenant_from_request;
use crate::models::UploadSignature;
use crate::utils::sign_upload;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/media/signature",
    tag = "media",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed direct-upload credential", body = UploadSignature),
        (status = 500, description = "Asset host credentials not configured")
    )
)]
pub async fn get_upload_signature(
    cloudinary: web::Data<CloudinaryConfig>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    tenant_from_request(&req)?;

    match sign_upload(&cloudinary) {
        Ok(signature) => Ok(HttpResponse::Ok().json(signature)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn media_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/media").route("/signature", web::get().to(get_upload_signature)));
}
