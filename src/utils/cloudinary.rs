use crate::config::CloudinaryConfig;
use crate::error::{AppError, AppResult};
use crate::models::UploadSignature;
use chrono::Utc;
use sha2::{Digest, Sha256};

pub const DEFAULT_UPLOAD_FOLDER: &str = "restaurant-admin";

/// Produce a signed-upload credential. The client POSTs the binary directly
/// to the asset host with these parameters; the upload never transits us.
pub fn sign_upload(config: &CloudinaryConfig) -> AppResult<UploadSignature> {
    if config.api_secret.is_empty() {
        return Err(AppError::Config(
            "CLOUDINARY_API_SECRET is not set".to_string(),
        ));
    }

    let folder = config
        .upload_folder
        .clone()
        .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string());
    let timestamp = Utc::now().timestamp();

    Ok(UploadSignature {
        signature: sign_params(&folder, timestamp, &config.api_secret),
        timestamp,
        cloud_name: config.cloud_name.clone(),
        api_key: config.api_key.clone(),
        folder,
    })
}

/// Parameters are serialized in alphabetical order, concatenated with the
/// API secret, and digested (SHA-256 variant of the upload signature).
fn sign_params(folder: &str, timestamp: i64, api_secret: &str) -> String {
    let to_sign = format!("folder={folder}&timestamp={timestamp}{api_secret}");
    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign_params("restaurant-admin", 1_700_000_000, "secret");
        let b = sign_params("restaurant-admin", 1_700_000_000, "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded sha256
    }

    #[test]
    fn test_signature_depends_on_secret_and_params() {
        let base = sign_params("restaurant-admin", 1_700_000_000, "secret");
        assert_ne!(base, sign_params("restaurant-admin", 1_700_000_000, "other"));
        assert_ne!(base, sign_params("restaurant-admin", 1_700_000_001, "secret"));
        assert_ne!(base, sign_params("menus", 1_700_000_000, "secret"));
    }

    #[test]
    fn test_sign_upload_requires_secret() {
        let config = CloudinaryConfig::default();
        assert!(sign_upload(&config).is_err());
    }
}
