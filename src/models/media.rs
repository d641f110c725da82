use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signed direct-upload credential. The client uploads the binary straight
/// to the asset host; the server only signs the request parameters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadSignature {
    pub signature: String,
    pub timestamp: i64,
    pub cloud_name: String,
    pub api_key: String,
    pub folder: String,
}
