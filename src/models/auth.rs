use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "owner@tandoori-palace.com")]
    pub email: Option<String>,
    #[schema(example = "Password123")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "Tandoori Palace")]
    pub restaurant_name: Option<String>,
    #[schema(example = "Asha Patel")]
    pub owner_name: Option<String>,
    #[schema(example = "owner@tandoori-palace.com")]
    pub email: Option<String>,
    #[schema(example = "+1 (555) 123-4567")]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    #[schema(example = "North Indian")]
    pub cuisine_type: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub admin: AdminInfo,
    pub restaurant_id: i32,
    pub restaurant_name: String,
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub restaurant_id: i32,
    pub restaurant_name: String,
    pub admin_id: i32,
    pub access_token: String,
    pub expires_in: i64,
}
