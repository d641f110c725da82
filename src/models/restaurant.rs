use crate::entities::restaurant_entity as restaurants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub cuisine_type: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub restaurant_picture_url: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<String>,
    pub delivery_time: Option<String>,
    pub delivery_radius: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// COALESCE-style profile update: every field is optional and an omitted
/// field keeps its stored value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub owner_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub cuisine_type: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub restaurant_picture_url: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub website: Option<String>,
    #[schema(example = "9:00 AM - 10:00 PM")]
    pub opening_hours: Option<String>,
    #[schema(example = "30-45 min")]
    pub delivery_time: Option<String>,
    #[schema(example = "5 km")]
    pub delivery_radius: Option<String>,
}

impl From<restaurants::Model> for RestaurantResponse {
    fn from(model: restaurants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            owner_name: model.owner_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            state: model.state,
            zip: model.zip,
            cuisine_type: model.cuisine_type,
            logo_url: model.logo_url,
            banner_url: model.banner_url,
            restaurant_picture_url: model.restaurant_picture_url,
            description: model.description,
            tagline: model.tagline,
            website: model.website,
            opening_hours: model.opening_hours,
            delivery_time: model.delivery_time,
            delivery_radius: model.delivery_radius,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
