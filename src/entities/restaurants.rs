use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
