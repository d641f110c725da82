use crate::entities::restaurant_entity as restaurants;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct RestaurantService {
    pool: Arc<DatabaseConnection>,
}

impl RestaurantService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { pool: pool.into() }
    }

    pub async fn get_profile(&self, restaurant_id: i32) -> AppResult<RestaurantResponse> {
        let model = restaurants::Entity::find_by_id(restaurant_id)
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        Ok(RestaurantResponse::from(model))
    }

    /// COALESCE-style merge: only fields the caller supplied are written,
    /// everything else keeps its stored value.
    pub async fn update_profile(
        &self,
        restaurant_id: i32,
        request: UpdateRestaurantRequest,
    ) -> AppResult<RestaurantResponse> {
        let existing = restaurants::Entity::find_by_id(restaurant_id)
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        let mut model = existing.into_active_model();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(owner_name) = request.owner_name {
            model.owner_name = Set(owner_name);
        }
        if let Some(email) = request.email {
            model.email = Set(email);
        }
        if let Some(phone) = request.phone {
            model.phone = Set(phone);
        }
        if let Some(address) = request.address {
            model.address = Set(address);
        }
        if let Some(city) = request.city {
            model.city = Set(city);
        }
        if let Some(state) = request.state {
            model.state = Set(state);
        }
        if let Some(zip) = request.zip {
            model.zip = Set(zip);
        }
        if let Some(cuisine_type) = request.cuisine_type {
            model.cuisine_type = Set(Some(cuisine_type));
        }
        if let Some(logo_url) = request.logo_url {
            model.logo_url = Set(Some(logo_url));
        }
        if let Some(banner_url) = request.banner_url {
            model.banner_url = Set(Some(banner_url));
        }
        if let Some(url) = request.restaurant_picture_url {
            model.restaurant_picture_url = Set(Some(url));
        }
        if let Some(description) = request.description {
            model.description = Set(Some(description));
        }
        if let Some(tagline) = request.tagline {
            model.tagline = Set(Some(tagline));
        }
        if let Some(website) = request.website {
            model.website = Set(Some(website));
        }
        if let Some(opening_hours) = request.opening_hours {
            model.opening_hours = Set(Some(opening_hours));
        }
        if let Some(delivery_time) = request.delivery_time {
            model.delivery_time = Set(Some(delivery_time));
        }
        if let Some(delivery_radius) = request.delivery_radius {
            model.delivery_radius = Set(Some(delivery_radius));
        }
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(self.pool.as_ref()).await?;
        Ok(RestaurantResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn stored_profile() -> restaurants::Model {
        restaurants::Model {
            id: 1,
            name: "Tandoori Palace".to_string(),
            owner_name: "Asha Patel".to_string(),
            email: "owner@tandoori-palace.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Oak Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip: "10001".to_string(),
            cuisine_type: Some("North Indian".to_string()),
            logo_url: None,
            banner_url: None,
            restaurant_picture_url: None,
            description: None,
            tagline: None,
            website: None,
            opening_hours: None,
            delivery_time: None,
            delivery_radius: None,
            created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        }
    }

    fn empty_update() -> UpdateRestaurantRequest {
        UpdateRestaurantRequest {
            name: None,
            owner_name: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip: None,
            cuisine_type: None,
            logo_url: None,
            banner_url: None,
            restaurant_picture_url: None,
            description: None,
            tagline: None,
            website: None,
            opening_hours: None,
            delivery_time: None,
            delivery_radius: None,
        }
    }

    #[tokio::test]
    async fn test_update_writes_only_supplied_fields() {
        let mut after_update = stored_profile();
        after_update.tagline = Some("Authentic North Indian".to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![stored_profile()]])
                .append_query_results(vec![vec![after_update]])
                .into_connection(),
        );

        let service = RestaurantService::new(db.clone());
        let request = UpdateRestaurantRequest {
            tagline: Some("Authentic North Indian".to_string()),
            ..empty_update()
        };

        let profile = service.update_profile(1, request).await.unwrap();
        assert_eq!(profile.name, "Tandoori Palace");
        assert_eq!(profile.tagline.as_deref(), Some("Authentic North Indian"));

        // Only the supplied field (and updated_at) lands in the SET clause;
        // omitted columns stay Unchanged and are never written.
        drop(service);
        let db = Arc::try_unwrap(db).unwrap_or_else(|_| panic!("db still shared"));
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"\"tagline\" = "#));
        assert!(!log.contains(r#"\"name\" = "#));
    }

    #[tokio::test]
    async fn test_update_missing_restaurant_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<restaurants::Model>::new()])
            .into_connection();

        let err = RestaurantService::new(db)
            .update_profile(42, empty_update())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
