use crate::entities::{admin_entity as admins, restaurant_entity as restaurants};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{JwtService, hash_password, validate_email, validate_password, verify_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct AuthService {
    pool: Arc<DatabaseConnection>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: impl Into<Arc<DatabaseConnection>>, jwt_service: JwtService) -> Self {
        Self { pool: pool.into(), jwt_service }
    }

    /// The failure message is identical for an unknown email and a wrong
    /// password, so the endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let (Some(email), Some(password)) = (&request.email, &request.password) else {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        };

        let admin = admins::Entity::find()
            .filter(admins::Column::Email.eq(email.as_str()))
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::Auth(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(password, &admin.password_hash)? {
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        let restaurant = restaurants::Entity::find_by_id(admin.restaurant_id)
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::Auth(INVALID_CREDENTIALS.to_string()))?;

        let access_token = self
            .jwt_service
            .generate_access_token(admin.id, restaurant.id)?;

        Ok(AuthResponse {
            admin: AdminInfo {
                id: admin.id,
                name: admin.name,
                email: admin.email,
                phone: admin.phone,
            },
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name,
            access_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    /// Creates the restaurant and its admin in one transaction; a failure on
    /// the second insert can no longer leave an orphaned restaurant row.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        let (
            Some(restaurant_name),
            Some(owner_name),
            Some(email),
            Some(phone),
            Some(address),
            Some(city),
            Some(state),
            Some(zip),
            Some(password),
        ) = (
            &request.restaurant_name,
            &request.owner_name,
            &request.email,
            &request.phone,
            &request.address,
            &request.city,
            &request.state,
            &request.zip,
            &request.password,
        )
        else {
            return Err(AppError::Validation(
                "All required fields must be filled".to_string(),
            ));
        };

        validate_email(email)?;
        validate_password(password)?;

        let existing = admins::Entity::find()
            .filter(admins::Column::Email.eq(email.as_str()))
            .one(self.pool.as_ref())
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(password)?;

        let txn = self.pool.begin().await?;

        let restaurant = restaurants::ActiveModel {
            name: Set(restaurant_name.clone()),
            owner_name: Set(owner_name.clone()),
            email: Set(email.clone()),
            phone: Set(phone.clone()),
            address: Set(address.clone()),
            city: Set(city.clone()),
            state: Set(state.clone()),
            zip: Set(zip.clone()),
            cuisine_type: Set(request.cuisine_type.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let admin = admins::ActiveModel {
            name: Set(owner_name.clone()),
            email: Set(email.clone()),
            phone: Set(phone.clone()),
            password_hash: Set(password_hash),
            restaurant_id: Set(restaurant.id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::from_db(e, "Email already registered"))?;

        txn.commit().await?;

        let access_token = self
            .jwt_service
            .generate_access_token(admin.id, restaurant.id)?;

        Ok(SignupResponse {
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name,
            admin_id: admin.id,
            access_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    fn service(db: DatabaseConnection) -> AuthService {
        AuthService::new(db, JwtService::new("test-secret", 3600))
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_requires_email_and_password() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = service(db)
            .login(LoginRequest {
                email: Some("owner@tandoori-palace.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_failure_message_does_not_leak_which_part_was_wrong() {
        // Unknown email: the admin lookup comes back empty
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<admins::Model>::new()])
            .into_connection();
        let unknown_email = service(db)
            .login(login_request("nobody@example.com", "Password123"))
            .await
            .unwrap_err();

        // Known email, wrong password
        let admin = admins::Model {
            id: 1,
            name: "Asha Patel".to_string(),
            email: "owner@tandoori-palace.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            password_hash: hash_password("Password123").unwrap(),
            restaurant_id: 1,
            created_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin]])
            .into_connection();
        let wrong_password = service(db)
            .login(login_request("owner@tandoori-palace.com", "NotThePassword"))
            .await
            .unwrap_err();

        let (AppError::Auth(a), AppError::Auth(b)) = (unknown_email, wrong_password) else {
            panic!("expected auth errors");
        };
        assert_eq!(a, "Invalid email or password");
        assert_eq!(a, b);
    }
}
