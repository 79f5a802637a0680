use anyhow::Context;
use bloglist_core::{AppError, hash_password};
use bloglist_db::UserStore;
use tracing::{info, instrument};

use crate::modules::users::model::{RegisterUserDto, User};

pub struct UserService;

impl UserService {
    #[instrument(skip(store, dto), fields(username = ?dto.username))]
    pub async fn register_user(store: &dyn UserStore, dto: RegisterUserDto) -> Result<User, AppError> {
        let input = dto.normalize()?;

        let password = input.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("Password hashing task failed")??;

        let user = store.insert(input.with_hash(password_hash)).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(store))]
    pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
        Ok(store.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use bloglist_core::verify_password;
    use bloglist_db::MemoryStore;

    fn dto(username: &str, password: &str) -> RegisterUserDto {
        RegisterUserDto {
            username: Some(username.to_string()),
            name: Some("Matti Luukkainen".to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let store = MemoryStore::new();

        let user = UserService::register_user(&store, dto("mluukkai", "salainen"))
            .await
            .unwrap();
        assert_ne!(user.password_hash, "salainen");
        assert!(verify_password("salainen", &user.password_hash).unwrap());
        assert_eq!(UserService::list_users(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_bad_request() {
        let store = MemoryStore::new();
        UserService::register_user(&store, dto("mluukkai", "salainen"))
            .await
            .unwrap();

        let err = UserService::register_user(&store, dto("mluukkai", "another"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "username must be unique");
    }

    #[tokio::test]
    async fn test_invalid_registration_is_not_persisted() {
        let store = MemoryStore::new();

        let err = UserService::register_user(&store, dto("ml", "salainen"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(UserService::list_users(&store).await.unwrap().is_empty());
    }
}
