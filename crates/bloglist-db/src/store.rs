use anyhow::anyhow;
use async_trait::async_trait;
use bloglist_core::AppError;
use bloglist_models::{Blog, NewBlog, NewUser, User};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Conflicts are the client's fault and keep their message; anything the
/// database reports is a 500.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(message) => AppError::bad_request(anyhow!(message)),
            StoreError::Database(err) => {
                AppError::internal(anyhow::Error::new(err).context("Storage operation failed"))
            }
        }
    }
}

/// Result of a delete-by-id. Callers map both variants to the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[async_trait]
pub trait BlogStore: Send + Sync + 'static {
    /// Returns every blog in insertion order.
    async fn find_all(&self) -> Result<Vec<Blog>, StoreError>;

    /// Persists a validated blog and returns it with its assigned id.
    async fn insert(&self, blog: NewBlog) -> Result<Blog, StoreError>;

    /// Sets the like count. Returns `None` if no blog has this id.
    async fn update_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Returns `Err(StoreError::Conflict)` if the username is taken.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_bad_request_with_message() {
        let err = AppError::from(StoreError::Conflict("username must be unique".to_string()));
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.error.to_string(), "username must be unique");
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = AppError::from(StoreError::Database(sqlx::Error::RowNotFound));
        assert_eq!(err.status.as_u16(), 500);
        assert_eq!(err.error.to_string(), "Storage operation failed");
        assert!(format!("{:?}", err.error).contains("no rows returned"));
    }
}
