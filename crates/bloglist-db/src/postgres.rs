//! PostgreSQL implementation of the store traits.
//!
//! The schema lives in `migrations/` at the workspace root. Ids are
//! generated by the database and rows are listed in creation order.

use async_trait::async_trait;
use bloglist_models::{Blog, NewBlog, NewUser, User};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{BlogStore, DeleteOutcome, StoreError, UserStore};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogStore for PgStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Blog>, StoreError> {
        let blogs = sqlx::query_as::<_, Blog>(
            r#"SELECT id, title, author, url, likes
               FROM blogs
               ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(blogs)
    }

    #[instrument(skip(self))]
    async fn insert(&self, blog: NewBlog) -> Result<Blog, StoreError> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"INSERT INTO blogs (title, author, url, likes)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, author, url, likes"#,
        )
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(blog.likes)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    #[instrument(skip(self))]
    async fn update_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"UPDATE blogs
               SET likes = $2
               WHERE id = $1
               RETURNING id, title, author, url, likes"#,
        )
        .bind(id)
        .bind(likes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, StoreError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, username, name, password_hash
               FROM users
               ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, name, password_hash)
               VALUES ($1, $2, $3)
               RETURNING id, username, name, password_hash"#,
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return StoreError::Conflict("username must be unique".to_string());
            }
            StoreError::from(e)
        })
    }
}
