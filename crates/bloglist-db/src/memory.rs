//! In-process store used when no database is configured, and by the test
//! suites. Data lives only as long as the process.

use async_trait::async_trait;
use bloglist_models::{Blog, NewBlog, NewUser, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{BlogStore, DeleteOutcome, StoreError, UserStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    blogs: RwLock<Vec<Blog>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, StoreError> {
        let blog = blog.into_blog(Uuid::new_v4());
        self.blogs.write().await.push(blog.clone());
        Ok(blog)
    }

    async fn update_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError> {
        let mut blogs = self.blogs.write().await;
        Ok(blogs.iter_mut().find(|blog| blog.id == id).map(|blog| {
            blog.likes = likes;
            blog.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, StoreError> {
        let mut blogs = self.blogs.write().await;
        match blogs.iter().position(|blog| blog.id == id) {
            Some(index) => {
                blogs.remove(index);
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(StoreError::Conflict("username must be unique".to_string()));
        }

        let user = user.into_user(Uuid::new_v4());
        users.push(user.clone());
        Ok(user)
    }
}
