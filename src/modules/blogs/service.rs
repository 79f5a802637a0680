use anyhow::anyhow;
use bloglist_core::AppError;
use bloglist_db::{BlogStore, DeleteOutcome};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::modules::blogs::model::{Blog, CreateBlogDto, UpdateLikesDto};

pub struct BlogService;

impl BlogService {
    #[instrument(skip(store))]
    pub async fn list_blogs(store: &dyn BlogStore) -> Result<Vec<Blog>, AppError> {
        Ok(store.find_all().await?)
    }

    #[instrument(skip(store))]
    pub async fn create_blog(store: &dyn BlogStore, dto: CreateBlogDto) -> Result<Blog, AppError> {
        let new_blog = dto.normalize()?;
        let blog = store.insert(new_blog).await?;

        Ok(blog)
    }

    /// Unknown and malformed ids both resolve to `NotFound`; an id that is
    /// not a UUID cannot name a stored blog.
    #[instrument(skip(store))]
    pub async fn delete_blog(store: &dyn BlogStore, id: &str) -> Result<DeleteOutcome, AppError> {
        let Ok(id) = id.parse::<Uuid>() else {
            debug!("Blog id is not a UUID, nothing to delete");
            return Ok(DeleteOutcome::NotFound);
        };

        let outcome = store.delete(id).await?;

        debug!(?outcome, "Blog delete finished");
        Ok(outcome)
    }

    #[instrument(skip(store))]
    pub async fn update_likes(
        store: &dyn BlogStore,
        id: &str,
        dto: UpdateLikesDto,
    ) -> Result<Blog, AppError> {
        let likes = dto.normalize()?;
        let not_found = || AppError::not_found(anyhow!("blog not found"));

        let id = id.parse::<Uuid>().map_err(|_| not_found())?;

        store.update_likes(id, likes).await?.ok_or_else(not_found)
    }
}
