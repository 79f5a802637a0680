use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{create_blog, delete_blog, get_blogs, update_blog_likes};

pub fn init_blogs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_blogs).post(create_blog))
        .route(
            "/{id}",
            put(update_blog_likes)
                .patch(update_blog_likes)
                .delete(delete_blog),
        )
}
