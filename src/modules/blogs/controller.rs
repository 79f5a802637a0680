use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use bloglist_core::AppError;

use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::modules::blogs::model::{Blog, CreateBlogDto, UpdateLikesDto};
use crate::modules::blogs::service::BlogService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "All blogs in insertion order", body = Vec<Blog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn get_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, AppError> {
    let blogs = BlogService::list_blogs(state.blogs.as_ref()).await?;
    Ok(Json(blogs))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog created successfully", body = Blog),
        (status = 400, description = "Missing title, author or url", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn create_blog(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateBlogDto>,
) -> Result<(StatusCode, Json<Blog>), AppError> {
    let blog = BlogService::create_blog(state.blogs.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog ID")
    ),
    request_body = UpdateLikesDto,
    responses(
        (status = 200, description = "Likes updated", body = Blog),
        (status = 400, description = "Missing or negative likes", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn update_blog_likes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(dto): JsonBody<UpdateLikesDto>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::update_likes(state.blogs.as_ref(), &id, dto).await?;
    Ok(Json(blog))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog ID")
    ),
    responses(
        (status = 204, description = "Blog deleted, or no blog had this id"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    BlogService::delete_blog(state.blogs.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
