use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use bloglist_core::AppError;

use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::modules::users::model::{RegisterUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Username or password too short, or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<RegisterUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::register_user(state.users.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List registered users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users(state.users.as_ref()).await?;
    Ok(Json(users))
}
