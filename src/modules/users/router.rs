use crate::modules::users::controller::{get_users, register_user};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", get(get_users).post(register_user))
}
