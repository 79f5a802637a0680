use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::modules::blogs::model::{Blog, CreateBlogDto, UpdateLikesDto};
use crate::modules::users::model::{RegisterUserDto, User};

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::blogs::controller::get_blogs,
        crate::modules::blogs::controller::create_blog,
        crate::modules::blogs::controller::update_blog_likes,
        crate::modules::blogs::controller::delete_blog,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_users,
    ),
    components(
        schemas(
            Blog,
            CreateBlogDto,
            UpdateLikesDto,
            User,
            RegisterUserDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Blogs", description = "Blog bookmarks"),
        (name = "Users", description = "User registration")
    ),
    info(
        title = "Bloglist API",
        version = "0.1.0",
        description = "Bookmark blog posts and register users"
    )
)]
pub struct ApiDoc;
