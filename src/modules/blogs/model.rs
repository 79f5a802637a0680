pub use bloglist_models::blogs::{Blog, CreateBlogDto, NewBlog, UpdateLikesDto};
