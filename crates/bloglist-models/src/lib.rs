//! # Bloglist Models
//!
//! Domain models and DTOs for the Bloglist API, together with the
//! validation and normalization rules applied before anything is persisted.
//!
//! - [`blogs`]: Blog bookmarks, creation payloads and like-count updates
//! - [`users`]: Registered users and registration payloads
//!
//! # Example
//!
//! ```ignore
//! use bloglist_models::CreateBlogDto;
//!
//! let new_blog = dto.normalize()?; // likes defaults to 0
//! ```

pub mod blogs;
pub mod users;

pub use blogs::{Blog, CreateBlogDto, NewBlog, UpdateLikesDto};
pub use users::{NewUser, NewUserInput, RegisterUserDto, User};
