//! Aggregate helpers over collections of blogs.

use bloglist_models::Blog;

/// Always 1. Kept as a smoke fixture for the test harness.
pub fn dummy<T>(_blogs: &[T]) -> u32 {
    1
}

/// Sum of `likes` over all blogs, 0 for an empty slice. Saturates at
/// `i64::MAX` so the total never wraps negative.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs
        .iter()
        .fold(0i64, |total, blog| total.saturating_add(blog.likes))
}
