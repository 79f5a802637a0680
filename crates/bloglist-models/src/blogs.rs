//! Blog domain models and DTOs.
//!
//! [`CreateBlogDto`] is the raw creation payload; every field is optional so
//! that a missing field becomes a validation failure rather than a decode
//! error. [`CreateBlogDto::normalize`] applies the defaults and produces a
//! [`NewBlog`] that is safe to persist.

use std::fmt;

use bloglist_core::{ValidationFailure, first_failure};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A persisted blog bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// A validated blog ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl NewBlog {
    pub fn into_blog(self, id: Uuid) -> Blog {
        Blog {
            id,
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author is required")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url is required")
    )]
    pub url: Option<String>,
    /// Defaults to 0 when absent, null, `false` or `""`.
    #[serde(default, deserialize_with = "deserialize_likes")]
    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Accepts an integer, or one of the empty values `null`, `false` and `""`
/// which all read as "not given". Other strings and `true` are type errors.
fn deserialize_likes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LikesVisitor;

    impl<'de> Visitor<'de> for LikesVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, null, false or an empty string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            i64::try_from(value)
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            if value {
                Err(E::invalid_type(Unexpected::Bool(value), &self))
            } else {
                Ok(None)
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            if value.is_empty() {
                Ok(None)
            } else {
                Err(E::invalid_type(Unexpected::Str(value), &self))
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LikesVisitor)
}

impl CreateBlogDto {
    const FIELD_ORDER: &'static [&'static str] = &["title", "author", "url", "likes"];

    pub fn normalize(self) -> Result<NewBlog, ValidationFailure> {
        let likes = self.likes.unwrap_or(0);

        self.validate()
            .map_err(|errors| first_failure(&errors, Self::FIELD_ORDER))?;

        match (self.title, self.author, self.url) {
            (Some(title), Some(author), Some(url)) => Ok(NewBlog {
                title,
                author,
                url,
                likes,
            }),
            (None, _, _) => Err(ValidationFailure::new("title", "title is required")),
            (_, None, _) => Err(ValidationFailure::new("author", "author is required")),
            (_, _, None) => Err(ValidationFailure::new("url", "url is required")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLikesDto {
    #[validate(
        required(message = "likes is required"),
        range(min = 0, message = "likes must not be negative")
    )]
    pub likes: Option<i64>,
}

impl UpdateLikesDto {
    pub fn normalize(self) -> Result<i64, ValidationFailure> {
        self.validate()
            .map_err(|errors| first_failure(&errors, &["likes"]))?;

        self.likes
            .ok_or_else(|| ValidationFailure::new("likes", "likes is required"))
    }
}
