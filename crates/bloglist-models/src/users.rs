//! User domain models and DTOs.

use bloglist_core::{ValidationFailure, first_failure};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user.
///
/// The password hash is kept for storage but never serialized into a
/// response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    #[serde(skip)]
    pub password_hash: String,
}

/// A user ready to be inserted, password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            password_hash: self.password_hash,
        }
    }
}

/// Registration input that passed validation. Still holds the plaintext
/// password, so it is not `Debug`.
#[derive(Clone)]
pub struct NewUserInput {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

impl NewUserInput {
    pub fn with_hash(self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username,
            name: self.name,
            password_hash,
        }
    }
}

#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(
        required(message = "a username of at least 3 characters is required"),
        length(min = 3, message = "a username of at least 3 characters is required")
    )]
    pub username: Option<String>,
    pub name: Option<String>,
    #[validate(
        required(message = "a password of at least 3 characters is required"),
        length(min = 3, message = "a password of at least 3 characters is required")
    )]
    pub password: Option<String>,
}

impl std::fmt::Debug for RegisterUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserDto")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl RegisterUserDto {
    const FIELD_ORDER: &'static [&'static str] = &["username", "password"];

    pub fn normalize(self) -> Result<NewUserInput, ValidationFailure> {
        self.validate()
            .map_err(|errors| first_failure(&errors, Self::FIELD_ORDER))?;

        let username = self.username.ok_or_else(|| {
            ValidationFailure::new("username", "a username of at least 3 characters is required")
        })?;
        let password = self.password.ok_or_else(|| {
            ValidationFailure::new("password", "a password of at least 3 characters is required")
        })?;

        Ok(NewUserInput {
            username,
            name: self.name,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(username: Option<&str>, password: Option<&str>) -> RegisterUserDto {
        RegisterUserDto {
            username: username.map(str::to_string),
            name: Some("Arto Hellas".to_string()),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_registration() {
        let input = dto(Some("hellas"), Some("sekret")).normalize().unwrap();
        assert_eq!(input.username, "hellas");
        assert_eq!(input.password, "sekret");
        assert_eq!(input.name.as_deref(), Some("Arto Hellas"));
    }

    #[test]
    fn test_three_characters_is_enough() {
        assert!(dto(Some("abc"), Some("xyz")).normalize().is_ok());
    }

    #[test]
    fn test_short_username_rejected_regardless_of_password() {
        for password in [None, Some("ab"), Some("valid-password")] {
            let failure = dto(Some("ab"), password).normalize().err().unwrap();
            assert_eq!(failure.field, "username");
        }

        let failure = dto(None, Some("valid-password")).normalize().err().unwrap();
        assert_eq!(failure.field, "username");
    }

    #[test]
    fn test_short_password_rejected_regardless_of_username() {
        let failure = dto(Some("hellas"), Some("ab")).normalize().err().unwrap();
        assert_eq!(failure.field, "password");
        assert_eq!(
            failure.to_string(),
            "a password of at least 3 characters is required"
        );

        let failure = dto(Some("hellas"), None).normalize().err().unwrap();
        assert_eq!(failure.field, "password");
    }

    #[test]
    fn test_messages_distinguish_fields() {
        let username = dto(Some("a"), Some("sekret")).normalize().err().unwrap();
        let password = dto(Some("hellas"), Some("a")).normalize().err().unwrap();
        assert_ne!(username.to_string(), password.to_string());
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(dto(Some("äöü"), Some("ßßß")).normalize().is_ok());
    }

    #[test]
    fn test_user_serialization_hides_hash() {
        let user = NewUser {
            username: "hellas".to_string(),
            name: None,
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        }
        .into_user(Uuid::new_v4());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["username"], "hellas");
        assert!(value["id"].is_string());
        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", dto(Some("hellas"), Some("sekret")));
        assert!(!rendered.contains("sekret"));
    }
}
