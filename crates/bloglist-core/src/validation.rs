//! Validation failures raised while normalizing request payloads.
//!
//! DTOs declare their rules with `validator` derives; [`first_failure`]
//! turns the resulting error map into a single, deterministic failure by
//! walking the fields in the order the caller checks them.

use std::borrow::Cow;

use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: Cow<'static, str>,
}

impl ValidationFailure {
    pub fn new(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Picks the first failing field in `order`.
///
/// Falls back to a generic message when a field failed without a custom
/// message, and to the first error in the map when none of `order` failed.
pub fn first_failure(errors: &ValidationErrors, order: &[&'static str]) -> ValidationFailure {
    let field_errors = errors.field_errors();

    for field in order {
        if let Some(error) = field_errors.get(*field).and_then(|errs| errs.first()) {
            let message = error
                .message
                .clone()
                .unwrap_or_else(|| Cow::Owned(format!("{} is invalid", field)));
            return ValidationFailure::new(field, message);
        }
    }

    ValidationFailure::new("body", Cow::Owned(errors.to_string()))
}
