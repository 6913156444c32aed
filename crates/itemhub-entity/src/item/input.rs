//! Client-supplied item fields and their presence check.

use serde::{Deserialize, Serialize};
use validator::Validate;

use itemhub_core::error::AppError;
use itemhub_core::result::AppResult;

/// Message returned whenever a create/update body lacks a field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and description are required";

/// Raw `{name, description}` body of a create or update request.
///
/// Both fields are optional at the wire level so that absent, `null` and
/// empty values all reach the same presence check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ItemInput {
    /// Item name.
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    /// Item description.
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

/// Item fields that passed the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Item name, non-empty.
    pub name: String,
    /// Item description, non-empty.
    pub description: String,
}

impl ItemInput {
    /// Build an input with both fields present.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Run the presence check. No trimming or other sanitization is applied.
    pub fn into_draft(self) -> AppResult<ItemDraft> {
        self.validate()
            .map_err(|_| AppError::validation(REQUIRED_FIELDS_MESSAGE))?;

        match (self.name, self.description) {
            (Some(name), Some(description)) => Ok(ItemDraft { name, description }),
            _ => Err(AppError::validation(REQUIRED_FIELDS_MESSAGE)),
        }
    }
}
