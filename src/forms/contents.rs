use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::content::NewContent;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Raw create/update input as posted by clients.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentForm {
    #[validate(length(min = 1, max = 255))]
    pub category_name: String,
    #[serde(default)]
    pub summarize_content: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentFormPayload {
    pub category_name: CategoryName,
    pub summarize_content: Option<String>,
    pub content: String,
}

impl From<ContentFormPayload> for NewContent {
    fn from(payload: ContentFormPayload) -> Self {
        Self {
            category_name: payload.category_name,
            summarize_content: payload.summarize_content,
            content: payload.content,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentFormError {
    #[error("Content form validation failed: {0}")]
    Validation(String),
    #[error("Content form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ContentFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ContentFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ContentForm> for ContentFormPayload {
    type Error = ContentFormError;

    fn try_from(value: ContentForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            category_name: CategoryName::new(value.category_name)?,
            summarize_content: value.summarize_content,
            content: value.content,
        })
    }
}
