use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::content::Content;

/// JSON shape of a content record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDto {
    pub id: i32,
    pub category_name: String,
    pub summarize_content: Option<String>,
    pub content: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Content> for ContentDto {
    fn from(value: Content) -> Self {
        Self {
            id: value.id.get(),
            category_name: value.category_name.into_inner(),
            summarize_content: value.summarize_content,
            content: value.content,
            slug: value.slug.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedDto {
    pub deleted: bool,
}

/// Body of every 4xx answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDto {
    pub message: String,
}
