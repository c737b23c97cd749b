use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ContentId, Slug};

/// Stored content record. `slug` always mirrors `category_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: ContentId,
    pub category_name: CategoryName,
    pub summarize_content: Option<String>,
    pub content: String,
    pub slug: Slug,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or overwrite a [`Content`].
///
/// There is no slug field: it is derived from `category_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContent {
    pub category_name: CategoryName,
    pub summarize_content: Option<String>,
    pub content: String,
}

impl NewContent {
    pub fn slug(&self) -> Slug {
        self.category_name.slug()
    }
}
