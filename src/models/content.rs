use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::content::{Content as DomainContent, NewContent as DomainNewContent};
use crate::domain::types::{CategoryName, Slug, TypeConstraintError};

/// Diesel model representing the `contents` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contents)]
pub struct Content {
    pub id: i32,
    pub category_name: String,
    pub category_key: String,
    pub summarize_content: Option<String>,
    pub content: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Content`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::contents)]
pub struct NewContent {
    pub category_name: String,
    pub category_key: String,
    pub summarize_content: Option<String>,
    pub content: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Content> for DomainContent {
    type Error = TypeConstraintError;

    fn try_from(content: Content) -> Result<Self, Self::Error> {
        Ok(Self {
            id: content.id.try_into()?,
            category_name: CategoryName::new(content.category_name)?,
            summarize_content: content.summarize_content,
            content: content.content,
            slug: Slug::new(content.slug)?,
            created_at: content.created_at,
            updated_at: content.updated_at,
        })
    }
}

impl From<&DomainNewContent> for NewContent {
    fn from(content: &DomainNewContent) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            category_name: content.category_name.as_str().to_string(),
            category_key: content.category_name.lookup_key(),
            summarize_content: content.summarize_content.clone(),
            content: content.content.clone(),
            slug: content.slug().into_inner(),
            created_at: now,
            updated_at: now,
        }
    }
}
