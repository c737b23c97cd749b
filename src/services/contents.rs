//! Content record management.
//!
//! [`ContentRecordManager`] owns the create/update workflow: it checks the
//! case-insensitive uniqueness of the category name, derives the slug and
//! mediates every read and write against the injected record store.

use std::fmt::Display;

use crate::domain::content::{Content, NewContent};
use crate::domain::types::ContentId;
use crate::repository::{ContentReader, ContentWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Message carried by every category name conflict.
pub const CATEGORY_NAME_EXISTS: &str = "category name already exists";

fn content_not_found_by_id(id: impl Display) -> ServiceError {
    ServiceError::NotFound(format!("content with id {id} not found"))
}

/// Ids that can never exist are reported the same way as missing ones.
fn parse_id(id: i32) -> ServiceResult<ContentId> {
    ContentId::new(id).map_err(|_| content_not_found_by_id(id))
}

/// Stateless façade over a content record store.
pub struct ContentRecordManager<'a, R> {
    repo: &'a R,
}

impl<'a, R> ContentRecordManager<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }
}

impl<R> ContentRecordManager<'_, R>
where
    R: ContentReader,
{
    /// Every stored record, ordered by id.
    pub fn get_all(&self) -> ServiceResult<Vec<Content>> {
        Ok(self.repo.list_contents()?)
    }

    pub fn get_by_id(&self, id: i32) -> ServiceResult<Content> {
        let id = parse_id(id)?;
        self.repo
            .get_content_by_id(id)?
            .ok_or_else(|| content_not_found_by_id(id))
    }

    /// Exact match on the stored slug.
    pub fn get_by_slug(&self, slug: &str) -> ServiceResult<Content> {
        self.repo
            .get_content_by_slug(slug)?
            .ok_or_else(|| ServiceError::NotFound(format!("content with slug {slug} not found")))
    }
}

impl<R> ContentRecordManager<'_, R>
where
    R: ContentReader + ContentWriter,
{
    /// Insert a record unless its category name is already taken.
    ///
    /// The lookup only produces the friendly error early; a duplicate that
    /// slips past it is rejected by the store's unique constraint and is
    /// reported as the same [`ServiceError::Conflict`].
    pub fn create(&self, content: NewContent) -> ServiceResult<Content> {
        if let Some(existing) = self
            .repo
            .find_content_by_category_name(&content.category_name)?
        {
            log::warn!(
                "Refusing to create '{}': category name taken by content {}",
                content.category_name,
                existing.id
            );
            return Err(ServiceError::Conflict(CATEGORY_NAME_EXISTS.to_string()));
        }

        let created = self.repo.create_content(&content)?;
        log::info!(
            "Created content {} with slug '{}'",
            created.id,
            created.slug
        );
        Ok(created)
    }

    /// Overwrite a record's name, summary and body and re-derive its slug.
    ///
    /// Keeping the current name (in any letter case) is allowed; taking the
    /// name of a different record is a conflict.
    pub fn update(&self, id: i32, content: NewContent) -> ServiceResult<Content> {
        let id = parse_id(id)?;
        let target = self
            .repo
            .get_content_by_id(id)?
            .ok_or_else(|| content_not_found_by_id(id))?;

        match self
            .repo
            .find_content_by_category_name(&content.category_name)?
        {
            Some(existing) if existing.id != target.id => {
                log::warn!(
                    "Refusing to rename content {} to '{}': taken by content {}",
                    target.id,
                    content.category_name,
                    existing.id
                );
                return Err(ServiceError::Conflict(CATEGORY_NAME_EXISTS.to_string()));
            }
            _ => {}
        }

        match self.repo.update_content(target.id, &content) {
            Ok(updated) => {
                log::info!(
                    "Updated content {} with slug '{}'",
                    updated.id,
                    updated.slug
                );
                Ok(updated)
            }
            Err(RepositoryError::NotFound) => Err(content_not_found_by_id(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Permanently remove a record.
    pub fn delete(&self, id: i32) -> ServiceResult<bool> {
        let id = parse_id(id)?;
        if self.repo.get_content_by_id(id)?.is_none() {
            return Err(content_not_found_by_id(id));
        }

        match self.repo.delete_content(id)? {
            0 => Err(content_not_found_by_id(id)),
            _ => {
                log::info!("Deleted content {id}");
                Ok(true)
            }
        }
    }
}
