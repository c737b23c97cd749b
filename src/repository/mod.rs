use crate::db::{DbConnection, DbPool};
use crate::domain::content::{Content, NewContent};
use crate::domain::types::{CategoryName, ContentId};

pub mod content;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for content records.
pub trait ContentReader {
    /// List every stored record ordered by id.
    fn list_contents(&self) -> RepositoryResult<Vec<Content>>;
    /// Retrieve a record by its identifier.
    fn get_content_by_id(&self, id: ContentId) -> RepositoryResult<Option<Content>>;
    /// Retrieve the record with exactly this slug, lowest id first.
    fn get_content_by_slug(&self, slug: &str) -> RepositoryResult<Option<Content>>;
    /// Find the record whose category name equals `name` ignoring case.
    fn find_content_by_category_name(
        &self,
        name: &CategoryName,
    ) -> RepositoryResult<Option<Content>>;
}

/// Write operations for content records.
pub trait ContentWriter {
    /// Persist a new record and return it with its assigned id.
    fn create_content(&self, content: &NewContent) -> RepositoryResult<Content>;
    /// Overwrite every mutable field of an existing record.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row has `id`.
    fn update_content(&self, id: ContentId, content: &NewContent) -> RepositoryResult<Content>;
    /// Delete a record, returning the number of rows removed.
    fn delete_content(&self, id: ContentId) -> RepositoryResult<usize>;
}
