//! Helpers for integration tests.

#![allow(dead_code)]

use contents_service::db::{DbPool, establish_connection_pool};
use contents_service::domain::content::NewContent;
use contents_service::domain::types::CategoryName;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_content(name: &str, summary: Option<&str>, body: &str) -> NewContent {
    NewContent {
        category_name: CategoryName::new(name).expect("valid category name"),
        summarize_content: summary.map(str::to_string),
        content: body.to_string(),
    }
}
