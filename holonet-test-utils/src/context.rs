//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for Phase 2 test
//! execution. The context wraps an in-memory or temporary-file SQLite database that lives
//! as long as the context does.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_holonet_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// test.user().insert_mock_user("luke@rebellion.org").await?;
/// test.catalog().insert_mock_planet("Tatooine").await?;
/// ```
pub struct TestContext {
    /// Database connection to the test SQLite database
    pub db: DatabaseConnection,
    // Backing file of an on-disk database, removed on drop
    file: Option<PathBuf>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holonet crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, file: None })
    }

    /// Create a new test context backed by a fresh SQLite file in the temp directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn on_disk() -> Result<Self, TestError> {
        static NEXT_FILE_ID: AtomicUsize = AtomicUsize::new(0);

        let file = std::env::temp_dir().join(format!(
            "holonet-test-{}-{}.db",
            std::process::id(),
            NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed)
        ));
        remove_database_files(&file);

        let db = Database::connect(format!("sqlite://{}?mode=rwc", file.display())).await?;

        Ok(TestContext {
            db,
            file: Some(file),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            remove_database_files(file);
        }
    }
}

/// Removes a SQLite database file along with its WAL and shared-memory companions.
fn remove_database_files(file: &Path) {
    let _ = std::fs::remove_file(file);
    for suffix in ["-wal", "-shm"] {
        let mut companion = file.as_os_str().to_owned();
        companion.push(suffix);
        let _ = std::fs::remove_file(companion);
    }
}
