//! # Database State
//!
//! Wraps the `Database` connection for use in session commands.
//!
//! ## Thread Safety
//! The `Database` struct from `neon-db` contains a `SqlitePool` which
//! is inherently thread-safe. Multiple commands can execute queries
//! concurrently without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! let product = db.inner().products().get_by_id(&product_id).await?;
//! ```

use neon_db::Database;

/// Wrapper around `Database` for session state management.
///
/// ## Why a Wrapper?
/// Keeps the session's state surface uniform (every collaborator the
/// commands touch is a `*State` type) and leaves room for session-scoped
/// concerns like per-session read caching later.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
