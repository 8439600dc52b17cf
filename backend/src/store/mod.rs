//! SQLite persistence for datasets and comments.
//!
//! A [`Store`] wraps a single connection behind a mutex and is cloned into every
//! handler through `web::Data`. All methods are synchronous; handlers call them
//! from `web::block` so the async workers never wait on disk I/O.
//!
//! Operations that touch more than one row run inside a `rusqlite::Transaction`.
//! The transaction rolls back when dropped without a commit, which covers early
//! returns through `?` as well as panics.

mod comments;
mod datasets;

pub use comments::CommentQuery;

use crate::error::StoreError;
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS datasets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    deleted BOOLEAN NOT NULL DEFAULT FALSE
);
CREATE TABLE IF NOT EXISTS comments (
    dataset_id INTEGER,
    comment TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_comments_dataset ON comments(dataset_id);
";

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (or creates) the database file at `path` and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("Opened comment store at {}", path.display());
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Store {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[cfg(test)]
impl Store {
    /// Runs raw SQL against the underlying connection. Used by tests to seed
    /// rows and to install fault-injection triggers.
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<(), StoreError> {
        self.connection()?.execute_batch(sql)?;
        Ok(())
    }

    pub(crate) fn count(&self, sql: &str) -> i64 {
        self.connection()
            .unwrap()
            .query_row(sql, [], |row| row.get(0))
            .unwrap()
    }
}
