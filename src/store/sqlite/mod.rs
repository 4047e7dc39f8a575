//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed note store.
///
/// Manages the database connection and implements [`crate::store::NoteStore`].
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
