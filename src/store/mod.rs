pub mod schema;
pub mod sqlite_store;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use schema::{Mode, Setting};
pub use sqlite_store::SettingsStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Database error")]
    Sqlite(#[from] rusqlite::Error),
}
