//! SQLite connection bootstrap for the toll registry.
//!
//! # Responsibility
//! - Open and configure SQLite connections handed to `SqliteTollRegistry`.
//! - Keep bootstrap failures separate from per-operation storage failures.
//!
//! # Invariants
//! - Schema creation is owned by the database, never by this crate.
//! - Opened connections have `foreign_keys=ON` and a busy timeout.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(_) => write!(f, "sqlite error"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
