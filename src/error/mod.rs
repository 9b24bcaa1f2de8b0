//! Error types for the favorites persistence core.
//!
//! Domain-specific errors live in submodules (favorites, validation) and are
//! aggregated into a single [`Error`] type using `thiserror`'s `#[from]`
//! conversions, so services can use `?` throughout. Constraint failures
//! reported by the database driver are classified into the taxonomy the
//! calling layer expects via [`Error::from_db`].

pub mod favorite;
pub mod validation;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::{favorite::FavoriteError, validation::ValidationError};

/// Main error type for the favorites persistence core.
///
/// Every failure is local and synchronous: nothing is retried internally and
/// a failed operation aborts only its own transaction.
#[derive(Error, Debug)]
pub enum Error {
    /// Favorite-specific error (dangling polymorphic reference, missing
    /// owning user).
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    /// A required field was absent or a value failed a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Duplicate value for a unique column (`email` or `user_name`).
    /// Surfaced to the caller, never retried; no row is inserted.
    #[error("Unique constraint violation: {0}")]
    UniqueConstraintViolation(String),
    /// A referenced row does not exist, or a referenced row still has
    /// dependents under restrict semantics.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
    /// Password hashing or verification failed.
    #[error(transparent)]
    PasswordHash(#[from] bcrypt::BcryptError),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(sea_orm::DbErr),
}

impl Error {
    /// Classifies a [`DbErr`] from an insert or delete path.
    ///
    /// Unique and foreign key constraint failures become their dedicated
    /// variants; anything else passes through as [`Error::DbErr`].
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                Error::UniqueConstraintViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Error::ForeignKeyViolation(message)
            }
            _ => Error::DbErr(err),
        }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        Error::from_db(err)
    }
}
