//! Repository Module
//!
//! Data access for the two entity tables. Repositories own all SQL; the
//! store's UNIQUE indexes are the final authority on identity uniqueness,
//! so concurrent writes racing past the pre-checks still surface as
//! [`RepoError::Duplicate`].

pub mod employee;
pub mod user;

pub use employee::EmployeeRepository;
pub use user::UserRepository;

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::NotFound(msg) => AppError::Internal(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
