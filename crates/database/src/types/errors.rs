//! Error types for the database layer

use thiserror::Error;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// Member-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberError {
    #[error("Member not found")]
    MemberNotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
