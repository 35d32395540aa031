//! Shared types for the database layer

pub mod errors;

pub use errors::{DatabaseError, MemberError};

/// Result type for database infrastructure operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Result type for member operations
pub type MemberResult<T> = Result<T, MemberError>;
