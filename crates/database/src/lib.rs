//! Membership Database Crate
//!
//! This crate provides database functionality for the membership backend,
//! including connection management, migrations, and the member repository.

use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::{prepare_database, DatabaseConnection};
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::MemberRepository;

// Re-export entities
pub use entities::member::{CreateMemberRequest, Member, UpdateMemberRequest};

// Re-export types
pub use types::{
    errors::{DatabaseError, MemberError},
    DatabaseResult, MemberResult,
};

/// Initialize the database with migrations
pub async fn initialize_database(
    config: &membership_config::DatabaseConfig,
) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
