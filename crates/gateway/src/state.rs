//! Shared application state for the gateway

use crate::error::{GatewayError, GatewayResult};
use membership_config::DatabaseConfig;
use membership_database::MemberRepository;
use membership_members::MemberService;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state containing all services
#[derive(Clone)]
pub struct GatewayState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Member service
    pub member_service: Arc<MemberService<MemberRepository>>,
}

impl GatewayState {
    /// Create a new gateway state with all services initialized
    pub fn new(pool: SqlitePool) -> Self {
        let member_service = Arc::new(MemberService::new(pool.clone()));

        Self {
            pool,
            member_service,
        }
    }

    /// Create gateway state from database configuration
    pub async fn from_config(config: &DatabaseConfig) -> GatewayResult<Self> {
        let pool = membership_database::initialize_database(config)
            .await
            .map_err(|e| {
                GatewayError::DatabaseError(format!("Failed to initialize database: {}", e))
            })?;

        Ok(Self::new(pool))
    }

    /// Get a member service reference
    pub fn member_service(&self) -> &MemberService<MemberRepository> {
        &self.member_service
    }
}
