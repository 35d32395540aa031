//! REST API endpoints for the gateway

pub mod health;
pub mod member;

use crate::state::GatewayState;
use axum::Router;
use std::sync::Arc;

/// Create all REST API routes
pub fn create_rest_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        // Member routes
        .merge(member::create_member_routes())
        // Health route
        .route("/health", axum::routing::get(health::health_check))
}

// Re-export for convenience
pub use health::*;
pub use member::*;
