//! # Membership Gateway Crate
//!
//! This crate provides the HTTP API layer for the membership backend,
//! translating REST requests into member service calls and domain outcomes
//! into HTTP status codes.
//!
//! ## Architecture
//!
//! - **REST**: HTTP API endpoints with OpenAPI documentation
//! - **State**: Shared application state wiring the pool into the services
//! - **Middleware**: CORS, request logging, and other cross-cutting concerns

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

// Re-export main types for convenience
pub use error::{GatewayError, GatewayResult};
pub use state::GatewayState;

use axum::{http::Method, middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router with all routes
pub fn create_router(state: GatewayState) -> Router {
    let arc_state = Arc::new(state);
    let mut router = Router::new()
        // REST API routes
        .merge(rest::create_rest_routes().with_state(arc_state))
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        )
        // Logging middleware
        .layer(axum_middleware::from_fn(middleware::logging_middleware));

    // Add Swagger UI if in debug mode
    #[cfg(debug_assertions)]
    {
        #[derive(OpenApi)]
        #[openapi(
            paths(
                rest::member::list_members,
                rest::member::get_member,
                rest::member::get_member_by_email,
                rest::member::create_member,
                rest::member::update_member,
                rest::member::delete_member,
                rest::health::health_check,
            ),
            components(
                schemas(
                    rest::member::MemberResponse,
                    rest::member::CreateMemberRequest,
                    rest::member::UpdateMemberRequest,
                    rest::member::ErrorResponse,
                    rest::health::HealthResponse,
                )
            ),
            tags(
                (name = "Members", description = "Member management"),
                (name = "Health", description = "Service health"),
            )
        )]
        struct ApiDoc;

        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
}
