//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use membership_database::MemberError;
use serde_json::json;
use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::DatabaseError(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Absent resources answer with an empty body
        if matches!(self, GatewayError::NotFound) {
            return status.into_response();
        }

        let error_response = json!({
            "error": status.as_str(),
            "message": self.to_string(),
        });

        (status, Json(error_response)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<MemberError> for GatewayError {
    fn from(error: MemberError) -> Self {
        match error {
            MemberError::MemberNotFound => GatewayError::NotFound,
            MemberError::EmailAlreadyExists => {
                GatewayError::InvalidRequest("Email already exists".to_string())
            }
            MemberError::Validation(msg) => GatewayError::InvalidRequest(msg),
            MemberError::DatabaseError(msg) => GatewayError::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_maps_to_bad_request_with_literal_message() {
        let error = GatewayError::from(MemberError::EmailAlreadyExists);
        assert_eq!(StatusCode::BAD_REQUEST, error.status_code());
        assert_eq!("Email already exists", error.to_string());
    }

    #[test]
    fn missing_member_maps_to_not_found() {
        let error = GatewayError::from(MemberError::MemberNotFound);
        assert_eq!(StatusCode::NOT_FOUND, error.status_code());
    }

    #[test]
    fn database_errors_map_to_internal_server_error() {
        let error = GatewayError::from(MemberError::DatabaseError("pool closed".to_string()));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, error.status_code());
    }
}
