//! Member REST endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{GatewayError, GatewayResult};
use crate::state::GatewayState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub registration_date: DateTime<Utc>,
    pub is_active: bool,
    pub balance: Decimal,
}

impl From<membership_database::Member> for MemberResponse {
    fn from(member: membership_database::Member) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            birth_date: member.birth_date,
            registration_date: member.registration_date,
            is_active: member.is_active,
            balance: member.balance,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub initial_balance: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Create member routes
pub fn create_member_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route(
            "/members",
            axum::routing::get(list_members).post(create_member),
        )
        .route(
            "/members/:id",
            axum::routing::get(get_member)
                .put(update_member)
                .delete(delete_member),
        )
        .route(
            "/members/email/:email",
            axum::routing::get(get_member_by_email),
        )
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "Members",
    responses(
        (status = 200, description = "List of all members", body = Vec<MemberResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_members(
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<Vec<MemberResponse>>> {
    let members = state.member_service().list_members().await?;

    let member_responses: Vec<MemberResponse> =
        members.into_iter().map(MemberResponse::from).collect();
    Ok(Json(member_responses))
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = MemberResponse),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_member(
    Path(id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<MemberResponse>> {
    let member = state
        .member_service()
        .get_member(id)
        .await?
        .ok_or(GatewayError::NotFound)?;

    Ok(Json(MemberResponse::from(member)))
}

#[utoipa::path(
    get,
    path = "/members/email/{email}",
    tag = "Members",
    params(
        ("email" = String, Path, description = "Member email, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Member details", body = MemberResponse),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_member_by_email(
    Path(email): Path<String>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<MemberResponse>> {
    let member = state
        .member_service()
        .get_member_by_email(&email)
        .await?
        .ok_or(GatewayError::NotFound)?;

    Ok(Json(MemberResponse::from(member)))
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "Members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created successfully", body = MemberResponse,
            headers(("Location" = String, description = "URL of the created member"))),
        (status = 400, description = "Invalid request or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<Arc<GatewayState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> GatewayResult<impl IntoResponse> {
    let request = membership_database::CreateMemberRequest {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        birth_date: payload.birth_date,
        initial_balance: payload.initial_balance,
    };

    let member = state.member_service().create_member(request).await?;

    let location = format!("/members/{}", member.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MemberResponse::from(member)),
    ))
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated successfully", body = MemberResponse),
        (status = 400, description = "Invalid request or email already exists", body = ErrorResponse),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_member(
    Path(id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
    Json(payload): Json<UpdateMemberRequest>,
) -> GatewayResult<Json<MemberResponse>> {
    let request = membership_database::UpdateMemberRequest {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        is_active: payload.is_active,
    };

    let member = state
        .member_service()
        .update_member(id, request)
        .await?
        .ok_or(GatewayError::NotFound)?;

    Ok(Json(MemberResponse::from(member)))
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted successfully"),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_member(
    Path(id): Path<i64>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<impl IntoResponse> {
    let deleted = state.member_service().delete_member(id).await?;

    if !deleted {
        return Err(GatewayError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
