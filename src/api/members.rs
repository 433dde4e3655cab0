use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use super::routes::AppState;
use super::stored_id;
use crate::error::ApiError;
use crate::models::{CreateMemberRequest, Member, UpdateMemberRequest};

/// Create a member from `{name, age}`
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateMemberRequest>, ApiError>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let new_member = request.into_new_member()?;
    let member = state.members.create_member(new_member).await?;

    tracing::info!(member_id = member.id, "Created member");
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn get_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let id = stored_id(id, ApiError::MEMBER_NOT_FOUND)?;
    let member = state
        .members
        .get_member(id)
        .await?
        .ok_or(ApiError::MEMBER_NOT_FOUND)?;

    Ok(Json(member))
}

/// Overwrite the fields present in the body, leaving the rest untouched
pub async fn update_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateMemberRequest>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let id = stored_id(id, ApiError::MEMBER_NOT_FOUND)?;
    let changes = request.into_changes()?;
    let member = state
        .members
        .update_member(id, changes)
        .await?
        .ok_or(ApiError::MEMBER_NOT_FOUND)?;

    tracing::info!(member_id = member.id, "Updated member");
    Ok(Json(member))
}

/// Delete a member; the store cascades the delete to their workout sessions
pub async fn delete_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<Value>, ApiError> {
    let id = stored_id(id, ApiError::MEMBER_NOT_FOUND)?;
    if !state.members.delete_member(id).await? {
        return Err(ApiError::MEMBER_NOT_FOUND);
    }

    tracing::info!(member_id = id, "Deleted member");
    Ok(Json(json!({ "message": "Member deleted successfully!" })))
}
