use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::routes::AppState;
use super::stored_id;
use crate::error::ApiError;
use crate::models::{CreateWorkoutSessionRequest, WorkoutSession};

/// Log a workout session for a member
pub async fn create_workout_session(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutSessionRequest>, ApiError>,
) -> Result<(StatusCode, Json<WorkoutSession>), ApiError> {
    let new_session = request.into_new_session()?;
    let member_id = new_session.member_id;

    let session = state
        .workout_sessions
        .create_session(new_session)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                tracing::warn!(member_id, "Rejected workout session for unknown member");
            }
            ApiError::from(e)
        })?;

    tracing::info!(
        session_id = session.session_id,
        member_id = session.member_id,
        "Created workout session"
    );
    Ok((StatusCode::CREATED, Json(session)))
}

/// List a member's workout sessions. An empty result is reported as 404,
/// which does not distinguish "no sessions" from "no such member".
pub async fn get_workout_sessions_for_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let member_id = stored_id(member_id, ApiError::NO_SESSIONS_FOUND)?;
    let sessions = state
        .workout_sessions
        .get_sessions_by_member_id(member_id)
        .await?;

    if sessions.is_empty() {
        return Err(ApiError::NO_SESSIONS_FOUND);
    }

    Ok(Json(sessions))
}
