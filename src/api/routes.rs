use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::health::{health_check, welcome};
use super::members::{create_member, delete_member, get_member, update_member};
use super::middleware::security_headers_layer;
use super::workout_sessions::{create_workout_session, get_workout_sessions_for_member};
use crate::services::{MemberService, MemberStore, WorkoutSessionService, WorkoutSessionStore};

/// Store clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberStore>,
    pub workout_sessions: Arc<dyn WorkoutSessionStore>,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            members: Arc::new(MemberService::new(db.clone())),
            workout_sessions: Arc::new(WorkoutSessionService::new(db)),
        }
    }

    pub fn from_stores(
        members: Arc<dyn MemberStore>,
        workout_sessions: Arc<dyn WorkoutSessionStore>,
    ) -> Self {
        Self {
            members,
            workout_sessions,
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/members", post(create_member))
        .route(
            "/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/workout_sessions", post(create_workout_session))
        .route(
            "/workout_sessions/member/:member_id",
            get(get_workout_sessions_for_member),
        )
        .layer(security_headers_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
