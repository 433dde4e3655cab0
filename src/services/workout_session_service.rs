use async_trait::async_trait;
use sqlx::PgPool;

use super::StoreError;
use crate::models::{NewWorkoutSession, WorkoutSession};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutSessionStore: Send + Sync {
    /// Inserts a session. A `member_id` with no matching member is rejected
    /// by the foreign key and comes back as a `StoreError`.
    async fn create_session(&self, session: NewWorkoutSession) -> Result<WorkoutSession, StoreError>;

    async fn get_sessions_by_member_id(&self, member_id: i32) -> Result<Vec<WorkoutSession>, StoreError>;
}

#[derive(Clone)]
pub struct WorkoutSessionService {
    db: PgPool,
}

impl WorkoutSessionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutSessionStore for WorkoutSessionService {
    async fn create_session(&self, session: NewWorkoutSession) -> Result<WorkoutSession, StoreError> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            INSERT INTO "WorkoutSessions" (member_id, session_date, session_time, activity)
            VALUES ($1, $2, $3, $4)
            RETURNING session_id, member_id, session_date, session_time, activity
            "#,
        )
        .bind(session.member_id)
        .bind(session.session_date)
        .bind(session.session_time)
        .bind(session.activity)
        .fetch_one(&self.db)
        .await?;

        Ok(session)
    }

    async fn get_sessions_by_member_id(&self, member_id: i32) -> Result<Vec<WorkoutSession>, StoreError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, member_id, session_date, session_time, activity
            FROM "WorkoutSessions"
            WHERE member_id = $1
            ORDER BY session_date ASC, session_time ASC, session_id ASC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }
}
