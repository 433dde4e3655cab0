// Store-backed services

pub mod member_service;
pub mod workout_session_service;

pub use member_service::{MemberService, MemberStore};
pub use workout_session_service::{WorkoutSessionService, WorkoutSessionStore};

#[cfg(test)]
pub use member_service::MockMemberStore;
#[cfg(test)]
pub use workout_session_service::MockWorkoutSessionStore;

/// Failure reported by the relational store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the store rejected a row for referencing a missing parent.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(db_err)) => db_err.is_foreign_key_violation(),
            _ => false,
        }
    }
}
