use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A logged workout belonging to one member (`WorkoutSessions` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub session_id: i32,
    pub member_id: i32,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutSession {
    pub member_id: i32,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub activity: String,
}

/// Body of `POST /workout_sessions`. Every field is required; dates use
/// `YYYY-MM-DD` and times `HH:MM:SS`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutSessionRequest {
    #[validate(required)]
    pub member_id: Option<i32>,
    #[validate(required)]
    pub session_date: Option<NaiveDate>,
    #[validate(required)]
    pub session_time: Option<NaiveTime>,
    #[validate(required, length(min = 1, max = 100))]
    pub activity: Option<String>,
}

impl CreateWorkoutSessionRequest {
    pub fn into_new_session(self) -> Result<NewWorkoutSession, validator::ValidationErrors> {
        self.validate()?;

        match (self.member_id, self.session_date, self.session_time, self.activity) {
            (Some(member_id), Some(session_date), Some(session_time), Some(activity)) => {
                Ok(NewWorkoutSession {
                    member_id,
                    session_date,
                    session_time,
                    activity,
                })
            }
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}
