use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::api::routes::AppState;
use crate::models::{NewMember, NewWorkoutSession};

/// Inserts a small demo data set into an empty database.
pub struct DatabaseSeeder {
    state: AppState,
}

impl DatabaseSeeder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Returns `true` when demo rows were written.
    pub async fn seed_all(&self) -> Result<bool> {
        if self.state.members.count_members().await? > 0 {
            tracing::info!("Members already present, skipping demo seed");
            return Ok(false);
        }

        tracing::info!("Starting database seeding...");

        let member = self
            .state
            .members
            .create_member(NewMember {
                name: "Demo Member".to_string(),
                age: 30,
            })
            .await?;

        let demo_sessions = [
            ((2024, 1, 1), (8, 0, 0), "Running"),
            ((2024, 1, 3), (18, 30, 0), "Weightlifting"),
        ];

        for ((year, month, day), (hour, min, sec), activity) in demo_sessions {
            let session_date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| anyhow::anyhow!("invalid demo date"))?;
            let session_time = NaiveTime::from_hms_opt(hour, min, sec)
                .ok_or_else(|| anyhow::anyhow!("invalid demo time"))?;

            self.state
                .workout_sessions
                .create_session(NewWorkoutSession {
                    member_id: member.id,
                    session_date,
                    session_time,
                    activity: activity.to_string(),
                })
                .await?;
        }

        tracing::info!(member_id = member.id, "Database seeding completed!");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, WorkoutSession};
    use crate::services::{MockMemberStore, MockWorkoutSessionStore};
    use std::sync::Arc;

    fn seeder(members: MockMemberStore, sessions: MockWorkoutSessionStore) -> DatabaseSeeder {
        DatabaseSeeder::new(AppState::from_stores(Arc::new(members), Arc::new(sessions)))
    }

    #[tokio::test]
    async fn test_seed_skips_populated_database() {
        let mut members = MockMemberStore::new();
        members.expect_count_members().returning(|| Ok(3));
        members.expect_create_member().never();

        let seeded = seeder(members, MockWorkoutSessionStore::new())
            .seed_all()
            .await
            .unwrap();

        assert!(!seeded);
    }

    #[tokio::test]
    async fn test_seed_creates_member_and_sessions() {
        let mut members = MockMemberStore::new();
        members.expect_count_members().returning(|| Ok(0));
        members.expect_create_member().times(1).returning(|m| {
            Ok(Member {
                id: 1,
                name: m.name,
                age: m.age,
            })
        });

        let mut sessions = MockWorkoutSessionStore::new();
        sessions
            .expect_create_session()
            .withf(|s| s.member_id == 1)
            .times(2)
            .returning(|s| {
                Ok(WorkoutSession {
                    session_id: 1,
                    member_id: s.member_id,
                    session_date: s.session_date,
                    session_time: s.session_time,
                    activity: s.activity,
                })
            });

        let seeded = seeder(members, sessions).seed_all().await.unwrap();

        assert!(seeded);
    }
}
