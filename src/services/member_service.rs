use async_trait::async_trait;
use sqlx::PgPool;

use super::StoreError;
use crate::models::{Member, MemberChanges, NewMember};

/// Persistence operations on members. Each call is a single statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn create_member(&self, member: NewMember) -> Result<Member, StoreError>;

    async fn get_member(&self, id: i32) -> Result<Option<Member>, StoreError>;

    /// Returns `None` when no member has `id`.
    async fn update_member(&self, id: i32, changes: MemberChanges) -> Result<Option<Member>, StoreError>;

    /// Returns `false` when no member has `id`.
    async fn delete_member(&self, id: i32) -> Result<bool, StoreError>;

    async fn count_members(&self) -> Result<i64, StoreError>;
}

#[derive(Clone)]
pub struct MemberService {
    db: PgPool,
}

impl MemberService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberStore for MemberService {
    async fn create_member(&self, member: NewMember) -> Result<Member, StoreError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO "Members" (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age
            "#,
        )
        .bind(member.name)
        .bind(member.age)
        .fetch_one(&self.db)
        .await?;

        Ok(member)
    }

    async fn get_member(&self, id: i32) -> Result<Option<Member>, StoreError> {
        let member = sqlx::query_as::<_, Member>(r#"SELECT id, name, age FROM "Members" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(member)
    }

    async fn update_member(&self, id: i32, changes: MemberChanges) -> Result<Option<Member>, StoreError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE "Members"
            SET name = COALESCE($2, name),
                age = COALESCE($3, age)
            WHERE id = $1
            RETURNING id, name, age
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.age)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    async fn delete_member(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query(r#"DELETE FROM "Members" WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_members(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Members""#)
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
