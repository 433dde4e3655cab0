use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A gym member as stored in the `Members` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Columns supplied when inserting a member. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub age: i32,
}

/// Fields to overwrite on an existing member; `None` leaves the column as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(required)]
    pub age: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl CreateMemberRequest {
    /// Validate the body and turn it into an insertable member.
    pub fn into_new_member(self) -> Result<NewMember, validator::ValidationErrors> {
        self.validate()?;

        match (self.name, self.age) {
            (Some(name), Some(age)) => Ok(NewMember { name, age }),
            // validate() already rejected any missing field
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}

impl UpdateMemberRequest {
    pub fn into_changes(self) -> Result<MemberChanges, validator::ValidationErrors> {
        self.validate()?;

        Ok(MemberChanges {
            name: self.name,
            age: self.age,
        })
    }
}
