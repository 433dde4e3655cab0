// API routes and handlers

pub mod health;
pub mod members;
pub mod middleware;
pub mod routes;
pub mod workout_sessions;

#[cfg(test)]
mod test_support;

use crate::error::ApiError;

/// Narrow a path id to the `INTEGER` range of the id columns. An id outside
/// that range cannot match a row, so it reports `not_found`.
pub(crate) fn stored_id(id: i64, not_found: ApiError) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| not_found)
}
