// Persisted records and request bodies

pub mod member;
pub mod workout_session;

pub use member::*;
pub use workout_session::*;
