//! HTTP API over gym members and their workout sessions, backed by PostgreSQL.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
