//! Axum handlers grouped by trigger

pub mod api;
pub mod crons;
pub mod tasks;
