//! Request handlers.
//!
//! Handlers delegate to the repositories in `newsroom_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod articles;
