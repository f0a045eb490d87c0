//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate with `devhub_core`, delegate persistence to the
//! repositories in `devhub_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod project;
pub mod submission;
