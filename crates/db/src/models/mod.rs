//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the endpoints that mutate the entity
//! - `Serialize` response shapes where the row needs reshaping first

pub mod admin_user;
pub mod project;
pub mod submission;
