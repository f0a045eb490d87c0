//! Route definitions for the published-project read path.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /              list_projects
/// GET  /{id}          get_project
/// POST /{id}/like     like_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list_projects))
        .route("/{id}", get(project::get_project))
        .route("/{id}/like", post(project::like_project))
}
