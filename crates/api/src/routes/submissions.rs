//! Route definitions for the submission workflow.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST /                              submit_project (public)
/// GET  /                              list_submissions (requires auth)
/// GET  /{submission_id}               get_submission (public)
/// PUT  /{submission_id}/review        review_submission (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(submission::submit_project).get(submission::list_submissions),
        )
        .route("/{submission_id}", get(submission::get_submission))
        .route(
            "/{submission_id}/review",
            put(submission::review_submission),
        )
}

/// Admin-scoped routes, mounted at `/admin/submissions`.
///
/// ```text
/// PUT  /{submission_id}/project-extras   update_project_extras (requires auth)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/{submission_id}/project-extras",
        put(submission::update_project_extras),
    )
}
