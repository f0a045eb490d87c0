//! Route definitions.

pub mod auth;
pub mod health;
pub mod projects;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/admin                                      create admin (auth)
///
/// /submissions                                     submit (public), list (auth)
/// /submissions/{submission_id}                     status tracking (public)
/// /submissions/{submission_id}/review              review transition (auth)
///
/// /admin/submissions/{submission_id}/project-extras   extras patch (auth)
///
/// /projects                                        list (public)
/// /projects/{id}                                   get (public)
/// /projects/{id}/like                              like (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/submissions", submissions::router())
        .nest("/admin/submissions", submissions::admin_router())
        .nest("/projects", projects::router())
}
