//! Handlers for the published-project read path.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use devhub_core::error::CoreError;
use devhub_core::paging;
use devhub_core::types::DbId;
use devhub_db::models::project::{ProjectFilter, ProjectFilterOptions, ProjectWithTeam};
use devhub_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, PaginationInfo};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Query param and response types
-------------------------------------------------------------------------- */

#[derive(Debug, serde::Deserialize)]
pub struct ListProjectsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Comma-separated category filter; rows match on tag overlap.
    pub category: Option<String>,
    pub event: Option<String>,
    pub award: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectWithTeam>,
    pub pagination: PaginationInfo,
    pub filters: ProjectFilterOptions,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /api/v1/projects
///
/// Public listing of published projects with filtering, search, sorting,
/// and pagination, plus the distinct filter values for building filter UIs.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ProjectFilter {
        categories: params
            .category
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        event: params.event,
        award: params.award,
        search: params.search,
    };

    let page = paging::clamp_page(params.page);
    let limit = paging::clamp_limit(params.limit);
    let offset = paging::page_offset(page, limit);

    let rows = ProjectRepo::list(
        &state.pool,
        &filter,
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        limit,
        offset,
    )
    .await?;
    let total = ProjectRepo::count(&state.pool, &filter).await?;
    let filters = ProjectRepo::filter_options(&state.pool).await?;

    let mut projects = Vec::with_capacity(rows.len());
    for project in rows {
        let team = ProjectRepo::list_team(&state.pool, project.id).await?;
        projects.push(ProjectWithTeam { project, team });
    }

    Ok(Json(DataResponse {
        data: ListProjectsResponse {
            projects,
            pagination: PaginationInfo {
                page,
                limit,
                total,
                total_pages: paging::total_pages(total, limit),
            },
            filters,
        },
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects/{id}/like
///
/// Atomic like increment; returns the refreshed project.
pub async fn like_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProjectRepo::increment_likes(&state.pool, id).await? {
        return Err(project_not_found(id));
    }

    let project = ProjectRepo::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}
