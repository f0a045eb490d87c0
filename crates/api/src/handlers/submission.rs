//! Handlers for the submission workflow: intake, status tracking, the
//! review state machine, and post-publication extras.
//!
//! The review transition is deliberately last-writer-wins on the mutable
//! fields; only promotion is guarded, by a conditional link write inside
//! the promotion transaction.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use validator::Validate;

use devhub_core::error::{CoreError, DuplicateKind, ValidationKind};
use devhub_core::{catalog, lifecycle, paging, submission_id, team};
use devhub_db::models::project::UpdateExtrasRequest;
use devhub_db::models::submission::{
    CreateSubmission, ReviewRequest, ReviewUpdate, SubmissionDetail, SubmitProjectRequest,
    SubmitProjectResponse,
};
use devhub_db::repositories::{ProjectRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PaginationInfo};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Query param and response types
-------------------------------------------------------------------------- */

#[derive(Debug, serde::Deserialize)]
pub struct ListSubmissionsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ListSubmissionsResponse {
    pub submissions: Vec<SubmissionDetail>,
    pub pagination: PaginationInfo,
    /// Submission count per status, over the full status enumeration.
    pub stats: HashMap<String, i64>,
}

#[derive(Debug, serde::Serialize)]
pub struct ReviewResponse {
    pub submission_id: String,
    pub new_status: String,
    pub message: &'static str,
}

#[derive(Debug, serde::Serialize)]
pub struct ExtrasResponse {
    pub submission_id: String,
    pub message: &'static str,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Reject malformed submission identifiers before any lookup.
fn ensure_valid_id(id: &str) -> AppResult<()> {
    if submission_id::is_valid(id) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "INVALID_SUBMISSION_ID",
            "Invalid submission ID format. Expected format: SUB-{timestamp}-{hash}".to_string(),
        ))
    }
}

fn submission_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Submission",
        id: id.to_string(),
    })
}

/// Run the vocabulary and team-completeness rules, mapping the first
/// failure to its named validation error.
fn validate_submission_request(input: &SubmitProjectRequest) -> AppResult<()> {
    if !catalog::is_valid_categories(&input.categories) {
        return Err(AppError::Core(CoreError::Validation(
            ValidationKind::Categories,
        )));
    }
    if !catalog::is_valid_event(&input.event) {
        return Err(AppError::Core(CoreError::Validation(ValidationKind::Event)));
    }
    if !team::is_valid_team_members(&input.team_members) {
        return Err(AppError::Core(CoreError::Validation(
            ValidationKind::TeamMembers,
        )));
    }
    Ok(())
}

/// Reshape a submission row for a response: parse the stored team payload
/// (tolerantly -- the strict parse belongs to promotion) and attach the
/// linked project when one exists.
async fn load_detail(
    pool: &sqlx::PgPool,
    submission: devhub_db::models::submission::Submission,
) -> AppResult<SubmissionDetail> {
    let members = team::parse_team_members(&submission.team_members).unwrap_or_default();
    let project = match submission.approved_project_id {
        Some(project_id) => ProjectRepo::find_with_team(pool, project_id).await?,
        None => None,
    };
    Ok(SubmissionDetail::from_parts(submission, members, project))
}

/* --------------------------------------------------------------------------
Intake
-------------------------------------------------------------------------- */

/// POST /api/v1/submissions
///
/// Validate, check both name namespaces for duplicates, generate the
/// submission identifier, and persist with status `pending`.
pub async fn submit_project(
    State(state): State<AppState>,
    Json(input): Json<SubmitProjectRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| {
        AppError::BadRequest("INVALID_SUBMISSION_DATA", format!("Invalid submission data: {e}"))
    })?;
    validate_submission_request(&input)?;

    // Friendly duplicate pre-checks. Two concurrent submits can both pass
    // these; the unique constraints catch the loser at insert time and the
    // error is translated back to the same duplicate codes.
    if ProjectRepo::find_by_name(&state.pool, &input.project_name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(
            DuplicateKind::ProjectName,
        )));
    }
    if SubmissionRepo::find_by_project_name(&state.pool, &input.project_name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(
            DuplicateKind::Submission,
        )));
    }

    let now = Utc::now();
    let id = submission_id::generate(now.timestamp_millis());
    let team_members = serde_json::to_value(&input.team_members)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let create = CreateSubmission {
        id,
        project_name: input.project_name,
        description: input.description,
        photo_link: input.photo_link,
        event: input.event,
        categories: input.categories,
        team_members,
        github_link: input.github_link,
        website_link: input.website_link,
        play_link: input.play_link,
        how_to_play: input.how_to_play,
        additional_notes: input.additional_notes,
        submitted_at: now,
    };
    let submission = SubmissionRepo::create(&state.pool, &create).await?;

    tracing::info!(
        submission_id = %submission.id,
        project_name = %submission.project_name,
        event = %submission.event,
        "Submission received"
    );

    let ack = SubmitProjectResponse {
        submission_id: submission.id.clone(),
        message: "Your project has been submitted successfully!".to_string(),
        estimated_review_time: "2-3 business days".to_string(),
        next_steps: vec![
            "We'll review your submission within 2-3 business days".to_string(),
            "You'll receive an email update when review is complete".to_string(),
            format!(
                "Use submission ID {} to check status anytime",
                submission.id
            ),
        ],
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: ack })))
}

/* --------------------------------------------------------------------------
Tracking
-------------------------------------------------------------------------- */

/// GET /api/v1/submissions/{submission_id}
///
/// Public status tracking by submission identifier.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(&submission_id)?;

    let submission = SubmissionRepo::find_by_id(&state.pool, &submission_id)
        .await?
        .ok_or_else(|| submission_not_found(&submission_id))?;

    let detail = load_detail(&state.pool, submission).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/submissions
///
/// Admin review console listing: status filter, whitelisted sorting,
/// pagination, and the per-status histogram.
pub async fn list_submissions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListSubmissionsParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        if !lifecycle::is_valid_status(status) {
            return Err(AppError::Core(CoreError::Validation(ValidationKind::Status)));
        }
    }

    let page = paging::clamp_page(params.page);
    let limit = paging::clamp_limit(params.limit);
    let offset = paging::page_offset(page, limit);

    let rows = SubmissionRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        limit,
        offset,
    )
    .await?;
    let total = SubmissionRepo::count(&state.pool, params.status.as_deref()).await?;
    let stats = SubmissionRepo::status_histogram(&state.pool).await?;

    let mut submissions = Vec::with_capacity(rows.len());
    for row in rows {
        let members = team::parse_team_members(&row.team_members).unwrap_or_default();
        submissions.push(SubmissionDetail::from_parts(row, members, None));
    }

    Ok(Json(DataResponse {
        data: ListSubmissionsResponse {
            submissions,
            pagination: PaginationInfo {
                page,
                limit,
                total,
                total_pages: paging::total_pages(total, limit),
            },
            stats,
        },
    }))
}

/* --------------------------------------------------------------------------
Review
-------------------------------------------------------------------------- */

/// PUT /api/v1/submissions/{submission_id}/review
///
/// Apply a review transition. Entering under_review stamps
/// review_started_at once; every decision re-stamps reviewed_at; the first
/// transition into approved promotes the submission into a published
/// project with its team members.
pub async fn review_submission(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(&submission_id)?;

    if !lifecycle::is_valid_status(&input.status) {
        return Err(AppError::Core(CoreError::Validation(ValidationKind::Status)));
    }

    let submission = SubmissionRepo::find_by_id(&state.pool, &submission_id)
        .await?
        .ok_or_else(|| submission_not_found(&submission_id))?;

    let now = Utc::now();
    let previous_status = submission.status.clone();

    if lifecycle::should_promote(
        &input.status,
        &previous_status,
        submission.approved_project_id.is_some(),
    ) {
        // A corrupt payload aborts the whole review; the submission stays
        // un-promoted until an operator retries.
        let members = team::parse_team_members(&submission.team_members).map_err(AppError::Core)?;

        match ProjectRepo::create_from_submission(&state.pool, &submission, &members, now).await? {
            Some(project) => {
                tracing::info!(
                    submission_id = %submission.id,
                    project_id = project.id,
                    team_size = members.len(),
                    "Submission promoted to published project"
                );
            }
            None => {
                tracing::warn!(
                    submission_id = %submission.id,
                    "Promotion skipped: a concurrent review already linked a project"
                );
            }
        }
    }

    let update = ReviewUpdate {
        status: input.status.clone(),
        feedback: input.feedback,
        changes_requested: input.changes_requested,
        reviewer_id: Some(auth.user_id),
        review_started_at: lifecycle::review_started_stamp(
            &input.status,
            submission.review_started_at,
            now,
        ),
        reviewed_at: lifecycle::reviewed_stamp(&input.status, submission.reviewed_at, now),
    };

    SubmissionRepo::apply_review(&state.pool, &submission.id, &update)
        .await?
        .ok_or_else(|| submission_not_found(&submission_id))?;

    tracing::info!(
        reviewer_id = auth.user_id,
        submission_id = %submission.id,
        previous_status = %previous_status,
        new_status = %input.status,
        "Submission reviewed"
    );

    Ok(Json(DataResponse {
        data: ReviewResponse {
            submission_id,
            new_status: input.status,
            message: "Submission reviewed successfully",
        },
    }))
}

/* --------------------------------------------------------------------------
Extras
-------------------------------------------------------------------------- */

/// PUT /api/v1/admin/submissions/{submission_id}/project-extras
///
/// Patch award and team-member photos on the project published from this
/// submission. Only valid once the submission has been approved.
pub async fn update_project_extras(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(input): Json<UpdateExtrasRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_valid_id(&submission_id)?;

    let submission = SubmissionRepo::find_by_id(&state.pool, &submission_id)
        .await?
        .ok_or_else(|| submission_not_found(&submission_id))?;

    // "Not yet approved" and a dangling link both report the project as
    // missing; the caller cannot fix either by changing the payload.
    let project_id = submission.approved_project_id.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: submission_id.clone(),
        })
    })?;
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id.to_string(),
            })
        })?;

    let photos = team::build_photo_map(input.team_photos.as_deref().unwrap_or(&[]));
    ProjectRepo::update_extras(&state.pool, project.id, input.award.as_deref(), &photos).await?;

    tracing::info!(
        reviewer_id = auth.user_id,
        submission_id = %submission.id,
        project_id = project.id,
        award = ?input.award,
        photo_count = photos.len(),
        "Project extras updated"
    );

    Ok(Json(DataResponse {
        data: ExtrasResponse {
            submission_id,
            message: "Project extras updated successfully",
        },
    }))
}
