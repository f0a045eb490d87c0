//! Submission entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use devhub_core::team::TeamMemberInput;
use devhub_core::types::{DbId, Timestamp};

use crate::models::project::ProjectWithTeam;

/// A row from the `submissions` table.
///
/// `team_members` holds the raw JSONB payload; use
/// [`devhub_core::team::parse_team_members`] to get typed members. The
/// parse is deferred so a corrupt payload surfaces exactly where the
/// workflow needs the data (response shaping, promotion).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub photo_link: String,
    pub event: String,
    pub categories: Vec<String>,
    pub team_members: serde_json::Value,
    pub github_link: Option<String>,
    pub website_link: Option<String>,
    pub play_link: String,
    pub how_to_play: String,
    pub additional_notes: Option<String>,
    pub status: String,
    pub reviewer_id: Option<DbId>,
    pub feedback: Option<String>,
    pub changes_requested: Option<Vec<String>>,
    pub submitted_at: Timestamp,
    pub review_started_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub approved_project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new submission.
///
/// Built by the intake handler after validation: the identifier is already
/// generated and the team members already serialized.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub photo_link: String,
    pub event: String,
    pub categories: Vec<String>,
    pub team_members: serde_json::Value,
    pub github_link: Option<String>,
    pub website_link: Option<String>,
    pub play_link: String,
    pub how_to_play: String,
    pub additional_notes: Option<String>,
    pub submitted_at: Timestamp,
}

/// Final field values for a review transition, computed by the lifecycle
/// engine. Status, feedback, changes-requested, and reviewer are
/// overwritten unconditionally (last writer wins); the two timestamps are
/// the already-resolved values from the stamp rules.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub status: String,
    pub feedback: Option<String>,
    pub changes_requested: Option<Vec<String>>,
    pub reviewer_id: Option<DbId>,
    pub review_started_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
}

/// Request body for the submit endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitProjectRequest {
    #[validate(length(min = 1))]
    pub project_name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub photo_link: String,
    #[validate(length(min = 1))]
    pub event: String,
    #[validate(length(min = 1))]
    pub categories: Vec<String>,
    #[validate(length(min = 1))]
    pub team_members: Vec<TeamMemberInput>,
    pub github_link: Option<String>,
    pub website_link: Option<String>,
    #[validate(length(min = 1))]
    pub play_link: String,
    #[validate(length(min = 1))]
    pub how_to_play: String,
    pub additional_notes: Option<String>,
}

/// Request body for the review endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub status: String,
    pub feedback: Option<String>,
    pub changes_requested: Option<Vec<String>>,
}

/// Response payload for a successful submission.
///
/// The acknowledgment strings are static guidance, not computed values.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitProjectResponse {
    pub submission_id: String,
    pub message: String,
    pub estimated_review_time: String,
    pub next_steps: Vec<String>,
}

/// A submission reshaped for API responses: team members parsed back into
/// typed records, linked project attached when the submission is published.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDetail {
    pub submission_id: String,
    pub project_name: String,
    pub description: String,
    pub photo_link: String,
    pub event: String,
    pub categories: Vec<String>,
    pub team_members: Vec<TeamMemberInput>,
    pub github_link: Option<String>,
    pub website_link: Option<String>,
    pub play_link: String,
    pub how_to_play: String,
    pub additional_notes: Option<String>,
    pub status: String,
    pub reviewer_id: Option<DbId>,
    pub feedback: Option<String>,
    pub changes_requested: Option<Vec<String>>,
    pub submitted_at: Timestamp,
    pub review_started_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub approved_project_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectWithTeam>,
}

impl SubmissionDetail {
    /// Build the response shape from a row, its parsed team members, and
    /// the optionally loaded linked project.
    pub fn from_parts(
        submission: Submission,
        team_members: Vec<TeamMemberInput>,
        project: Option<ProjectWithTeam>,
    ) -> Self {
        Self {
            submission_id: submission.id,
            project_name: submission.project_name,
            description: submission.description,
            photo_link: submission.photo_link,
            event: submission.event,
            categories: submission.categories,
            team_members,
            github_link: submission.github_link,
            website_link: submission.website_link,
            play_link: submission.play_link,
            how_to_play: submission.how_to_play,
            additional_notes: submission.additional_notes,
            status: submission.status,
            reviewer_id: submission.reviewer_id,
            feedback: submission.feedback,
            changes_requested: submission.changes_requested,
            submitted_at: submission.submitted_at,
            review_started_at: submission.review_started_at,
            reviewed_at: submission.reviewed_at,
            published_at: submission.published_at,
            approved_project_id: submission.approved_project_id,
            project,
        }
    }
}
