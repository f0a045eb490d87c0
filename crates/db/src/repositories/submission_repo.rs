//! Repository for the `submissions` table.

use std::collections::HashMap;

use sqlx::PgPool;

use devhub_core::lifecycle::VALID_STATUSES;

use crate::models::submission::{CreateSubmission, ReviewUpdate, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, description, photo_link, event, categories, \
    team_members, github_link, website_link, play_link, how_to_play, additional_notes, \
    status, reviewer_id, feedback, changes_requested, submitted_at, review_started_at, \
    reviewed_at, published_at, approved_project_id, created_at, updated_at";

/// Sortable columns exposed to the list endpoint. Anything else falls back
/// to the default ordering, so user input never reaches the ORDER BY raw.
fn order_clause(sort_by: Option<&str>, sort_order: Option<&str>) -> &'static str {
    let descending = !matches!(sort_order, Some(o) if o.eq_ignore_ascii_case("asc"));
    match (sort_by, descending) {
        (Some("project_name"), false) => "project_name ASC",
        (Some("project_name"), true) => "project_name DESC",
        (Some("status"), false) => "status ASC",
        (Some("status"), true) => "status DESC",
        (Some("reviewed_at"), false) => "reviewed_at ASC",
        (Some("reviewed_at"), true) => "reviewed_at DESC",
        (Some("submitted_at"), false) => "submitted_at ASC",
        (_, _) => "submitted_at DESC",
    }
}

/// Provides CRUD operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions
                (id, project_name, description, photo_link, event, categories, team_members,
                 github_link, website_link, play_link, how_to_play, additional_notes,
                 status, submitted_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'pending', $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.id)
            .bind(&input.project_name)
            .bind(&input.description)
            .bind(&input.photo_link)
            .bind(&input.event)
            .bind(&input.categories)
            .bind(&input.team_members)
            .bind(&input.github_link)
            .bind(&input.website_link)
            .bind(&input.play_link)
            .bind(&input.how_to_play)
            .bind(&input.additional_notes)
            .bind(input.submitted_at)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its external identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a submission by its project name (duplicate pre-check).
    pub async fn find_by_project_name(
        pool: &PgPool,
        project_name: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE project_name = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(project_name)
            .fetch_optional(pool)
            .await
    }

    /// List submissions with optional status filter, whitelisted sorting,
    /// and pagination.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let order = order_clause(sort_by, sort_order);
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count submissions matching the optional status filter.
    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM submissions WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Count submissions per status value.
    ///
    /// One count query per status in the fixed enumeration, not a single
    /// grouped query, so absent statuses still report zero.
    pub async fn status_histogram(pool: &PgPool) -> Result<HashMap<String, i64>, sqlx::Error> {
        let mut stats = HashMap::new();
        for status in VALID_STATUSES {
            let count: (i64,) =
                sqlx::query_as("SELECT COUNT(*) FROM submissions WHERE status = $1")
                    .bind(status)
                    .fetch_one(pool)
                    .await?;
            stats.insert(status.to_string(), count.0);
        }
        Ok(stats)
    }

    /// Apply a review transition: overwrite status, feedback, changes, and
    /// reviewer unconditionally and store the resolved timestamp values.
    ///
    /// Returns `None` if the submission no longer exists. The promotion
    /// link and published_at are NOT touched here; those are written only
    /// by the promotion transaction.
    pub async fn apply_review(
        pool: &PgPool,
        id: &str,
        update: &ReviewUpdate,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET
                status = $2,
                feedback = $3,
                changes_requested = $4,
                reviewer_id = $5,
                review_started_at = $6,
                reviewed_at = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(&update.status)
            .bind(&update.feedback)
            .bind(&update.changes_requested)
            .bind(update.reviewer_id)
            .bind(update.review_started_at)
            .bind(update.reviewed_at)
            .fetch_optional(pool)
            .await
    }
}
