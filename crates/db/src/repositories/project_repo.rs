//! Repository for the `projects` and `team_members` tables.

use std::collections::HashMap;

use sqlx::PgPool;

use devhub_core::team::TeamMemberInput;
use devhub_core::types::{DbId, Timestamp};

use crate::models::project::{Project, ProjectFilter, ProjectFilterOptions, ProjectWithTeam, TeamMember};
use crate::models::submission::Submission;

/// Column list for projects queries.
const COLUMNS: &str = "id, name, logo, description, categories, event, award, likes, \
    comments, how_to_play, play_url, github_url, website_url, submission_id, \
    created_at, updated_at";

/// Column list for team_members queries.
const MEMBER_COLUMNS: &str = "id, project_id, name, twitter, image, created_at";

/// Shared WHERE clause for the list/count filter pair. Every parameter is
/// always bound; absent filters collapse to TRUE.
const FILTER_CLAUSE: &str = "(cardinality($1::text[]) = 0 OR categories && $1)
       AND ($2::text IS NULL OR event = $2)
       AND ($3::text IS NULL OR award = $3)
       AND ($4::text IS NULL OR name ILIKE '%' || $4 || '%' OR description ILIKE '%' || $4 || '%')";

/// Sortable columns exposed to the list endpoint.
fn order_clause(sort_by: Option<&str>, sort_order: Option<&str>) -> &'static str {
    let descending = !matches!(sort_order, Some(o) if o.eq_ignore_ascii_case("asc"));
    match (sort_by, descending) {
        (Some("name"), false) => "name ASC",
        (Some("name"), true) => "name DESC",
        (Some("likes"), false) => "likes ASC",
        (Some("likes"), true) => "likes DESC",
        (Some("event"), false) => "event ASC",
        (Some("event"), true) => "event DESC",
        (Some("created_at"), false) => "created_at ASC",
        (_, _) => "created_at DESC",
    }
}

/// Provides CRUD operations for published projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by name (duplicate pre-check).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List the team members of a project in creation order.
    pub async fn list_team(pool: &PgPool, project_id: DbId) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE project_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a project and its team members.
    pub async fn find_with_team(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithTeam>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let team = Self::list_team(pool, project.id).await?;
        Ok(Some(ProjectWithTeam { project, team }))
    }

    /// List projects matching the filter, with whitelisted sorting and
    /// pagination.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let order = order_clause(sort_by, sort_order);
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {FILTER_CLAUSE}
             ORDER BY {order}
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&filter.categories)
            .bind(&filter.event)
            .bind(&filter.award)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects matching the filter.
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {FILTER_CLAUSE}");
        let count: (i64,) = sqlx::query_as(&query)
            .bind(&filter.categories)
            .bind(&filter.event)
            .bind(&filter.award)
            .bind(&filter.search)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Distinct filter values across all published projects.
    pub async fn filter_options(pool: &PgPool) -> Result<ProjectFilterOptions, sqlx::Error> {
        let categories: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT unnest(categories) FROM projects ORDER BY 1",
        )
        .fetch_all(pool)
        .await?;
        let events: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT event FROM projects ORDER BY 1")
                .fetch_all(pool)
                .await?;
        let awards: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT award FROM projects WHERE award <> '' ORDER BY 1")
                .fetch_all(pool)
                .await?;
        Ok(ProjectFilterOptions {
            categories: categories.into_iter().map(|c| c.0).collect(),
            events: events.into_iter().map(|e| e.0).collect(),
            awards: awards.into_iter().map(|a| a.0).collect(),
        })
    }

    /// Atomically increment the like counter. Returns `true` if the project
    /// exists.
    ///
    /// Single UPDATE statement so concurrent likes never lose updates.
    pub async fn increment_likes(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET likes = likes + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Promote an approved submission into a published project.
    ///
    /// One transaction: insert the project, batch-insert its team members,
    /// then claim the submission with a conditional link write. If another
    /// review already linked a project (`approved_project_id` no longer
    /// NULL), the whole transaction rolls back and `None` is returned --
    /// at most one project per submission, even under concurrent approvals.
    pub async fn create_from_submission(
        pool: &PgPool,
        submission: &Submission,
        team: &[TeamMemberInput],
        now: Timestamp,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects
                (name, logo, description, categories, event, award, likes, comments,
                 how_to_play, play_url, github_url, website_url, submission_id)
             VALUES ($1, $2, $3, $4, $5, '', 0, 0, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&submission.project_name)
            .bind(&submission.photo_link)
            .bind(&submission.description)
            .bind(&submission.categories)
            .bind(&submission.event)
            .bind(&submission.how_to_play)
            .bind(&submission.play_link)
            .bind(&submission.github_link)
            .bind(&submission.website_link)
            .bind(&submission.id)
            .fetch_one(&mut *tx)
            .await?;

        for member in team {
            sqlx::query(
                "INSERT INTO team_members (project_id, name, twitter, image)
                 VALUES ($1, $2, $3, '')",
            )
            .bind(project.id)
            .bind(&member.name)
            .bind(&member.twitter)
            .execute(&mut *tx)
            .await?;
        }

        // Conditional claim: only the first promoter links and publishes.
        let claimed = sqlx::query(
            "UPDATE submissions
             SET approved_project_id = $2, published_at = $3, updated_at = NOW()
             WHERE id = $1 AND approved_project_id IS NULL",
        )
        .bind(&submission.id)
        .bind(project.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Apply post-publication extras: optional award overwrite and photo
    /// updates for team members matched by display name, as one unit.
    pub async fn update_extras(
        pool: &PgPool,
        project_id: DbId,
        award: Option<&str>,
        photos: &HashMap<String, String>,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        if let Some(award) = award {
            sqlx::query("UPDATE projects SET award = $2, updated_at = NOW() WHERE id = $1")
                .bind(project_id)
                .bind(award)
                .execute(&mut *tx)
                .await?;
        }

        for (member_name, photo_url) in photos {
            // Names with no matching member update zero rows, silently.
            sqlx::query(
                "UPDATE team_members SET image = $3 WHERE project_id = $1 AND name = $2",
            )
            .bind(project_id)
            .bind(member_name)
            .bind(photo_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
