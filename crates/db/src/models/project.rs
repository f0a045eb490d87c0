//! Published project and team member models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use devhub_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub categories: Vec<String>,
    pub event: String,
    pub award: String,
    pub likes: i32,
    pub comments: i32,
    pub how_to_play: String,
    pub play_url: String,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub submission_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub twitter: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// A project together with its team, as returned by the read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTeam {
    #[serde(flatten)]
    pub project: Project,
    pub team: Vec<TeamMember>,
}

/// Optional filters for the project list endpoint. All present filters are
/// combined with AND; `categories` matches rows whose tag set overlaps.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub categories: Vec<String>,
    pub event: Option<String>,
    pub award: Option<String>,
    pub search: Option<String>,
}

/// Distinct filter values currently present on published projects, offered
/// to clients for building filter UIs.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFilterOptions {
    pub categories: Vec<String>,
    pub events: Vec<String>,
    pub awards: Vec<String>,
}

/// Request body for the project-extras endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExtrasRequest {
    pub award: Option<String>,
    pub team_photos: Option<Vec<devhub_core::team::TeamPhotoEntry>>,
}
