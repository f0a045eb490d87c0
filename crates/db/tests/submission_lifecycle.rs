//! Integration tests for the submission workflow repositories.
//!
//! Exercises the repository layer against a real database:
//! - Submission intake insert and fetch
//! - Duplicate name rejection via the unique constraints
//! - Promotion transaction (project + team members + conditional link)
//! - Review field updates and timestamp storage
//! - Status histogram, extras updates, atomic like increment

use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use devhub_core::lifecycle::{STATUS_APPROVED, STATUS_PENDING, STATUS_UNDER_REVIEW};
use devhub_core::team::{parse_team_members, TeamMemberInput};
use devhub_db::models::submission::{CreateSubmission, ReviewUpdate};
use devhub_db::repositories::{ProjectRepo, SubmissionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_submission(id: &str, project_name: &str) -> CreateSubmission {
    CreateSubmission {
        id: id.to_string(),
        project_name: project_name.to_string(),
        description: "An on-chain swap aggregator".to_string(),
        photo_link: "https://img.example/logo.png".to_string(),
        event: "Hackathon 2024".to_string(),
        categories: vec!["DeFi".to_string()],
        team_members: json!([
            {"name": "Alex", "twitter": "a"},
            {"name": "Sam", "twitter": "s"}
        ]),
        github_link: None,
        website_link: None,
        play_link: "https://play.example".to_string(),
        how_to_play: "Connect a wallet and swap".to_string(),
        additional_notes: None,
        submitted_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_fetch_submission(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
        .await
        .unwrap();
    assert_eq!(created.status, STATUS_PENDING);
    assert!(created.review_started_at.is_none());
    assert!(created.approved_project_id.is_none());

    let fetched = SubmissionRepo::find_by_id(&pool, "SUB-1749035470531-AAAAAA")
        .await
        .unwrap()
        .expect("submission should exist");
    assert_eq!(fetched.project_name, "MonadSwap");

    let by_name = SubmissionRepo::find_by_project_name(&pool, "MonadSwap")
        .await
        .unwrap();
    assert!(by_name.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_project_name_rejected_by_constraint(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
        .await
        .unwrap();

    let err = SubmissionRepo::create(&pool, &new_submission("SUB-1749035470532-BBBBBB", "MonadSwap"))
        .await
        .expect_err("second submission with same name should fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_submissions_project_name"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Promotion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_promotion_creates_project_with_team(pool: PgPool) {
    let submission =
        SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
            .await
            .unwrap();
    let team = parse_team_members(&submission.team_members).unwrap();
    let now = Utc::now();

    let project = ProjectRepo::create_from_submission(&pool, &submission, &team, now)
        .await
        .unwrap()
        .expect("first promotion should create the project");

    assert_eq!(project.name, "MonadSwap");
    assert_eq!(project.award, "");
    assert_eq!(project.likes, 0);
    assert_eq!(project.comments, 0);
    assert_eq!(project.submission_id.as_deref(), Some(submission.id.as_str()));

    let members = ProjectRepo::list_team(&pool, project.id).await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Alex");
    assert_eq!(members[0].image, "", "photos start empty");

    let linked = SubmissionRepo::find_by_id(&pool, &submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(linked.approved_project_id, Some(project.id));
    assert!(linked.published_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_promotion_is_refused(pool: PgPool) {
    let submission =
        SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
            .await
            .unwrap();
    let team: Vec<TeamMemberInput> = parse_team_members(&submission.team_members).unwrap();

    ProjectRepo::create_from_submission(&pool, &submission, &team, Utc::now())
        .await
        .unwrap()
        .expect("first promotion succeeds");

    // The stale snapshot still shows no link; the conditional write must
    // refuse the claim and roll the second project back.
    let second = ProjectRepo::create_from_submission(&pool, &submission, &team, Utc::now())
        .await
        .unwrap();
    assert!(second.is_none(), "second promotion should lose the claim");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1, "exactly one project may exist per submission");
}

// ---------------------------------------------------------------------------
// Review updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_review_stores_resolved_fields(pool: PgPool) {
    let submission =
        SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
            .await
            .unwrap();
    let now = Utc::now();

    let updated = SubmissionRepo::apply_review(
        &pool,
        &submission.id,
        &ReviewUpdate {
            status: STATUS_UNDER_REVIEW.to_string(),
            feedback: Some("Looking good".to_string()),
            changes_requested: None,
            reviewer_id: Some(1),
            review_started_at: Some(now),
            reviewed_at: None,
        },
    )
    .await
    .unwrap()
    .expect("submission exists");

    assert_eq!(updated.status, STATUS_UNDER_REVIEW);
    assert_eq!(updated.feedback.as_deref(), Some("Looking good"));
    assert_eq!(updated.reviewer_id, Some(1));
    assert!(updated.review_started_at.is_some());
    assert!(updated.reviewed_at.is_none());

    let missing = SubmissionRepo::apply_review(
        &pool,
        "SUB-0000000000-ZZZZZZ",
        &ReviewUpdate {
            status: STATUS_APPROVED.to_string(),
            feedback: None,
            changes_requested: None,
            reviewer_id: None,
            review_started_at: None,
            reviewed_at: Some(now),
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_histogram_counts_all_statuses(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
        .await
        .unwrap();
    SubmissionRepo::create(&pool, &new_submission("SUB-1749035470532-BBBBBB", "PixelQuest"))
        .await
        .unwrap();

    let stats = SubmissionRepo::status_histogram(&pool).await.unwrap();
    assert_eq!(stats.get("pending"), Some(&2));
    assert_eq!(stats.get("approved"), Some(&0));
    assert_eq!(stats.len(), 5, "every status reports a bucket");
}

// ---------------------------------------------------------------------------
// Extras and likes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_extras_matches_members_by_name(pool: PgPool) {
    let submission =
        SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
            .await
            .unwrap();
    let team = parse_team_members(&submission.team_members).unwrap();
    let project = ProjectRepo::create_from_submission(&pool, &submission, &team, Utc::now())
        .await
        .unwrap()
        .unwrap();

    let mut photos = std::collections::HashMap::new();
    photos.insert("Alex".to_string(), "https://x/y.png".to_string());
    photos.insert("Nobody".to_string(), "https://x/z.png".to_string());

    ProjectRepo::update_extras(&pool, project.id, Some("Best DeFi"), &photos)
        .await
        .unwrap();

    let reloaded = ProjectRepo::find_with_team(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.project.award, "Best DeFi");

    let alex = reloaded.team.iter().find(|m| m.name == "Alex").unwrap();
    assert_eq!(alex.image, "https://x/y.png");
    let sam = reloaded.team.iter().find(|m| m.name == "Sam").unwrap();
    assert_eq!(sam.image, "", "unmatched members keep their photo");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_increment_likes(pool: PgPool) {
    let submission =
        SubmissionRepo::create(&pool, &new_submission("SUB-1749035470531-AAAAAA", "MonadSwap"))
            .await
            .unwrap();
    let team = parse_team_members(&submission.team_members).unwrap();
    let project = ProjectRepo::create_from_submission(&pool, &submission, &team, Utc::now())
        .await
        .unwrap()
        .unwrap();

    assert!(ProjectRepo::increment_likes(&pool, project.id).await.unwrap());
    assert!(ProjectRepo::increment_likes(&pool, project.id).await.unwrap());

    let reloaded = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.likes, 2);

    assert!(!ProjectRepo::increment_likes(&pool, 999_999).await.unwrap());
}
