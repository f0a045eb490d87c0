//! Submission status vocabulary and review-transition decision rules.
//!
//! The lifecycle is deliberately permissive: any status may follow any
//! other, so a submission can move requires_changes -> under_review ->
//! approved. The three decision statuses are "terminal-ish" - re-enterable,
//! not final. What IS guarded is the one-time nature of the
//! review_started_at and published_at stamps and of promotion itself.

use crate::types::Timestamp;

/// Initial status of every submission.
pub const STATUS_PENDING: &str = "pending";

/// An admin has started looking at the submission.
pub const STATUS_UNDER_REVIEW: &str = "under_review";

/// Submission was approved and published as a project.
pub const STATUS_APPROVED: &str = "approved";

/// Submission was rejected.
pub const STATUS_REJECTED: &str = "rejected";

/// Submission needs changes before it can be approved.
pub const STATUS_REQUIRES_CHANGES: &str = "requires_changes";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_UNDER_REVIEW,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_REQUIRES_CHANGES,
];

/// Check that a status string is one of the accepted values.
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

/// Whether a status is a review decision (approved/rejected/requires_changes).
pub fn is_decision(status: &str) -> bool {
    matches!(
        status,
        STATUS_APPROVED | STATUS_REJECTED | STATUS_REQUIRES_CHANGES
    )
}

/// Resolve the `review_started_at` value after a transition.
///
/// Only the first entry into under_review stamps it; every later
/// transition keeps the existing value untouched.
pub fn review_started_stamp(
    new_status: &str,
    current: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    match current {
        Some(existing) => Some(existing),
        None if new_status == STATUS_UNDER_REVIEW => Some(now),
        None => None,
    }
}

/// Resolve the `reviewed_at` value after a transition.
///
/// Every decision re-stamps it; non-decision transitions keep the existing
/// value.
pub fn reviewed_stamp(
    new_status: &str,
    current: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    if is_decision(new_status) {
        Some(now)
    } else {
        current
    }
}

/// Whether this transition must promote the submission into a project.
///
/// Promotion happens exactly once: on a transition INTO approved, from a
/// non-approved status, while no project is linked yet. The link check is
/// re-verified with a conditional write at the store so a concurrent
/// promoter cannot double-publish.
pub fn should_promote(new_status: &str, previous_status: &str, already_linked: bool) -> bool {
    new_status == STATUS_APPROVED && previous_status != STATUS_APPROVED && !already_linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> Timestamp {
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn all_listed_statuses_are_valid() {
        for status in VALID_STATUSES {
            assert!(is_valid_status(status));
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(!is_valid_status("archived"));
        assert!(!is_valid_status(""));
    }

    #[test]
    fn decisions_are_exactly_the_three_terminal_ish_statuses() {
        assert!(is_decision(STATUS_APPROVED));
        assert!(is_decision(STATUS_REJECTED));
        assert!(is_decision(STATUS_REQUIRES_CHANGES));
        assert!(!is_decision(STATUS_PENDING));
        assert!(!is_decision(STATUS_UNDER_REVIEW));
    }

    #[test]
    fn first_under_review_stamps_review_started() {
        let stamped = review_started_stamp(STATUS_UNDER_REVIEW, None, ts(100));
        assert_eq!(stamped, Some(ts(100)));
    }

    #[test]
    fn second_under_review_keeps_original_stamp() {
        let stamped = review_started_stamp(STATUS_UNDER_REVIEW, Some(ts(100)), ts(200));
        assert_eq!(stamped, Some(ts(100)));
    }

    #[test]
    fn decision_does_not_stamp_review_started() {
        assert_eq!(review_started_stamp(STATUS_APPROVED, None, ts(100)), None);
    }

    #[test]
    fn every_decision_restamps_reviewed_at() {
        assert_eq!(
            reviewed_stamp(STATUS_REJECTED, Some(ts(100)), ts(200)),
            Some(ts(200))
        );
        assert_eq!(reviewed_stamp(STATUS_APPROVED, None, ts(300)), Some(ts(300)));
    }

    #[test]
    fn non_decision_keeps_reviewed_at() {
        assert_eq!(
            reviewed_stamp(STATUS_UNDER_REVIEW, Some(ts(100)), ts(200)),
            Some(ts(100))
        );
        assert_eq!(reviewed_stamp(STATUS_PENDING, None, ts(200)), None);
    }

    #[test]
    fn first_approval_promotes() {
        assert!(should_promote(STATUS_APPROVED, STATUS_PENDING, false));
        assert!(should_promote(
            STATUS_APPROVED,
            STATUS_REQUIRES_CHANGES,
            false
        ));
    }

    #[test]
    fn repeated_approval_does_not_promote() {
        assert!(!should_promote(STATUS_APPROVED, STATUS_APPROVED, false));
    }

    #[test]
    fn linked_submission_never_promotes_again() {
        // rejected -> approved with an existing project link: the earlier
        // promotion already published it.
        assert!(!should_promote(STATUS_APPROVED, STATUS_REJECTED, true));
    }

    #[test]
    fn non_approval_never_promotes() {
        assert!(!should_promote(STATUS_REJECTED, STATUS_PENDING, false));
        assert!(!should_promote(STATUS_UNDER_REVIEW, STATUS_PENDING, false));
    }
}
