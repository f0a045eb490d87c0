//! Submission identifier generation and format validation.
//!
//! Identifiers look like `SUB-1749035470531-4W6UZJ`: the literal prefix, the
//! millisecond epoch timestamp at generation time, and a 6-character
//! uppercase alphanumeric tag. Uniqueness rests on timestamp granularity
//! plus the 36^6 random space; there is no coordination round-trip.

use rand::Rng;

/// Literal prefix of every submission identifier.
pub const ID_PREFIX: &str = "SUB";

/// Length of the random tag portion.
pub const TAG_LENGTH: usize = 6;

/// Minimum digits expected in the timestamp portion (millisecond epoch).
const MIN_TIMESTAMP_LENGTH: usize = 10;

/// Alphabet for the random tag.
const TAG_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a submission identifier stamped with the given millisecond
/// epoch timestamp.
///
/// Callers pass `Utc::now().timestamp_millis()`; tests pass a fixed value.
pub fn generate(timestamp_millis: i64) -> String {
    let mut rng = rand::rng();
    let tag: String = (0..TAG_LENGTH)
        .map(|_| TAG_CHARSET[rng.random_range(0..TAG_CHARSET.len())] as char)
        .collect();
    format!("{ID_PREFIX}-{timestamp_millis}-{tag}")
}

/// Check whether a string is a well-formed submission identifier.
///
/// This is a format gate, not a cryptographic check: exactly three
/// hyphen-delimited parts, the literal prefix, a timestamp part of at least
/// ten characters (no numeric parse), and a tag of exactly six characters.
pub fn is_valid(submission_id: &str) -> bool {
    let parts: Vec<&str> = submission_id.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    if parts[0] != ID_PREFIX {
        return false;
    }
    if parts[1].len() < MIN_TIMESTAMP_LENGTH {
        return false;
    }
    parts[2].len() == TAG_LENGTH
}
