//! Team member input type, completeness validation, and the photo-patch
//! matching rules used by the extras updater.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A team member as supplied on the submission form.
///
/// Stored inside the submission row as a JSONB array in exactly this shape,
/// and materialized into `team_members` rows at promotion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberInput {
    pub name: String,
    pub twitter: String,
}

/// Check that every member has a non-empty name and twitter handle.
pub fn is_valid_team_members(members: &[TeamMemberInput]) -> bool {
    members
        .iter()
        .all(|m| !m.name.is_empty() && !m.twitter.is_empty())
}

/// Deserialize the stored JSONB team payload back into typed members.
///
/// A corrupt payload is a [`CoreError::Deserialization`], which aborts
/// promotion: the submission stays un-promoted until an operator retries.
pub fn parse_team_members(payload: &serde_json::Value) -> Result<Vec<TeamMemberInput>, CoreError> {
    serde_json::from_value(payload.clone()).map_err(|e| CoreError::Deserialization(e.to_string()))
}

/// One entry of a team-photo patch request.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamPhotoEntry {
    pub member_name: String,
    pub photo_url: String,
}

/// Fold photo entries into a name -> URL lookup.
///
/// Entries with an empty URL are dropped; duplicate names resolve to the
/// last-seen entry. Matching is by display name - two members sharing a
/// name are indistinguishable here, a known gap inherited from the data
/// model (members have no stable external key).
pub fn build_photo_map(entries: &[TeamPhotoEntry]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in entries {
        if !entry.photo_url.is_empty() {
            map.insert(entry.member_name.clone(), entry.photo_url.clone());
        }
    }
    map
}
