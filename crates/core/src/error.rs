//! Domain error taxonomy shared by the DB and API layers.
//!
//! Validation and duplicate failures carry a named sub-kind so the boundary
//! layer can map each one to a stable machine-readable code instead of a
//! generic failure.

/// Which validation rule an intake request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// One or more categories fall outside the fixed vocabulary.
    Categories,
    /// The event is not one of the known hackathon/mission events.
    Event,
    /// A team member is missing a name or social handle.
    TeamMembers,
    /// The status is not a known submission status.
    Status,
}

impl ValidationKind {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationKind::Categories => "INVALID_CATEGORIES",
            ValidationKind::Event => "INVALID_EVENT",
            ValidationKind::TeamMembers => "INVALID_TEAM_MEMBERS",
            ValidationKind::Status => "INVALID_STATUS",
        }
    }

    /// Human-readable message matching the code.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationKind::Categories => "Invalid categories provided",
            ValidationKind::Event => "Invalid event provided",
            ValidationKind::TeamMembers => "All team members must have a name and a twitter handle",
            ValidationKind::Status => "Invalid submission status",
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Which namespace already contains the requested project name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    /// A published project already uses the name.
    ProjectName,
    /// A submission already uses the name.
    Submission,
}

impl DuplicateKind {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            DuplicateKind::ProjectName => "DUPLICATE_PROJECT_NAME",
            DuplicateKind::Submission => "DUPLICATE_SUBMISSION",
        }
    }

    /// Human-readable message matching the code.
    pub fn message(&self) -> &'static str {
        match self {
            DuplicateKind::ProjectName => "A project with this name already exists",
            DuplicateKind::Submission => "A submission with this project name already exists",
        }
    }
}

impl std::fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationKind),

    #[error("Duplicate: {0}")]
    Duplicate(DuplicateKind),

    #[error("Corrupt team member payload: {0}")]
    Deserialization(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kinds_have_distinct_codes() {
        let kinds = [
            ValidationKind::Categories,
            ValidationKind::Event,
            ValidationKind::TeamMembers,
            ValidationKind::Status,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn duplicate_display_includes_code() {
        let err = CoreError::Duplicate(DuplicateKind::ProjectName);
        assert!(err.to_string().contains("DUPLICATE_PROJECT_NAME"));
    }

    #[test]
    fn not_found_display_names_entity() {
        let err = CoreError::NotFound {
            entity: "Submission",
            id: "SUB-1-ABCDEF".to_string(),
        };
        assert!(err.to_string().contains("Submission"));
        assert!(err.to_string().contains("SUB-1-ABCDEF"));
    }
}
