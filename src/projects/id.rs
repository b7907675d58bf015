//! Project identifiers.
//!
//! # Responsibilities
//! - Generate fresh identifiers (UUID v4)
//! - Decide whether a route parameter is a well-formed identifier
//!
//! # Design Decisions
//! - Only the canonical form is accepted: 36 chars, lowercase hex in
//!   8-4-4-4-12 groups. `Uuid::parse_str` alone would also take the simple,
//!   braced and URN forms, and uppercase digits.
//! - Any UUID version passes; generation always uses v4.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permanent key of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Uuid's Display is the lowercase hyphenated form.
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical UUID: {0:?}")]
pub struct InvalidProjectId(pub String);

impl FromStr for ProjectId {
    type Err = InvalidProjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_canonical(s)
            .map(Self)
            .ok_or_else(|| InvalidProjectId(s.to_string()))
    }
}

/// Returns true if `candidate` is a canonical hyphenated UUID string.
pub fn is_project_id(candidate: &str) -> bool {
    parse_canonical(candidate).is_some()
}

// Parse, then require the input to equal its own hyphenated rendering.
fn parse_canonical(candidate: &str) -> Option<Uuid> {
    Uuid::try_parse(candidate)
        .ok()
        .filter(|uuid| uuid.hyphenated().to_string() == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_canonical() {
        for _ in 0..100 {
            let id = ProjectId::generate();
            assert!(is_project_id(&id.to_string()), "{} should validate", id);
        }
    }

    #[test]
    fn test_accepts_canonical_forms() {
        assert!(is_project_id("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_project_id("00000000-0000-0000-0000-000000000000"));
        // Version nibble is not checked.
        assert!(is_project_id("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_project_id(""));
        assert!(!is_project_id("not-a-uuid"));
        assert!(!is_project_id("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!is_project_id("{67e55044-10b1-426f-9247-bb680e5fe0c8}"));
        assert!(!is_project_id("urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_project_id("67E55044-10B1-426F-9247-BB680E5FE0C8"));
        assert!(!is_project_id("67e55044-10b1-426f-9247-bb680e5fe0cg"));
        assert!(!is_project_id("67e55044-10b1-426f-9247bbb680e5fe0c8"));
        assert!(!is_project_id("67e55044-10b1-426f-9247-bb680e5fe0c8 "));
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = ProjectId::generate();
        let parsed: ProjectId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let err = "nope".parse::<ProjectId>().unwrap_err();
        assert_eq!(err, InvalidProjectId("nope".to_string()));
    }
}
