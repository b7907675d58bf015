//! Project record and the payload accepted by create/update.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::projects::id::ProjectId;

/// A stored project.
///
/// Absent fields are omitted from the JSON rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Project {
    /// True if the title contains `needle` (case-sensitive).
    /// A project without a title never matches.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title
            .as_deref()
            .map(|title| title.contains(needle))
            .unwrap_or(false)
    }
}

/// Body of `POST /projects` and `PUT /projects/{id}`.
///
/// Deliberately lenient: missing fields and `null` become `None`, and any
/// non-string value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub owner: Option<String>,
}

impl ProjectPayload {
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            owner: Some(owner.into()),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
