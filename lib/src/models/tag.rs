use super::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// A label assignable to any number of bookmarks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagDraft {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Tag {
    pub fn from_draft(id: String, draft: TagDraft, now: &str) -> Self {
        Self {
            id,
            name: draft
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "New Tag".to_string()),
            color: draft
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: now.to_string(),
        }
    }

    pub fn apply(&mut self, patch: TagPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}
