use super::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// A named, ordered grouping of bookmarks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub color: String,
    pub created_at: String,
    /// Display rank; new folders append at max+1
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FolderDraft {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FolderPatch {
    pub name: Option<String>,
    pub icon: Option<Option<String>>,
    pub color: Option<String>,
    pub order: Option<i64>,
}

impl Folder {
    pub fn from_draft(id: String, draft: FolderDraft, order: i64, now: &str) -> Self {
        Self {
            id,
            name: draft
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "New Folder".to_string()),
            icon: draft.icon.filter(|i| !i.is_empty()),
            color: draft
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: now.to_string(),
            order,
        }
    }

    pub fn apply(&mut self, patch: FolderPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// Order value for a folder appended after `folders`
pub fn next_order(folders: &[Folder]) -> i64 {
    folders.iter().map(|f| f.order).max().unwrap_or(0) + 1
}
