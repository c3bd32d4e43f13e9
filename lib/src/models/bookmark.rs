use super::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// A saved URL with its metadata and visit statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub color: String,
    /// Empty string means uncategorized
    pub folder_id: String,
    /// Tag ids
    pub tags: Vec<String>,
    pub visit_count: u64,
    pub last_visited: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating a bookmark; everything unset gets a default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkDraft {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub color: Option<String>,
    pub folder_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BookmarkDraft {
    pub fn with_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub color: Option<String>,
    pub folder_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.favicon.is_none()
            && self.color.is_none()
            && self.folder_id.is_none()
            && self.tags.is_none()
    }
}

impl Bookmark {
    /// Build a new record from a draft. Title falls back to the URL.
    pub fn from_draft(id: String, draft: BookmarkDraft, now: &str) -> Self {
        let url = draft.url.unwrap_or_default();
        let title = match draft.title {
            Some(t) if !t.is_empty() => t,
            _ => url.clone(),
        };
        let color = match draft.color {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_COLOR.to_string(),
        };

        Self {
            id,
            url,
            title,
            description: draft.description.unwrap_or_default(),
            favicon: draft.favicon.unwrap_or_default(),
            color,
            folder_id: draft.folder_id.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            visit_count: 0,
            last_visited: None,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    pub fn apply(&mut self, patch: BookmarkPatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(favicon) = patch.favicon {
            self.favicon = favicon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(folder_id) = patch.folder_id {
            self.folder_id = folder_id;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        self.folder_id.is_empty()
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }
}
