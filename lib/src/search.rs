//! Query, filter and sort helpers over loaded bookmarks.
//!
//! These are pure functions over in-memory collections; nothing here touches
//! the data files.

use crate::models::{Bookmark, Tag};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Range;
use std::str::FromStr;

const MAX_HISTORY: usize = 10;

/// Case-insensitive substring match on title, URL, description and tag names.
/// A blank query matches nothing; otherwise the query is matched as typed,
/// surrounding whitespace included.
pub fn search_bookmarks<'a>(bookmarks: &'a [Bookmark], tags: &[Tag], query: &str) -> Vec<&'a Bookmark> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle)
                || b.url.to_lowercase().contains(&needle)
                || b.description.to_lowercase().contains(&needle)
                || tags
                    .iter()
                    .filter(|t| b.has_tag(&t.id))
                    .any(|t| t.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Byte ranges of every case-insensitive occurrence of `query` in `text`.
///
/// The query is literal text, never a pattern. Blank queries and empty text
/// give no ranges.
pub fn highlight(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.trim().is_empty() || text.is_empty() {
        return Vec::new();
    }

    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(e) => {
            log::warn!("Cannot build highlight pattern for {:?}: {}", query, e);
            Vec::new()
        }
    }
}

/// Bookmarks in a folder; an empty id selects uncategorized ones
pub fn filter_by_folder<'a>(bookmarks: &'a [Bookmark], folder_id: &str) -> Vec<&'a Bookmark> {
    bookmarks.iter().filter(|b| b.folder_id == folder_id).collect()
}

pub fn filter_by_tag<'a>(bookmarks: &'a [Bookmark], tag_id: &str) -> Vec<&'a Bookmark> {
    bookmarks.iter().filter(|b| b.has_tag(tag_id)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Created,
    Updated,
    Title,
    Visits,
    LastVisited,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(SortKey::Created),
            "updated" => Ok(SortKey::Updated),
            "title" => Ok(SortKey::Title),
            "visits" => Ok(SortKey::Visits),
            "last-visited" | "lastvisited" => Ok(SortKey::LastVisited),
            other => Err(format!("unknown sort key: '{}'", other)),
        }
    }
}

/// Stable sort. Never-visited bookmarks sort before visited ones on `LastVisited`.
pub fn sort_bookmarks(bookmarks: &mut [Bookmark], key: SortKey, descending: bool) {
    bookmarks.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn compare(a: &Bookmark, b: &Bookmark, key: SortKey) -> Ordering {
    match key {
        // RFC 3339 UTC strings order lexicographically
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Visits => a.visit_count.cmp(&b.visit_count),
        SortKey::LastVisited => a.last_visited.cmp(&b.last_visited),
    }
}

/// Recent search queries, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: VecDeque<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        self.entries.retain(|q| q != trimmed);
        self.entries.push_front(trimmed.to_string());
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn remove(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
