use super::LinkStore;
use crate::error::{EntityKind, LinkError, Result};
use crate::models::{Bookmark, BookmarkDraft, BookmarkPatch};
use crate::utils;

impl LinkStore {
    pub fn get_bookmarks(&self) -> Vec<Bookmark> {
        self.load_bookmarks()
    }

    pub fn get_bookmark(&self, id: &str) -> Option<Bookmark> {
        self.load_bookmarks().into_iter().find(|b| b.id == id)
    }

    pub fn add_bookmark(&self, draft: BookmarkDraft) -> Result<Bookmark> {
        let mut bookmarks = self.load_bookmarks();
        let bookmark = Bookmark::from_draft(utils::generate_id(), draft, &utils::now_iso());

        bookmarks.push(bookmark.clone());
        self.save_bookmarks(&bookmarks, "Failed to save bookmark")?;
        log::debug!("Added bookmark {} ({})", bookmark.id, bookmark.url);
        Ok(bookmark)
    }

    pub fn update_bookmark(&self, id: &str, patch: BookmarkPatch) -> Result<Bookmark> {
        let mut bookmarks = self.load_bookmarks();
        let bookmark = bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LinkError::not_found(EntityKind::Bookmark, id))?;

        bookmark.apply(patch);
        bookmark.updated_at = utils::now_iso();
        let updated = bookmark.clone();

        self.save_bookmarks(&bookmarks, "Failed to update bookmark")?;
        Ok(updated)
    }

    pub fn delete_bookmark(&self, id: &str) -> Result<()> {
        let bookmarks = self.load_bookmarks();
        let before = bookmarks.len();
        let filtered: Vec<Bookmark> = bookmarks.into_iter().filter(|b| b.id != id).collect();

        if filtered.len() == before {
            return Err(LinkError::not_found(EntityKind::Bookmark, id));
        }

        self.save_bookmarks(&filtered, "Failed to delete bookmark")
    }

    /// Record a visit: bump the counter and stamp `last_visited`
    pub fn increment_visit_count(&self, id: &str) -> Result<Bookmark> {
        let mut bookmarks = self.load_bookmarks();
        let bookmark = bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LinkError::not_found(EntityKind::Bookmark, id))?;

        let now = utils::now_iso();
        bookmark.visit_count += 1;
        bookmark.last_visited = Some(now.clone());
        bookmark.updated_at = now;
        let updated = bookmark.clone();

        self.save_bookmarks(&bookmarks, "Failed to update visit count")?;
        Ok(updated)
    }

    pub fn clear_all_bookmarks(&self) -> Result<()> {
        self.save_bookmarks(&[], "Failed to clear bookmarks")
    }
}
