use super::LinkStore;
use crate::error::{EntityKind, LinkError, Result};
use crate::models::{Tag, TagDraft, TagPatch};
use crate::utils;

impl LinkStore {
    pub fn get_tags(&self) -> Vec<Tag> {
        self.load_tags()
    }

    pub fn add_tag(&self, draft: TagDraft) -> Result<Tag> {
        let mut tags = self.load_tags();
        let tag = Tag::from_draft(utils::generate_id(), draft, &utils::now_iso());

        tags.push(tag.clone());
        self.save_tags(&tags, "Failed to save tag")?;
        Ok(tag)
    }

    pub fn update_tag(&self, id: &str, patch: TagPatch) -> Result<Tag> {
        let mut tags = self.load_tags();
        let tag = tags
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LinkError::not_found(EntityKind::Tag, id))?;

        tag.apply(patch);
        let updated = tag.clone();

        self.save_tags(&tags, "Failed to update tag")?;
        Ok(updated)
    }

    /// Remove a tag and strip its id from every bookmark
    pub fn delete_tag(&self, id: &str) -> Result<()> {
        let tags = self.load_tags();
        let before = tags.len();
        let filtered: Vec<Tag> = tags.into_iter().filter(|t| t.id != id).collect();

        if filtered.len() == before {
            return Err(LinkError::not_found(EntityKind::Tag, id));
        }

        self.save_tags(&filtered, "Failed to delete tag")?;

        let mut bookmarks = self.load_bookmarks();
        for bookmark in bookmarks.iter_mut() {
            bookmark.tags.retain(|tag_id| tag_id != id);
        }

        self.save_bookmarks(&bookmarks, "Failed to update bookmarks")
    }

    pub fn clear_all_tags(&self) -> Result<()> {
        self.save_tags(&[], "Failed to clear tags")?;

        let mut bookmarks = self.load_bookmarks();
        for bookmark in bookmarks.iter_mut() {
            bookmark.tags.clear();
        }

        self.save_bookmarks(&bookmarks, "Failed to update bookmarks")
    }
}
