use super::LinkStore;
use crate::error::{EntityKind, LinkError, Result};
use crate::models::folder::next_order;
use crate::models::{Folder, FolderDraft, FolderPatch};
use crate::utils;

impl LinkStore {
    pub fn get_folders(&self) -> Vec<Folder> {
        self.load_folders()
    }

    pub fn add_folder(&self, draft: FolderDraft) -> Result<Folder> {
        let mut folders = self.load_folders();
        let folder = Folder::from_draft(
            utils::generate_id(),
            draft,
            next_order(&folders),
            &utils::now_iso(),
        );

        folders.push(folder.clone());
        self.save_folders(&folders, "Failed to save folder")?;
        Ok(folder)
    }

    pub fn update_folder(&self, id: &str, patch: FolderPatch) -> Result<Folder> {
        let mut folders = self.load_folders();
        let folder = folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| LinkError::not_found(EntityKind::Folder, id))?;

        folder.apply(patch);
        let updated = folder.clone();

        self.save_folders(&folders, "Failed to update folder")?;
        Ok(updated)
    }

    /// Remove a folder. Its bookmarks survive and become uncategorized.
    pub fn delete_folder(&self, id: &str) -> Result<()> {
        let folders = self.load_folders();
        let before = folders.len();
        let filtered: Vec<Folder> = folders.into_iter().filter(|f| f.id != id).collect();

        if filtered.len() == before {
            return Err(LinkError::not_found(EntityKind::Folder, id));
        }

        self.save_folders(&filtered, "Failed to delete folder")?;

        let mut bookmarks = self.load_bookmarks();
        let mut detached = 0;
        for bookmark in bookmarks.iter_mut().filter(|b| b.folder_id == id) {
            bookmark.folder_id.clear();
            detached += 1;
        }
        log::debug!("Folder {} deleted, {} bookmark(s) uncategorized", id, detached);

        self.save_bookmarks(&bookmarks, "Failed to update bookmarks")
    }

    pub fn clear_all_folders(&self) -> Result<()> {
        self.save_folders(&[], "Failed to clear folders")?;

        let mut bookmarks = self.load_bookmarks();
        for bookmark in bookmarks.iter_mut() {
            bookmark.folder_id.clear();
        }

        self.save_bookmarks(&bookmarks, "Failed to update bookmarks")
    }
}
