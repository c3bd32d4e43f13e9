use super::helpers::{confirm, ensure_valid, resolve_folder_id, resolve_tag, resolve_tag_ids};
use super::misc::OutputOptions;
use super::{AppContext, LinkCommand};
use linkcollection::error::{LinkError, Result};
use linkcollection::models::{Bookmark, BookmarkDraft, BookmarkPatch};
use linkcollection::search::{self, SortKey};
use linkcollection::{favicon, validation};

#[derive(Debug, Clone)]
pub struct ListCommand {
    /// `Some("")` selects uncategorized bookmarks
    pub folder: Option<String>,
    pub tag: Option<String>,
    pub sort: SortKey,
    pub descending: bool,
    pub output: OutputOptions,
}

impl LinkCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmarks = ctx.store.get_bookmarks();
        let folders = ctx.store.get_folders();
        let tags = ctx.store.get_tags();

        let mut selected: Vec<Bookmark> = match &self.folder {
            Some(key) => {
                let folder_id = resolve_folder_id(ctx.store, key)?;
                search::filter_by_folder(&bookmarks, &folder_id)
                    .into_iter()
                    .cloned()
                    .collect()
            }
            None => bookmarks.clone(),
        };
        if let Some(key) = &self.tag {
            let tag = resolve_tag(ctx.store, key)?;
            selected.retain(|b| b.has_tag(&tag.id));
        }

        if selected.is_empty() {
            eprintln!("No bookmarks found.");
            return Ok(());
        }

        search::sort_bookmarks(&mut selected, self.sort, self.descending);
        let records: Vec<&Bookmark> = selected.iter().collect();
        self.output
            .output_format()
            .print_bookmarks(&records, &folders, &tags, None)
    }
}

#[derive(Debug, Clone)]
pub struct AddCommand {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub color: Option<String>,
    pub folder: Option<String>,
    pub tags: Vec<String>,
}

impl AddCommand {
    fn draft(&self, ctx: &AppContext) -> Result<BookmarkDraft> {
        let folder_id = match self.folder.as_deref() {
            Some(key) => Some(resolve_folder_id(ctx.store, key)?),
            None => None,
        };

        let favicon = match &self.favicon {
            Some(f) => Some(f.clone()),
            None if ctx.store.get_settings().auto_fetch_icon
                && favicon::should_fetch_favicon(&self.url) =>
            {
                favicon::favicon_url(&self.url)
            }
            None => None,
        };

        Ok(BookmarkDraft {
            url: Some(self.url.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            favicon,
            color: self.color.clone(),
            folder_id,
            tags: Some(resolve_tag_ids(ctx.store, &self.tags)?),
        })
    }
}

impl LinkCommand for AddCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let draft = self.draft(ctx)?;
        ensure_valid(validation::validate_bookmark_draft(&draft))?;

        let bookmark = ctx.store.add_bookmark(draft)?;
        eprintln!("✓ Added bookmark {}: {}", bookmark.id, bookmark.title);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommand {
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub color: Option<String>,
    /// Empty string moves the bookmark to uncategorized
    pub folder: Option<String>,
    /// `Some(vec![])` clears every tag
    pub tags: Option<Vec<String>>,
}

impl UpdateCommand {
    fn patch(&self, ctx: &AppContext) -> Result<BookmarkPatch> {
        let folder_id = match self.folder.as_deref() {
            Some(key) => Some(resolve_folder_id(ctx.store, key)?),
            None => None,
        };
        let tags = match &self.tags {
            Some(keys) => Some(resolve_tag_ids(ctx.store, keys)?),
            None => None,
        };

        Ok(BookmarkPatch {
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            favicon: self.favicon.clone(),
            color: self.color.clone(),
            folder_id,
            tags,
        })
    }
}

impl LinkCommand for UpdateCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let patch = self.patch(ctx)?;
        if patch.is_empty() {
            return Err(LinkError::InvalidInput("Nothing to update".to_string()));
        }

        let mut errors = Vec::new();
        if let Some(url) = patch.url.as_deref() {
            if !validation::is_valid_url(url) {
                errors.push("Invalid URL format".to_string());
            }
        }
        if let Some(color) = patch.color.as_deref() {
            if !validation::is_valid_color(color) {
                errors.push("Invalid color format".to_string());
            }
        }
        ensure_valid(errors)?;

        let bookmark = ctx.store.update_bookmark(&self.id, patch)?;
        eprintln!("✓ Updated bookmark {}: {}", bookmark.id, bookmark.title);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub id: String,
}

impl LinkCommand for DeleteCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        ctx.store.delete_bookmark(&self.id)?;
        eprintln!("✓ Deleted bookmark {}", self.id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct VisitCommand {
    pub id: String,
}

impl LinkCommand for VisitCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmark = ctx.store.increment_visit_count(&self.id)?;
        eprintln!(
            "✓ {} visited {} time(s)",
            bookmark.title, bookmark.visit_count
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ClearCommand {
    pub force: bool,
}

impl LinkCommand for ClearCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let count = ctx.store.get_bookmarks().len();
        if count == 0 {
            eprintln!("No bookmarks to delete.");
            return Ok(());
        }

        let confirmed = self.force
            || confirm(&format!("\n⚠️  DELETE ALL {} bookmark(s)? [y/N]: ", count))?;
        if !confirmed {
            eprintln!("Deletion cancelled.");
            return Ok(());
        }

        ctx.store.clear_all_bookmarks()?;
        eprintln!("✓ Deleted {} bookmark(s)", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use linkcollection::models::{FolderDraft, SettingsPatch, TagDraft};

    fn add(url: &str) -> AddCommand {
        AddCommand {
            url: url.to_string(),
            title: None,
            description: None,
            favicon: None,
            color: None,
            folder: None,
            tags: Vec::new(),
        }
    }

    fn update(id: &str) -> UpdateCommand {
        UpdateCommand {
            id: id.to_string(),
            url: None,
            title: None,
            description: None,
            favicon: None,
            color: None,
            folder: None,
            tags: None,
        }
    }

    #[test]
    fn test_add_resolves_folder_and_tags_by_name() {
        let env = TestEnv::new();
        let dev = env
            .store
            .add_folder(FolderDraft {
                name: Some("Dev".to_string()),
                ..Default::default()
            })
            .unwrap();
        let rust = env
            .store
            .add_tag(TagDraft {
                name: Some("rust".to_string()),
                color: None,
            })
            .unwrap();

        let mut cmd = add("https://www.rust-lang.org");
        cmd.title = Some("Rust".to_string());
        cmd.folder = Some("Dev".to_string());
        cmd.tags = vec!["rust".to_string()];
        cmd.execute(&env.ctx()).unwrap();

        let bookmarks = env.store.get_bookmarks();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].title, "Rust");
        assert_eq!(bookmarks[0].folder_id, dev.id);
        assert_eq!(bookmarks[0].tags, vec![rust.id]);
    }

    #[test]
    fn test_add_fills_favicon_when_enabled() {
        let env = TestEnv::new();
        add("https://example.com/page").execute(&env.ctx()).unwrap();

        let b = &env.store.get_bookmarks()[0];
        assert_eq!(
            b.favicon,
            "https://www.google.com/s2/favicons?domain=example.com&sz=64"
        );
    }

    #[test]
    fn test_add_skips_favicon_when_disabled() {
        let env = TestEnv::new();
        env.store
            .update_settings(SettingsPatch {
                auto_fetch_icon: Some(false),
                ..Default::default()
            })
            .unwrap();
        add("https://example.com").execute(&env.ctx()).unwrap();

        assert!(env.store.get_bookmarks()[0].favicon.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_url_and_color() {
        let env = TestEnv::new();
        let mut cmd = add("not a url");
        cmd.color = Some("blue".to_string());

        let result = cmd.execute(&env.ctx());
        match result {
            Err(LinkError::InvalidInput(msg)) => {
                assert!(msg.contains("Invalid URL format"));
                assert!(msg.contains("Invalid color format"));
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
        assert!(env.store.get_bookmarks().is_empty());
    }

    #[test]
    fn test_add_with_unknown_tag_fails() {
        let env = TestEnv::new();
        let mut cmd = add("https://example.com");
        cmd.tags = vec!["ghost".to_string()];

        assert!(matches!(
            cmd.execute(&env.ctx()),
            Err(LinkError::NotFound { .. })
        ));
        assert!(env.store.get_bookmarks().is_empty());
    }

    #[test]
    fn test_update_moves_to_uncategorized_and_clears_tags() {
        let env = TestEnv::new();
        let dev = env
            .store
            .add_folder(FolderDraft {
                name: Some("Dev".to_string()),
                ..Default::default()
            })
            .unwrap();
        let rust = env
            .store
            .add_tag(TagDraft {
                name: Some("rust".to_string()),
                color: None,
            })
            .unwrap();
        let b = env
            .store
            .add_bookmark(BookmarkDraft {
                url: Some("https://example.com".to_string()),
                folder_id: Some(dev.id),
                tags: Some(vec![rust.id]),
                ..Default::default()
            })
            .unwrap();

        let mut cmd = update(&b.id);
        cmd.folder = Some(String::new());
        cmd.tags = Some(Vec::new());
        cmd.execute(&env.ctx()).unwrap();

        let updated = env.store.get_bookmark(&b.id).unwrap();
        assert!(updated.folder_id.is_empty());
        assert!(updated.tags.is_empty());
    }

    #[test]
    fn test_update_without_changes_is_rejected() {
        let env = TestEnv::new();
        let b = env
            .store
            .add_bookmark(BookmarkDraft::with_url("https://example.com"))
            .unwrap();

        assert!(matches!(
            update(&b.id).execute(&env.ctx()),
            Err(LinkError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let env = TestEnv::new();
        let mut cmd = update("missing");
        cmd.title = Some("x".to_string());

        assert!(matches!(
            cmd.execute(&env.ctx()),
            Err(LinkError::NotFound { .. })
        ));
    }

    #[test]
    fn test_visit_and_delete() {
        let env = TestEnv::new();
        let b = env
            .store
            .add_bookmark(BookmarkDraft::with_url("https://example.com"))
            .unwrap();

        VisitCommand { id: b.id.clone() }
            .execute(&env.ctx())
            .unwrap();
        let visited = env.store.get_bookmark(&b.id).unwrap();
        assert_eq!(visited.visit_count, 1);
        assert!(visited.last_visited.is_some());

        DeleteCommand { id: b.id.clone() }
            .execute(&env.ctx())
            .unwrap();
        assert!(env.store.get_bookmark(&b.id).is_none());
    }

    #[test]
    fn test_clear_with_force() {
        let env = TestEnv::new();
        for url in ["https://a.example", "https://b.example"] {
            env.store
                .add_bookmark(BookmarkDraft::with_url(url))
                .unwrap();
        }

        ClearCommand { force: true }.execute(&env.ctx()).unwrap();
        assert!(env.store.get_bookmarks().is_empty());
    }

    #[test]
    fn test_list_with_unknown_folder_fails() {
        let env = TestEnv::new();
        let cmd = ListCommand {
            folder: Some("nowhere".to_string()),
            tag: None,
            sort: SortKey::Created,
            descending: false,
            output: OutputOptions::default(),
        };
        assert!(matches!(
            cmd.execute(&env.ctx()),
            Err(LinkError::NotFound { .. })
        ));
    }
}
