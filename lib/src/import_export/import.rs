use super::html::parse_netscape_html;
use super::{ExportFormat, MergeMode};
use crate::error::{LinkError, Result};
use crate::models::folder::next_order;
use crate::models::{Bookmark, Folder, Tag, DEFAULT_COLOR};
use crate::store::LinkStore;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Counts of newly created records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub bookmarks: usize,
    pub folders: usize,
    pub tags: usize,
}

/// Trait for importing bookmarks from different formats
pub trait BookmarkImporter {
    fn import(&self, store: &LinkStore, content: &str, mode: MergeMode) -> Result<ImportSummary>;
}

/// Collections an import starts from: the stored ones on merge, nothing on replace
struct Working {
    bookmarks: Vec<Bookmark>,
    folders: Vec<Folder>,
    tags: Vec<Tag>,
}

impl Working {
    fn load(store: &LinkStore, mode: MergeMode) -> Self {
        match mode {
            MergeMode::Merge => Self {
                bookmarks: store.get_bookmarks(),
                folders: store.get_folders(),
                tags: store.get_tags(),
            },
            MergeMode::Replace => Self {
                bookmarks: Vec::new(),
                folders: Vec::new(),
                tags: Vec::new(),
            },
        }
    }

    fn save(&self, store: &LinkStore) -> Result<()> {
        store.save_folders(&self.folders, "Failed to save imported folders")?;
        store.save_tags(&self.tags, "Failed to save imported tags")?;
        store.save_bookmarks(&self.bookmarks, "Failed to save imported bookmarks")
    }
}

/// Records as they arrive in a bundle. Absent and `null` fields are both
/// `None`; an empty string is a real value and is kept.
#[derive(Debug, Deserialize)]
struct IncomingBundle {
    #[serde(default)]
    bookmarks: Option<Vec<IncomingBookmark>>,
    #[serde(default)]
    folders: Option<Vec<IncomingFolder>>,
    #[serde(default)]
    tags: Option<Vec<IncomingTag>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct IncomingBookmark {
    url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    favicon: Option<String>,
    color: Option<String>,
    folder_id: Option<String>,
    tags: Option<Vec<Option<String>>>,
    visit_count: Option<u64>,
    last_visited: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct IncomingFolder {
    id: Option<String>,
    name: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    created_at: Option<String>,
    order: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct IncomingTag {
    id: Option<String>,
    name: Option<String>,
    color: Option<String>,
    created_at: Option<String>,
}

fn or_default_color(color: Option<String>) -> String {
    color.unwrap_or_else(|| DEFAULT_COLOR.to_string())
}

fn or_now(timestamp: Option<String>, now: &str) -> String {
    timestamp.unwrap_or_else(|| now.to_string())
}

/// JSON bundle importer.
///
/// Every incoming record gets a fresh id; folder and tag references are
/// rewritten through the id maps built while copying.
pub struct JsonImporter;

impl BookmarkImporter for JsonImporter {
    fn import(&self, store: &LinkStore, content: &str, mode: MergeMode) -> Result<ImportSummary> {
        let bundle: IncomingBundle = serde_json::from_str(content)
            .map_err(|e| LinkError::ParseFailure(format!("Invalid JSON format: {}", e)))?;
        let incoming_bookmarks = bundle.bookmarks.ok_or_else(|| {
            LinkError::ParseFailure("Invalid JSON format: missing bookmarks array".to_string())
        })?;
        let incoming_folders = bundle.folders.unwrap_or_default();
        let incoming_tags = bundle.tags.unwrap_or_default();

        let mut work = Working::load(store, mode);
        let now = utils::now_iso();
        let mut summary = ImportSummary::default();

        let mut folder_ids: HashMap<String, String> = HashMap::new();
        for folder in incoming_folders {
            let id = utils::generate_id();
            if let Some(old) = folder.id {
                folder_ids.insert(old, id.clone());
            }
            work.folders.push(Folder {
                id,
                name: folder.name.unwrap_or_default(),
                icon: folder.icon.filter(|i| !i.is_empty()),
                color: or_default_color(folder.color),
                created_at: or_now(folder.created_at, &now),
                order: folder.order.unwrap_or(0),
            });
            summary.folders += 1;
        }

        let mut tag_ids: HashMap<String, String> = HashMap::new();
        for tag in incoming_tags {
            let id = utils::generate_id();
            if let Some(old) = tag.id {
                tag_ids.insert(old, id.clone());
            }
            work.tags.push(Tag {
                id,
                name: tag.name.unwrap_or_default(),
                color: or_default_color(tag.color),
                created_at: or_now(tag.created_at, &now),
            });
            summary.tags += 1;
        }

        for bookmark in incoming_bookmarks {
            let folder_id = bookmark
                .folder_id
                .and_then(|old| folder_ids.get(&old).cloned())
                .unwrap_or_default();

            let mut tags: Vec<String> = Vec::new();
            for old in bookmark.tags.unwrap_or_default().into_iter().flatten() {
                let mapped = match tag_ids.get(&old) {
                    Some(new) => Some(new.clone()),
                    None if work.tags.iter().any(|t| t.id == old) => Some(old),
                    None => None,
                };
                if let Some(id) = mapped {
                    if !tags.contains(&id) {
                        tags.push(id);
                    }
                }
            }

            let url = bookmark.url.unwrap_or_default();
            let title = bookmark.title.unwrap_or_else(|| url.clone());

            work.bookmarks.push(Bookmark {
                id: utils::generate_id(),
                url,
                title,
                description: bookmark.description.unwrap_or_default(),
                favicon: bookmark.favicon.unwrap_or_default(),
                color: or_default_color(bookmark.color),
                folder_id,
                tags,
                visit_count: bookmark.visit_count.unwrap_or(0),
                last_visited: bookmark.last_visited,
                created_at: or_now(bookmark.created_at, &now),
                updated_at: or_now(bookmark.updated_at, &now),
            });
            summary.bookmarks += 1;
        }

        work.save(store)?;
        Ok(summary)
    }
}

/// Netscape bookmark file importer
pub struct HtmlImporter;

impl BookmarkImporter for HtmlImporter {
    fn import(&self, store: &LinkStore, content: &str, mode: MergeMode) -> Result<ImportSummary> {
        let doc = parse_netscape_html(content);
        let mut work = Working::load(store, mode);
        let now = utils::now_iso();
        let mut summary = ImportSummary::default();

        let first_order = next_order(&work.folders);
        let mut folder_ids: Vec<String> = Vec::with_capacity(doc.folders.len());
        for (i, parsed) in doc.folders.into_iter().enumerate() {
            let id = utils::generate_id();
            folder_ids.push(id.clone());
            work.folders.push(Folder {
                id,
                name: parsed.name,
                icon: None,
                color: DEFAULT_COLOR.to_string(),
                created_at: parsed
                    .add_date
                    .and_then(utils::unix_to_iso)
                    .unwrap_or_else(|| now.clone()),
                order: first_order + i as i64,
            });
            summary.folders += 1;
        }

        for parsed in doc.bookmarks {
            let mut tags: Vec<String> = Vec::new();
            for name in &parsed.tags {
                let id = match work
                    .tags
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(name))
                {
                    Some(tag) => tag.id.clone(),
                    None => {
                        let tag = Tag {
                            id: utils::generate_id(),
                            name: name.clone(),
                            color: DEFAULT_COLOR.to_string(),
                            created_at: now.clone(),
                        };
                        let id = tag.id.clone();
                        work.tags.push(tag);
                        summary.tags += 1;
                        id
                    }
                };
                if !tags.contains(&id) {
                    tags.push(id);
                }
            }

            work.bookmarks.push(Bookmark {
                id: utils::generate_id(),
                url: parsed.url,
                title: parsed.title,
                description: parsed.description,
                favicon: String::new(),
                color: DEFAULT_COLOR.to_string(),
                folder_id: parsed
                    .folder
                    .and_then(|i| folder_ids.get(i).cloned())
                    .unwrap_or_default(),
                tags,
                visit_count: 0,
                last_visited: None,
                created_at: parsed
                    .add_date
                    .and_then(utils::unix_to_iso)
                    .unwrap_or_else(|| now.clone()),
                updated_at: now.clone(),
            });
            summary.bookmarks += 1;
        }

        work.save(store)?;
        Ok(summary)
    }
}

pub fn import_json(store: &LinkStore, content: &str, mode: MergeMode) -> Result<ImportSummary> {
    JsonImporter.import(store, content, mode)
}

pub fn import_html(store: &LinkStore, content: &str, mode: MergeMode) -> Result<ImportSummary> {
    HtmlImporter.import(store, content, mode)
}

/// Import from a file
pub fn import_data(
    store: &LinkStore,
    format: ExportFormat,
    mode: MergeMode,
    path: &Path,
) -> Result<ImportSummary> {
    let content = std::fs::read_to_string(path)?;

    let importer: Box<dyn BookmarkImporter> = match format {
        ExportFormat::Json => Box::new(JsonImporter),
        ExportFormat::Html => Box::new(HtmlImporter),
    };

    let summary = importer.import(store, &content, mode).map_err(|e| {
        log::error!("Import error for {:?}: {}", path, e);
        e
    })?;
    log::debug!(
        "Imported {} bookmark(s), {} folder(s), {} tag(s) from {:?}",
        summary.bookmarks,
        summary.folders,
        summary.tags,
        path
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookmarkDraft, FolderDraft, TagDraft};
    use crate::store::test_support::TestEnv;
    use rstest::rstest;

    const BUNDLE: &str = r##"{
  "version": "1.0.0",
  "exportedAt": "2024-03-01T10:00:00.000Z",
  "folders": [
    {"id": "f-old", "name": "Dev", "icon": null, "color": "#111111", "createdAt": "2024-01-01T00:00:00.000Z", "order": 3}
  ],
  "tags": [
    {"id": "t-old", "name": "rust", "color": "#222222", "createdAt": "2024-01-01T00:00:00.000Z"}
  ],
  "bookmarks": [
    {"id": "b-old", "url": "https://www.rust-lang.org", "title": "Rust", "description": "lang",
     "favicon": "", "color": "#333333", "folderId": "f-old", "tags": ["t-old", "t-missing"],
     "visitCount": 4, "lastVisited": "2024-02-01T00:00:00.000Z",
     "createdAt": "2024-01-05T00:00:00.000Z", "updatedAt": "2024-01-06T00:00:00.000Z"},
    {"url": "https://crates.io", "folderId": "f-unknown"}
  ]
}"##;

    #[test]
    fn test_json_import_remaps_ids() {
        let env = TestEnv::new();
        let summary = import_json(&env.store, BUNDLE, MergeMode::Replace).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                bookmarks: 2,
                folders: 1,
                tags: 1
            }
        );

        let folders = env.store.get_folders();
        let tags = env.store.get_tags();
        let bookmarks = env.store.get_bookmarks();

        assert_ne!(folders[0].id, "f-old");
        assert_eq!(folders[0].order, 3);
        assert_ne!(tags[0].id, "t-old");

        let rust = &bookmarks[0];
        assert_ne!(rust.id, "b-old");
        assert_eq!(rust.folder_id, folders[0].id);
        assert_eq!(rust.tags, vec![tags[0].id.clone()]);
        assert_eq!(rust.visit_count, 4);
        assert_eq!(rust.created_at, "2024-01-05T00:00:00.000Z");

        let crates = &bookmarks[1];
        assert_eq!(crates.title, "https://crates.io");
        assert_eq!(crates.color, DEFAULT_COLOR);
        assert!(crates.folder_id.is_empty());
    }

    #[test]
    fn test_json_merge_keeps_existing() {
        let env = TestEnv::new();
        let existing = env
            .store
            .add_bookmark(BookmarkDraft::with_url("https://existing.example"))
            .unwrap();
        env.store.add_folder(FolderDraft::default()).unwrap();

        import_json(&env.store, BUNDLE, MergeMode::Merge).unwrap();

        let bookmarks = env.store.get_bookmarks();
        assert_eq!(bookmarks.len(), 3);
        assert_eq!(bookmarks[0], existing);
        assert_eq!(env.store.get_folders().len(), 2);
    }

    #[test]
    fn test_json_merge_keeps_reference_to_existing_tag() {
        let env = TestEnv::new();
        let tag = env.store.add_tag(TagDraft::default()).unwrap();
        let bundle = format!(
            r#"{{"bookmarks": [{{"url": "https://a.example", "tags": ["{}", "nope"]}}]}}"#,
            tag.id
        );

        import_json(&env.store, &bundle, MergeMode::Merge).unwrap();

        assert_eq!(env.store.get_bookmarks()[0].tags, vec![tag.id]);
    }

    #[test]
    fn test_json_replace_discards_existing() {
        let env = TestEnv::new();
        env.store
            .add_bookmark(BookmarkDraft::with_url("https://old.example"))
            .unwrap();
        env.store.add_tag(TagDraft::default()).unwrap();

        import_json(&env.store, r#"{"bookmarks": []}"#, MergeMode::Replace).unwrap();

        assert!(env.store.get_bookmarks().is_empty());
        assert!(env.store.get_tags().is_empty());
        assert!(env.store.get_folders().is_empty());
    }

    #[test]
    fn test_json_import_treats_null_as_missing() {
        let env = TestEnv::new();
        let bundle = r#"{
  "folders": [{"id": "f1", "name": null, "icon": null, "color": null, "createdAt": null, "order": null}],
  "tags": [{"id": "t1", "name": "rust", "color": null, "createdAt": null}],
  "bookmarks": [
    {"url": "https://a.example", "title": null, "description": null, "favicon": null,
     "color": null, "folderId": "f1", "tags": null, "visitCount": null,
     "lastVisited": null, "createdAt": null, "updatedAt": null},
    {"url": "https://b.example", "folderId": null, "tags": ["t1", null]}
  ]
}"#;

        let summary = import_json(&env.store, bundle, MergeMode::Replace).unwrap();
        assert_eq!(summary.bookmarks, 2);

        let folders = env.store.get_folders();
        assert_eq!(folders[0].order, 0);
        assert_eq!(folders[0].color, DEFAULT_COLOR);
        assert!(folders[0].name.is_empty());

        let tags = env.store.get_tags();
        let bookmarks = env.store.get_bookmarks();
        let a = &bookmarks[0];
        assert_eq!(a.title, "https://a.example");
        assert!(a.description.is_empty());
        assert!(a.tags.is_empty());
        assert_eq!(a.color, DEFAULT_COLOR);
        assert_eq!(a.visit_count, 0);
        assert_eq!(a.folder_id, folders[0].id);
        assert!(!a.created_at.is_empty());

        let b = &bookmarks[1];
        assert!(b.folder_id.is_empty());
        assert_eq!(b.tags, vec![tags[0].id.clone()]);
    }

    #[test]
    fn test_json_import_keeps_empty_strings() {
        let env = TestEnv::new();
        let bundle = r#"{"bookmarks": [
    {"url": "https://a.example", "title": "", "color": "", "createdAt": "", "updatedAt": ""}
]}"#;

        import_json(&env.store, bundle, MergeMode::Replace).unwrap();

        let b = &env.store.get_bookmarks()[0];
        assert_eq!(b.title, "");
        assert_eq!(b.color, "");
        assert_eq!(b.created_at, "");
    }

    #[rstest]
    #[case("not json at all")]
    #[case(r#"{"folders": []}"#)]
    #[case(r#"{"bookmarks": null}"#)]
    #[case(r#"{"bookmarks": {"a": 1}}"#)]
    fn test_json_parse_failure_aborts(#[case] content: &str) {
        let env = TestEnv::new();
        let kept = env
            .store
            .add_bookmark(BookmarkDraft::with_url("https://keep.example"))
            .unwrap();

        let result = import_json(&env.store, content, MergeMode::Replace);

        assert!(matches!(result, Err(LinkError::ParseFailure(_))));
        assert_eq!(env.store.get_bookmarks(), vec![kept]);
    }

    #[test]
    fn test_html_import_two_level() {
        let env = TestEnv::new();
        let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<DL><p>
    <DT><H3>Reading</H3>
    <DL><p>
        <DT><A HREF="https://blog.example" ADD_DATE="1704164645" TAGS="blog,Long">Blog</A>
        <DD>weekly
    </DL><p>
</DL><p>"#;

        let summary = import_html(&env.store, html, MergeMode::Replace).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                bookmarks: 1,
                folders: 1,
                tags: 2
            }
        );

        let folders = env.store.get_folders();
        let bookmarks = env.store.get_bookmarks();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Reading");
        assert_eq!(folders[0].order, 1);
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].folder_id, folders[0].id);
        assert_eq!(bookmarks[0].description, "weekly");
        assert_eq!(bookmarks[0].created_at, "2024-01-02T03:04:05.000Z");
        assert_eq!(bookmarks[0].tags.len(), 2);
    }

    #[test]
    fn test_html_merge_reuses_tags_by_name() {
        let env = TestEnv::new();
        let existing = env
            .store
            .add_tag(TagDraft {
                name: Some("Blog".to_string()),
                color: None,
            })
            .unwrap();
        env.store
            .add_folder(FolderDraft {
                name: Some("Old".to_string()),
                ..Default::default()
            })
            .unwrap();

        let html = r#"<DL><p><DT><H3>New</H3><DL><p>
<DT><A HREF="https://a.example" TAGS="blog">A</A>
</DL><p></DL><p>"#;
        let summary = import_html(&env.store, html, MergeMode::Merge).unwrap();

        assert_eq!(summary.tags, 0);
        assert_eq!(env.store.get_tags().len(), 1);
        assert_eq!(env.store.get_bookmarks()[0].tags, vec![existing.id]);
        let folders = env.store.get_folders();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[1].order, 2);
    }

    #[test]
    fn test_import_data_missing_file_is_io_error() {
        let env = TestEnv::new();
        let result = import_data(
            &env.store,
            ExportFormat::Json,
            MergeMode::Merge,
            Path::new("/definitely/not/here.json"),
        );
        assert!(matches!(result, Err(LinkError::Io(_))));
    }
}
