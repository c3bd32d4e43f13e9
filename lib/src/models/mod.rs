pub mod bookmark;
pub mod folder;
pub mod settings;
pub mod tag;

pub use bookmark::{Bookmark, BookmarkDraft, BookmarkPatch};
pub use folder::{Folder, FolderDraft, FolderPatch};
pub use settings::{Browser, Language, Settings, SettingsPatch, Theme, ViewMode};
pub use tag::{Tag, TagDraft, TagPatch};

/// Display color given to new bookmarks, folders and tags
pub const DEFAULT_COLOR: &str = "#3B82F6";
