use crate::{
    format::{
        json::JsonRecord,
        plain::{PlainBookmark, PlainFolder, PlainSettings, PlainTag},
        toml::TomlRecord,
        traits::RecordFormat,
        yaml::YamlRecord,
    },
    output::colorize::{
        Colorize, ColorizeBookmark, ColorizeFolder, ColorizeMatch, ColorizeSettings, ColorizeTag,
    },
};
use linkcollection::error::Result;
use linkcollection::models::{Bookmark, Folder, Settings, Tag};
use serde::Serialize;

pub mod json;
pub mod plain;
pub mod toml;
pub mod traits;
pub mod yaml;

/// A bookmark with its folder and tag ids resolved to names
pub struct BookmarkView<'a> {
    pub bookmark: &'a Bookmark,
    pub folder: Option<&'a str>,
    pub tags: Vec<&'a str>,
}

impl<'a> BookmarkView<'a> {
    pub fn resolve(bookmark: &'a Bookmark, folders: &'a [Folder], tags: &'a [Tag]) -> Self {
        let folder = folders
            .iter()
            .find(|f| f.id == bookmark.folder_id)
            .map(|f| f.name.as_str());
        let tags = bookmark
            .tags
            .iter()
            .filter_map(|id| tags.iter().find(|t| &t.id == id))
            .map(|t| t.name.as_str())
            .collect();
        Self {
            bookmark,
            folder,
            tags,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Plain,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "toml" => OutputFormat::Toml,
            "plain" | "text" => OutputFormat::Plain,
            _ => OutputFormat::Colored,
        }
    }

    /// Plain when color is switched off
    pub fn resolve(format: Option<&str>, no_color: bool) -> Self {
        match format.map(Self::from_string).unwrap_or(OutputFormat::Colored) {
            OutputFormat::Colored if no_color => OutputFormat::Plain,
            other => other,
        }
    }

    fn serialized<T: Serialize>(self, record: &T) -> Result<Option<String>> {
        let text = match self {
            OutputFormat::Json => JsonRecord(record).render()?,
            OutputFormat::Yaml => YamlRecord(record).render()?,
            OutputFormat::Toml => TomlRecord(record).render()?,
            OutputFormat::Plain | OutputFormat::Colored => return Ok(None),
        };
        Ok(Some(text))
    }

    /// `highlight` marks occurrences of a search query in colored output
    pub fn print_bookmarks(
        self,
        records: &[&Bookmark],
        folders: &[Folder],
        tags: &[Tag],
        highlight: Option<&str>,
    ) -> Result<()> {
        for b in records {
            match self.serialized(*b)? {
                Some(text) => println!("{}", text),
                None => {
                    let view = BookmarkView::resolve(b, folders, tags);
                    match highlight {
                        Some(query) => self
                            .print_human(PlainBookmark(&view), ColorizeMatch(&view, query))?,
                        None => self.print_human(PlainBookmark(&view), ColorizeBookmark(&view))?,
                    }
                }
            }
        }
        Ok(())
    }

    pub fn print_folders(self, folders: &[Folder], bookmarks: &[Bookmark]) -> Result<()> {
        for f in folders {
            match self.serialized(f)? {
                Some(text) => println!("{}", text),
                None => {
                    let count = bookmarks.iter().filter(|b| b.folder_id == f.id).count();
                    self.print_human(PlainFolder(f, count), ColorizeFolder(f, count))?;
                }
            }
        }
        Ok(())
    }

    pub fn print_tags(self, tags: &[Tag], bookmarks: &[Bookmark]) -> Result<()> {
        for t in tags {
            match self.serialized(t)? {
                Some(text) => println!("{}", text),
                None => {
                    let count = bookmarks.iter().filter(|b| b.has_tag(&t.id)).count();
                    self.print_human(PlainTag(t, count), ColorizeTag(t, count))?;
                }
            }
        }
        Ok(())
    }

    pub fn print_settings(self, settings: &Settings) -> Result<()> {
        match self.serialized(settings)? {
            Some(text) => println!("{}", text),
            None => self.print_human(PlainSettings(settings), ColorizeSettings(settings))?,
        }
        Ok(())
    }

    fn print_human(self, plain: impl RecordFormat, colored: impl Colorize) -> Result<()> {
        if self == OutputFormat::Colored {
            println!("{}", colored.to_colored());
        } else {
            println!("{}", plain.render()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("json", false, OutputFormat::Json)]
    #[case("yml", false, OutputFormat::Yaml)]
    #[case("toml", true, OutputFormat::Toml)]
    #[case("plain", false, OutputFormat::Plain)]
    #[case("bogus", false, OutputFormat::Colored)]
    #[case("bogus", true, OutputFormat::Plain)]
    fn test_resolve_format(#[case] input: &str, #[case] nc: bool, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::resolve(Some(input), nc), expected);
    }

    #[test]
    fn test_resolve_default_is_colored() {
        assert_eq!(OutputFormat::resolve(None, false), OutputFormat::Colored);
        assert_eq!(OutputFormat::resolve(None, true), OutputFormat::Plain);
    }

    #[test]
    fn test_bookmark_view_resolves_names() {
        let folders = vec![Folder {
            id: "f1".to_string(),
            name: "Dev".to_string(),
            ..Default::default()
        }];
        let tags = vec![
            Tag {
                id: "t1".to_string(),
                name: "rust".to_string(),
                ..Default::default()
            },
            Tag {
                id: "t2".to_string(),
                name: "web".to_string(),
                ..Default::default()
            },
        ];
        let bookmark = Bookmark {
            folder_id: "f1".to_string(),
            tags: vec!["t2".to_string(), "gone".to_string(), "t1".to_string()],
            ..Default::default()
        };

        let view = BookmarkView::resolve(&bookmark, &folders, &tags);
        assert_eq!(view.folder, Some("Dev"));
        assert_eq!(view.tags, vec!["web", "rust"]);
    }

    #[test]
    fn test_bookmark_view_unknown_folder() {
        let bookmark = Bookmark {
            folder_id: "missing".to_string(),
            ..Default::default()
        };
        let view = BookmarkView::resolve(&bookmark, &[], &[]);
        assert!(view.folder.is_none());
        assert!(view.tags.is_empty());
    }
}
