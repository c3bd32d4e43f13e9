use super::html::escape_html;
use super::ExportFormat;
use crate::error::{LinkError, Result};
use crate::models::{Bookmark, Folder, Tag};
use crate::store::LinkStore;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_VERSION: &str = "1.0.0";

/// Versioned JSON bundle of all three collections
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub version: String,
    pub exported_at: String,
    pub bookmarks: Vec<Bookmark>,
    pub folders: Vec<Folder>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub file_path: PathBuf,
}

/// Trait for rendering the collections into an export document
pub trait BookmarkExporter {
    fn render(&self, bookmarks: &[Bookmark], folders: &[Folder], tags: &[Tag]) -> Result<String>;
}

pub struct JsonExporter;

impl BookmarkExporter for JsonExporter {
    fn render(&self, bookmarks: &[Bookmark], folders: &[Folder], tags: &[Tag]) -> Result<String> {
        let bundle = ExportBundle {
            version: EXPORT_VERSION.to_string(),
            exported_at: utils::now_iso(),
            bookmarks: bookmarks.to_vec(),
            folders: folders.to_vec(),
            tags: tags.to_vec(),
        };
        Ok(serde_json::to_string_pretty(&bundle)?)
    }
}

/// HTML/Netscape Bookmark File exporter.
///
/// Folders are written one level deep, in display order. Bookmarks without a
/// known folder follow at the root of the list.
pub struct HtmlExporter;

impl BookmarkExporter for HtmlExporter {
    fn render(&self, bookmarks: &[Bookmark], folders: &[Folder], tags: &[Tag]) -> Result<String> {
        let tag_names: HashMap<&str, &str> = tags
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();

        let mut by_folder: HashMap<&str, Vec<&Bookmark>> = HashMap::new();
        let mut uncategorized: Vec<&Bookmark> = Vec::new();
        for bookmark in bookmarks {
            if folders.iter().any(|f| f.id == bookmark.folder_id) {
                by_folder
                    .entry(bookmark.folder_id.as_str())
                    .or_default()
                    .push(bookmark);
            } else {
                uncategorized.push(bookmark);
            }
        }

        let mut ordered: Vec<&Folder> = folders.iter().collect();
        ordered.sort_by_key(|f| f.order);

        let mut html = String::new();
        html.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
        html.push_str("<!-- This is an automatically generated file.\n");
        html.push_str("     It will be read and overwritten.\n");
        html.push_str("     DO NOT EDIT! -->\n");
        html.push_str(
            "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n",
        );
        html.push_str("<TITLE>Bookmarks</TITLE>\n");
        html.push_str("<H1>Bookmarks</H1>\n");
        html.push_str("<DL><p>\n");

        for folder in ordered {
            html.push_str(&format!(
                "    <DT><H3 ADD_DATE=\"{}\">{}</H3>\n",
                utils::iso_to_unix(&folder.created_at),
                escape_html(&folder.name)
            ));
            html.push_str("    <DL><p>\n");
            for bookmark in by_folder.get(folder.id.as_str()).into_iter().flatten() {
                push_bookmark(&mut html, bookmark, &tag_names, "        ");
            }
            html.push_str("    </DL><p>\n");
        }

        for bookmark in uncategorized {
            push_bookmark(&mut html, bookmark, &tag_names, "    ");
        }

        html.push_str("</DL><p>\n");
        Ok(html)
    }
}

fn push_bookmark(html: &mut String, bookmark: &Bookmark, tag_names: &HashMap<&str, &str>, indent: &str) {
    let names: Vec<&str> = bookmark
        .tags
        .iter()
        .filter_map(|id| tag_names.get(id.as_str()).copied())
        .collect();
    let tags_attr = if names.is_empty() {
        String::new()
    } else {
        format!(" TAGS=\"{}\"", escape_html(&names.join(",")))
    };

    html.push_str(&format!(
        "{}<DT><A HREF=\"{}\" ADD_DATE=\"{}\"{}>{}</A>\n",
        indent,
        escape_html(&bookmark.url),
        utils::iso_to_unix(&bookmark.created_at),
        tags_attr,
        escape_html(&bookmark.title)
    ));
    if !bookmark.description.is_empty() {
        html.push_str(&format!("{}<DD>{}\n", indent, escape_html(&bookmark.description)));
    }
}

fn exporter_for(format: ExportFormat) -> Box<dyn BookmarkExporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Html => Box::new(HtmlExporter),
    }
}

fn render(store: &LinkStore, format: ExportFormat) -> Result<String> {
    let bookmarks = store.get_bookmarks();
    let folders = store.get_folders();
    let tags = store.get_tags();
    exporter_for(format).render(&bookmarks, &folders, &tags)
}

/// Render the JSON bundle for everything in the store
pub fn export_json(store: &LinkStore) -> Result<String> {
    render(store, ExportFormat::Json)
}

/// Render a Netscape bookmark file for everything in the store
pub fn export_html(store: &LinkStore) -> Result<String> {
    render(store, ExportFormat::Html)
}

/// `LinkCollection_Bookmarks_<date>.<ext>`
pub fn default_export_file_name(format: ExportFormat) -> String {
    format!(
        "LinkCollection_Bookmarks_{}.{}",
        chrono::Local::now().format("%Y-%m-%d"),
        format.extension()
    )
}

/// Export to a file
pub fn export_data(store: &LinkStore, format: ExportFormat, path: &Path) -> Result<ExportResult> {
    let document = render(store, format)?;

    if let Err(e) = fs::write(path, document) {
        log::error!("Export error writing {:?}: {}", path, e);
        return Err(LinkError::write_failure("Failed to write export file"));
    }

    log::debug!("Exported {:?} to {:?}", format, path);
    Ok(ExportResult {
        file_path: path.to_path_buf(),
    })
}
