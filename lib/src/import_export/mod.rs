pub mod export;
pub mod html;
pub mod import;

use crate::error::LinkError;
use std::path::Path;
use std::str::FromStr;

pub use export::{
    default_export_file_name, export_data, export_html, export_json, ExportBundle, ExportResult,
    EXPORT_VERSION,
};
pub use html::parse_netscape_html;
pub use import::{import_data, import_html, import_json, ImportSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            other => Err(LinkError::InvalidInput(format!(
                "Unsupported format: {}",
                other
            ))),
        }
    }
}

/// How an import treats the data already on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Discard existing bookmarks, folders and tags first
    Replace,
    /// Append to existing collections
    #[default]
    Merge,
}

impl FromStr for MergeMode {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(MergeMode::Replace),
            "merge" => Ok(MergeMode::Merge),
            other => Err(LinkError::InvalidInput(format!(
                "Unknown merge mode: {}",
                other
            ))),
        }
    }
}
