use crate::models::{BookmarkDraft, TagDraft};
use regex::Regex;
use std::sync::OnceLock;

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color regex is valid")
    })
}

/// True when `url` parses as an absolute URL
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && url::Url::parse(url).is_ok()
}

/// `#RGB` or `#RRGGBB`
pub fn is_valid_color(color: &str) -> bool {
    hex_color_regex().is_match(color)
}

/// All problems with a bookmark draft; empty when it is acceptable
pub fn validate_bookmark_draft(draft: &BookmarkDraft) -> Vec<String> {
    let mut errors = Vec::new();

    match draft.url.as_deref() {
        None | Some("") => errors.push("URL is required".to_string()),
        Some(url) if !is_valid_url(url) => errors.push("Invalid URL format".to_string()),
        _ => {}
    }

    if let Some(color) = draft.color.as_deref() {
        if !color.is_empty() && !is_valid_color(color) {
            errors.push("Invalid color format".to_string());
        }
    }

    errors
}

pub fn validate_folder_name(name: &str) -> Vec<String> {
    if name.trim().is_empty() {
        vec!["Folder name is required".to_string()]
    } else {
        Vec::new()
    }
}

pub fn validate_tag_draft(draft: &TagDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        errors.push("Tag name is required".to_string());
    }

    if let Some(color) = draft.color.as_deref() {
        if !is_valid_color(color) {
            errors.push("Valid color is required".to_string());
        }
    }

    errors
}
