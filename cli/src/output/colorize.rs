use crate::format::BookmarkView;
use linkcollection::models::{Folder, Settings, Tag};
use linkcollection::search;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub &'a BookmarkView<'a>);

impl Colorize for ColorizeBookmark<'_> {
    fn to_colored(&self) -> String {
        colored_bookmark(self.0, None)
    }
}

/// A search hit with every occurrence of the query marked
pub struct ColorizeMatch<'a>(pub &'a BookmarkView<'a>, pub &'a str);

impl Colorize for ColorizeMatch<'_> {
    fn to_colored(&self) -> String {
        colored_bookmark(self.0, Some(self.1))
    }
}

fn colored_bookmark(view: &BookmarkView, query: Option<&str>) -> String {
    let b = view.bookmark;
    let mut s = String::new();
    s.push_str(&format!(
        "{}. {}\n",
        b.id.bright_blue(),
        marked(&b.title, query, |t| t.bold().green().to_string())
    ));
    let padding = 4;
    s.push_str(&format!(
        "{:>padding$} {}\n",
        ">".red(),
        marked(&b.url, query, |t| t.yellow().to_string())
    ));

    if !b.description.trim().is_empty() {
        s.push_str(&format!(
            "{:>padding$} {}\n",
            "+".red(),
            marked(&b.description, query, |t| t.to_string())
        ));
    }
    if let Some(folder) = view.folder {
        s.push_str(&format!("{:>padding$} {}\n", "@".red(), folder.magenta()));
    }
    if !view.tags.is_empty() {
        let tags_str = view.tags.join(", ");
        s.push_str(&format!("{:>padding$} {}\n", "#".red(), tags_str.blue()));
    }

    let mut visits = format!("visits: {}", b.visit_count);
    if let Some(last) = &b.last_visited {
        visits.push_str(&format!(", last visited: {}", last));
    }
    s.push_str(&format!("{:>padding$} {}\n", "*".red(), visits.dimmed()));
    s
}

/// Style `text` with `base`, painting query matches black on yellow
fn marked(text: &str, query: Option<&str>, base: fn(&str) -> String) -> String {
    let ranges = query.map(|q| search::highlight(text, q)).unwrap_or_default();
    if ranges.is_empty() {
        return base(text);
    }

    let mut out = String::new();
    let mut pos = 0;
    for range in ranges {
        if range.start > pos {
            out.push_str(&base(&text[pos..range.start]));
        }
        out.push_str(&(&text[range.clone()]).black().on_yellow().to_string());
        pos = range.end;
    }
    if pos < text.len() {
        out.push_str(&base(&text[pos..]));
    }
    out
}

pub struct ColorizeFolder<'a>(pub &'a Folder, pub usize);

impl Colorize for ColorizeFolder<'_> {
    fn to_colored(&self) -> String {
        let f = self.0;
        let icon = f
            .icon
            .as_deref()
            .map(|i| format!(" [{}]", i))
            .unwrap_or_default();
        format!(
            "{}. {}{} ({}) {}",
            f.id.bright_blue(),
            f.name.bold().green(),
            icon,
            f.color.yellow(),
            format!("{} bookmark(s)", self.1).dimmed()
        )
    }
}

pub struct ColorizeTag<'a>(pub &'a Tag, pub usize);

impl Colorize for ColorizeTag<'_> {
    fn to_colored(&self) -> String {
        format!(
            "{}. {} ({}) {}",
            self.0.id.bright_blue(),
            self.0.name.bold().blue(),
            self.0.color.yellow(),
            format!("{} bookmark(s)", self.1).dimmed()
        )
    }
}

pub struct ColorizeSettings<'a>(pub &'a Settings);

impl Colorize for ColorizeSettings<'_> {
    fn to_colored(&self) -> String {
        let s = self.0;
        let default_browser = if s.default_browser.is_empty() {
            "(system default)".to_string()
        } else {
            s.default_browser.clone()
        };
        let rows = [
            ("default browser", default_browser),
            ("view mode", s.view_mode.to_string()),
            ("sidebar collapsed", s.sidebar_collapsed.to_string()),
            ("theme", s.theme.to_string()),
            ("language", s.language.to_string()),
            ("auto fetch icon", s.auto_fetch_icon.to_string()),
        ];

        let mut out = String::new();
        for (key, value) in rows {
            out.push_str(&format!("{:<18} {}\n", format!("{}:", key).cyan(), value.yellow()));
        }
        for browser in &s.available_browsers {
            out.push_str(&format!(
                "{:<18} {} = {}\n",
                "browser:".cyan(),
                browser.name.bold(),
                browser.path
            ));
        }
        out
    }
}
