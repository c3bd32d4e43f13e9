use crate::format::traits::RecordFormat;
use crate::format::BookmarkView;
use linkcollection::error::Result;
use linkcollection::models::{Folder, Settings, Tag};

pub struct PlainBookmark<'a>(pub &'a BookmarkView<'a>);

impl RecordFormat for PlainBookmark<'_> {
    fn render(&self) -> Result<String> {
        let b = self.0.bookmark;
        let mut s = format!("{}. {}\n", b.id, b.title);
        s.push_str(&format!("   > {}\n", b.url));
        if !b.description.trim().is_empty() {
            s.push_str(&format!("   + {}\n", b.description));
        }
        if let Some(folder) = self.0.folder {
            s.push_str(&format!("   @ {}\n", folder));
        }
        if !self.0.tags.is_empty() {
            s.push_str(&format!("   # {}\n", self.0.tags.join(", ")));
        }
        s.push_str(&format!("   * visits: {}", b.visit_count));
        if let Some(last) = &b.last_visited {
            s.push_str(&format!(", last visited: {}", last));
        }
        s.push('\n');
        Ok(s)
    }
}

pub struct PlainFolder<'a>(pub &'a Folder, pub usize);

impl RecordFormat for PlainFolder<'_> {
    fn render(&self) -> Result<String> {
        let f = self.0;
        let icon = f.icon.as_deref().map(|i| format!(" [{}]", i)).unwrap_or_default();
        Ok(format!(
            "{}. {}{} ({}) {} bookmark(s)",
            f.id, f.name, icon, f.color, self.1
        ))
    }
}

pub struct PlainTag<'a>(pub &'a Tag, pub usize);

impl RecordFormat for PlainTag<'_> {
    fn render(&self) -> Result<String> {
        Ok(format!(
            "{}. {} ({}) {} bookmark(s)",
            self.0.id, self.0.name, self.0.color, self.1
        ))
    }
}

pub struct PlainSettings<'a>(pub &'a Settings);

impl RecordFormat for PlainSettings<'_> {
    fn render(&self) -> Result<String> {
        let s = self.0;
        let mut out = String::new();
        let default_browser = if s.default_browser.is_empty() {
            "(system default)"
        } else {
            s.default_browser.as_str()
        };
        out.push_str(&format!("default browser:   {}\n", default_browser));
        out.push_str(&format!("view mode:         {}\n", s.view_mode));
        out.push_str(&format!("sidebar collapsed: {}\n", s.sidebar_collapsed));
        out.push_str(&format!("theme:             {}\n", s.theme));
        out.push_str(&format!("language:          {}\n", s.language));
        out.push_str(&format!("auto fetch icon:   {}\n", s.auto_fetch_icon));
        for browser in &s.available_browsers {
            out.push_str(&format!("browser:           {} = {}\n", browser.name, browser.path));
        }
        Ok(out)
    }
}
