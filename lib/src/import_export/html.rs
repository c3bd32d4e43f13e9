//! Netscape bookmark file scanning and HTML text escaping.
//!
//! The scanner is a single forward pass over a handful of tags, not an HTML
//! parser. Folder nesting is flattened: every `<H3>` heading becomes its own
//! folder and a bookmark belongs to the innermost open one.

use regex::{Captures, Regex};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFolder {
    pub name: String,
    pub add_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBookmark {
    pub url: String,
    pub title: String,
    pub description: String,
    pub add_date: Option<i64>,
    /// Tag names from the `TAGS` attribute
    pub tags: Vec<String>,
    /// Index into `ParsedDocument::folders`
    pub folder: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub folders: Vec<ParsedFolder>,
    pub bookmarks: Vec<ParsedBookmark>,
}

/// Heading and anchor text runs up to the next structural tag (`<A`, `<DT>`,
/// `<DD>`, `<DL>`, `<H3>` or a closing one) so a missing `</A>` or `</H3>`
/// cannot swallow what follows.
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?is)<DT>\s*<H3(?P<h3attrs>[^>]*)>(?P<folder>(?:[^<]|<[^/ADH]|</[^ADH])*)(?:</H3\s*>)?|<DT>\s*<A\s(?P<attrs>[^>]*)>(?P<title>(?:[^<]|<[^/ADH]|</[^ADH])*)(?:</A\s*>)?|<DD>(?P<desc>[^<]*)|(?P<open><DL[^>]*>)|(?P<close></DL\s*>)"#,
        )
        .expect("token regex is valid")
    })
}

fn attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)([A-Z_]+)\s*=\s*"([^"]*)""#).expect("attribute regex is valid")
    })
}

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup regex is valid"))
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex is valid")
    })
}

/// Scan a Netscape bookmark file.
///
/// `<H3>` makes a new folder current, `<DL>` opens a list for the pending
/// heading, `</DL>` returns to the enclosing folder. Input with missing
/// closing tags leaves bookmarks in the most recently opened folder.
pub fn parse_netscape_html(html: &str) -> ParsedDocument {
    let mut doc = ParsedDocument::default();
    let mut stack: Vec<Option<usize>> = Vec::new();
    let mut current: Option<usize> = None;
    let mut pending: Option<usize> = None;
    let mut last_was_bookmark = false;

    for caps in token_regex().captures_iter(html) {
        if let Some(name) = caps.name("folder") {
            let attrs = caps.name("h3attrs").map_or("", |m| m.as_str());
            doc.folders.push(ParsedFolder {
                name: clean_text(name.as_str()),
                add_date: attribute(attrs, "ADD_DATE").and_then(|d| d.parse().ok()),
            });
            let idx = doc.folders.len() - 1;
            current = Some(idx);
            pending = Some(idx);
            last_was_bookmark = false;
        } else if let Some(attrs) = caps.name("attrs") {
            last_was_bookmark = false;
            if let Some(bookmark) = parse_anchor(attrs.as_str(), &caps, current) {
                doc.bookmarks.push(bookmark);
                last_was_bookmark = true;
            }
        } else if let Some(desc) = caps.name("desc") {
            if last_was_bookmark {
                if let Some(bookmark) = doc.bookmarks.last_mut() {
                    bookmark.description = clean_text(desc.as_str());
                }
            }
            last_was_bookmark = false;
        } else if caps.name("open").is_some() {
            stack.push(pending.take().or(current));
            last_was_bookmark = false;
        } else if caps.name("close").is_some() {
            stack.pop();
            current = stack.last().copied().flatten();
            pending = None;
            last_was_bookmark = false;
        }
    }

    doc
}

fn parse_anchor(attrs: &str, caps: &Captures, folder: Option<usize>) -> Option<ParsedBookmark> {
    let url = attribute(attrs, "HREF").map(|u| unescape_html(u.trim()))?;
    if url.is_empty() || url.starts_with("place:") || url.starts_with("javascript:") {
        return None;
    }

    let title = caps
        .name("title")
        .map(|m| clean_text(m.as_str()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| url.clone());

    let tags = attribute(attrs, "TAGS")
        .map(|t| {
            unescape_html(t)
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(ParsedBookmark {
        url,
        title,
        description: String::new(),
        add_date: attribute(attrs, "ADD_DATE").and_then(|d| d.trim().parse().ok()),
        tags,
        folder,
    })
}

fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    attr_regex()
        .captures_iter(attrs)
        .find(|c| c[1].eq_ignore_ascii_case(name))
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Strip nested markup, decode entities and trim
fn clean_text(raw: &str) -> String {
    let stripped = markup_regex().replace_all(raw, "");
    unescape_html(stripped.trim()).trim().to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn unescape_html(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ if entity.starts_with("#x") || entity.starts_with("#X") => {
                    u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
                }
                _ if entity.starts_with('#') => {
                    entity[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TWO_LEVEL: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="1700000000">Dev</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1700000100">Rust</A>
    </DL><p>
</DL><p>
"#;

    #[test]
    fn test_two_level_file() {
        let doc = parse_netscape_html(TWO_LEVEL);
        assert_eq!(
            doc.folders,
            vec![ParsedFolder {
                name: "Dev".to_string(),
                add_date: Some(1700000000)
            }]
        );
        assert_eq!(doc.bookmarks.len(), 1);
        assert_eq!(doc.bookmarks[0].url, "https://www.rust-lang.org/");
        assert_eq!(doc.bookmarks[0].title, "Rust");
        assert_eq!(doc.bookmarks[0].folder, Some(0));
        assert_eq!(doc.bookmarks[0].add_date, Some(1700000100));
    }

    #[test]
    fn test_closing_list_returns_to_root() {
        let html = r#"<DL><p>
    <DT><H3>Dev</H3>
    <DL><p>
        <DT><A HREF="https://a.example">A</A>
    </DL><p>
    <DT><A HREF="https://b.example">B</A>
</DL><p>"#;
        let doc = parse_netscape_html(html);
        assert_eq!(doc.bookmarks[0].folder, Some(0));
        assert_eq!(doc.bookmarks[1].folder, None);
    }

    #[test]
    fn test_nested_folders_are_flattened() {
        let html = r#"<DL><p>
<DT><H3>Outer</H3>
<DL><p>
    <DT><H3>Inner</H3>
    <DL><p>
        <DT><A HREF="https://inner.example">In</A>
    </DL><p>
    <DT><A HREF="https://outer.example">Out</A>
</DL><p>
</DL><p>"#;
        let doc = parse_netscape_html(html);
        assert_eq!(doc.folders.len(), 2);
        assert_eq!(doc.bookmarks[0].folder, Some(1));
        assert_eq!(doc.bookmarks[1].folder, Some(0));
    }

    #[test]
    fn test_missing_close_degrades_to_last_folder() {
        let html = r#"<DL><p>
<DT><H3>One</H3>
<DT><A HREF="https://a.example">A</A>
<DT><H3>Two</H3>
<DT><A HREF="https://b.example">B</A>"#;
        let doc = parse_netscape_html(html);
        assert_eq!(doc.folders.len(), 2);
        assert_eq!(doc.bookmarks[0].folder, Some(0));
        assert_eq!(doc.bookmarks[1].folder, Some(1));
    }

    #[test]
    fn test_lowercase_tags_and_attributes() {
        let html = r#"<dl><p><dt><h3>Misc</h3><dl><p>
<dt><a href="https://x.example" tags="a, b">X</a>
<dd>About &amp; more
</dl><p></dl>"#;
        let doc = parse_netscape_html(html);
        assert_eq!(doc.bookmarks.len(), 1);
        let b = &doc.bookmarks[0];
        assert_eq!(b.tags, vec!["a", "b"]);
        assert_eq!(b.description, "About & more");
        assert_eq!(b.folder, Some(0));
    }

    #[rstest]
    #[case(r#"<DT><A HREF="place:sort=8">Recent</A>"#)]
    #[case(r#"<DT><A HREF="javascript:void(0)">Bookmarklet</A>"#)]
    #[case(r#"<DT><A HREF="">Empty</A>"#)]
    #[case(r#"<DT><A NAME="x">No href</A>"#)]
    fn test_skipped_anchors(#[case] html: &str) {
        assert!(parse_netscape_html(html).bookmarks.is_empty());
    }

    #[test]
    fn test_title_falls_back_to_url_and_decodes() {
        let html = r#"<DT><A HREF="https://a.example/?x=1&amp;y=2"></A>
<DT><A HREF="https://b.example">Tom &amp; Jerry&#39;s <b>page</b></A>"#;
        let doc = parse_netscape_html(html);
        assert_eq!(doc.bookmarks[0].url, "https://a.example/?x=1&y=2");
        assert_eq!(doc.bookmarks[0].title, "https://a.example/?x=1&y=2");
        assert_eq!(doc.bookmarks[1].title, "Tom & Jerry's page");
    }

    #[test]
    fn test_description_without_bookmark_is_ignored() {
        let html = "<DL><p><DD>orphan</DL>";
        let doc = parse_netscape_html(html);
        assert!(doc.bookmarks.is_empty());
    }

    #[rstest]
    #[case("a & b", "a &amp; b")]
    #[case("<tag>", "&lt;tag&gt;")]
    #[case(r#"say "hi" 'there'"#, "say &quot;hi&quot; &#39;there&#39;")]
    #[case("plain", "plain")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
        assert_eq!(unescape_html(expected), input);
    }

    #[rstest]
    #[case("&#x41;&#66;", "AB")]
    #[case("&amp;lt;", "&lt;")]
    #[case("&unknown;", "&unknown;")]
    #[case("AT&T", "AT&T")]
    fn test_unescape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape_html(input), expected);
    }

    #[test]
    fn test_unclosed_anchor_does_not_swallow_following_folder() {
        let html = r#"<DL><p>
    <DT><A HREF="https://broken.example">Broken
    <DT><H3>Folder</H3>
    <DL><p>
        <DT><A HREF="https://a.example">A</A>
        <DT><A HREF="https://b.example">B</A>
    </DL><p>
</DL><p>"#;
        let doc = parse_netscape_html(html);

        assert_eq!(doc.folders.len(), 1);
        assert_eq!(doc.folders[0].name, "Folder");
        assert_eq!(doc.bookmarks.len(), 3);
        assert_eq!(doc.bookmarks[0].title, "Broken");
        assert_eq!(doc.bookmarks[0].folder, None);
        assert_eq!(doc.bookmarks[1].url, "https://a.example");
        assert_eq!(doc.bookmarks[1].folder, Some(0));
        assert_eq!(doc.bookmarks[2].url, "https://b.example");
        assert_eq!(doc.bookmarks[2].folder, Some(0));
    }

    #[test]
    fn test_unclosed_heading_stops_at_next_tag() {
        let html = r#"<DL><p>
    <DT><H3>Open heading
    <DL><p>
        <DT><A HREF="https://a.example"><b>Bold</b> title</A>
    </DL><p>
</DL><p>"#;
        let doc = parse_netscape_html(html);

        assert_eq!(doc.folders.len(), 1);
        assert_eq!(doc.folders[0].name, "Open heading");
        assert_eq!(doc.bookmarks.len(), 1);
        assert_eq!(doc.bookmarks[0].title, "Bold title");
        assert_eq!(doc.bookmarks[0].folder, Some(0));
    }
}
