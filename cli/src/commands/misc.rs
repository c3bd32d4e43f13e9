use super::{AppContext, LinkCommand};
use crate::format::OutputFormat;
use linkcollection::browser;
use linkcollection::error::{EntityKind, LinkError, Result};
use linkcollection::search;

/// Global output flags carried into commands that print records
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: Option<String>,
    pub nc: bool,
}

impl OutputOptions {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::resolve(self.format.as_deref(), self.nc)
    }
}

#[derive(Debug, Clone)]
pub struct OpenCommand {
    pub id: String,
    pub browser: Option<String>,
}

impl LinkCommand for OpenCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmark = ctx
            .store
            .get_bookmark(&self.id)
            .ok_or_else(|| LinkError::not_found(EntityKind::Bookmark, &self.id))?;

        let browser_path = match &self.browser {
            Some(path) => Some(path.clone()),
            None => ctx.store.get_settings().default_browser_path(),
        };

        eprintln!("Opening: {}", bookmark.url);
        browser::open_url(&bookmark.url, browser_path.as_deref())?;
        ctx.store.increment_visit_count(&bookmark.id)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum SearchCommand {
    Query {
        query: String,
        output: OutputOptions,
    },
    History,
    ClearHistory,
}

impl LinkCommand for SearchCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            SearchCommand::Query { query, output } => run_search(ctx, query, output),
            SearchCommand::History => {
                let history = ctx.store.get_search_history();
                if history.is_empty() {
                    eprintln!("No recent searches.");
                }
                for entry in history.entries() {
                    println!("{}", entry);
                }
                Ok(())
            }
            SearchCommand::ClearHistory => {
                ctx.store.clear_search_history()?;
                eprintln!("Search history cleared.");
                Ok(())
            }
        }
    }
}

fn run_search(ctx: &AppContext, query: &str, output: &OutputOptions) -> Result<()> {
    // a lost history entry never fails the search itself
    if let Err(e) = ctx.store.record_search(query) {
        log::warn!("{}", e);
    }

    let bookmarks = ctx.store.get_bookmarks();
    let folders = ctx.store.get_folders();
    let tags = ctx.store.get_tags();

    let results = search::search_bookmarks(&bookmarks, &tags, query);
    if results.is_empty() {
        eprintln!("No bookmarks found matching '{}'.", query.trim());
        return Ok(());
    }

    eprintln!("{} result(s) for '{}':", results.len(), query.trim());
    output
        .output_format()
        .print_bookmarks(&results, &folders, &tags, Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;

    #[test]
    fn test_open_unknown_bookmark_is_not_found() {
        let env = TestEnv::new();
        let cmd = OpenCommand {
            id: "missing".to_string(),
            browser: None,
        };
        assert!(matches!(
            cmd.execute(&env.ctx()),
            Err(LinkError::NotFound {
                kind: EntityKind::Bookmark,
                ..
            })
        ));
    }

    #[test]
    fn test_search_with_no_matches_is_ok() {
        let env = TestEnv::new();
        let cmd = SearchCommand::Query {
            query: "nothing".to_string(),
            output: OutputOptions::default(),
        };
        assert!(cmd.execute(&env.ctx()).is_ok());
    }

    #[test]
    fn test_search_records_history() {
        let env = TestEnv::new();
        let ctx = env.ctx();
        for query in ["rust", "crates", "rust"] {
            SearchCommand::Query {
                query: query.to_string(),
                output: OutputOptions::default(),
            }
            .execute(&ctx)
            .unwrap();
        }

        let history = ctx.store.get_search_history();
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["rust", "crates"]);
    }

    #[test]
    fn test_clear_history_command() {
        let env = TestEnv::new();
        let ctx = env.ctx();
        ctx.store.record_search("rust").unwrap();

        SearchCommand::History.execute(&ctx).unwrap();
        SearchCommand::ClearHistory.execute(&ctx).unwrap();
        assert!(ctx.store.get_search_history().is_empty());
    }

    #[test]
    fn test_output_options_no_color() {
        let options = OutputOptions {
            format: None,
            nc: true,
        };
        assert_eq!(options.output_format(), OutputFormat::Plain);
    }
}
