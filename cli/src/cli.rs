use crate::commands::{
    bookmark, folder, import_export, misc, settings, tag, AppContext, CommandEnum,
};
use linkcollection::error::Result;
use linkcollection::import_export::{ExportFormat, MergeMode};
use linkcollection::models::{Language, Theme, ViewMode};
use linkcollection::search::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Personal bookmark manager backed by JSON files", long_about = None)]
pub struct Cli {
    /// Directory holding the JSON data files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug", global = true)]
    pub debug: bool,

    /// Output format: json, yaml, toml or plain
    #[arg(short = 'f', long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bookmarks
    List {
        /// Only bookmarks in this folder (id or name)
        #[arg(long, conflicts_with = "uncategorized")]
        folder: Option<String>,

        /// Only bookmarks without a folder
        #[arg(long)]
        uncategorized: bool,

        /// Only bookmarks carrying this tag (id or name)
        #[arg(short, long)]
        tag: Option<String>,

        /// Sort key: created, updated, title, visits, last-visited
        #[arg(short, long, default_value = "created")]
        sort: SortKey,

        /// Reverse the sort order
        #[arg(long)]
        desc: bool,
    },

    /// Add a new bookmark
    Add {
        /// URL to bookmark
        url: String,

        /// Bookmark title (defaults to the URL)
        #[arg(long)]
        title: Option<String>,

        /// Notes or description
        #[arg(short, long)]
        description: Option<String>,

        /// Favicon URL (filled automatically when autoFetchIcon is on)
        #[arg(long)]
        favicon: Option<String>,

        /// Display color, #RGB or #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Folder id or name
        #[arg(long)]
        folder: Option<String>,

        /// Tag ids or names
        #[arg(short, long, value_delimiter = ',')]
        tag: Vec<String>,
    },

    /// Update an existing bookmark
    Update {
        /// Bookmark id
        id: String,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        favicon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Folder id or name; an empty string moves it to uncategorized
        #[arg(long)]
        folder: Option<String>,

        /// Replace the tag set (ids or names)
        #[arg(short, long, value_delimiter = ',')]
        tag: Option<Vec<String>>,

        /// Remove every tag
        #[arg(long, conflicts_with = "tag")]
        no_tags: bool,
    },

    /// Delete a bookmark
    Delete {
        /// Bookmark id
        id: String,
    },

    /// Record a visit without opening the browser
    Visit {
        /// Bookmark id
        id: String,
    },

    /// Open a bookmark in the browser and record the visit
    Open {
        /// Bookmark id
        id: String,

        /// Browser executable overriding the configured default
        #[arg(long)]
        browser: Option<String>,
    },

    /// Delete all bookmarks
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Search title, URL, description and tag names
    Search {
        /// Search keywords
        #[arg(required_unless_present_any = ["history", "clear_history"])]
        query: Vec<String>,

        /// List recent searches, most recent first
        #[arg(long, conflicts_with_all = ["query", "clear_history"])]
        history: bool,

        /// Forget recent searches
        #[arg(long, conflicts_with = "query")]
        clear_history: bool,
    },

    /// Manage folders
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Manage tags
    #[command(subcommand)]
    Tag(TagCommands),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export all data to a JSON bundle or Netscape HTML file
    Export {
        /// json or html (defaults to the output extension, then json)
        #[arg(long = "as")]
        export_format: Option<ExportFormat>,

        /// Output path (defaults to LinkCollection_Bookmarks_<date>.<ext> in the export dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON bundle or Netscape HTML file
    Import {
        /// File to import
        file: PathBuf,

        /// json or html (defaults to the file extension)
        #[arg(long = "as")]
        import_format: Option<ExportFormat>,

        /// merge (append) or replace (discard existing data first)
        #[arg(short, long, default_value = "merge")]
        mode: MergeMode,
    },
}

#[derive(Subcommand)]
pub enum FolderCommands {
    /// List folders in display order
    List,

    /// Add a folder
    Add {
        name: String,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Update a folder
    Update {
        /// Folder id or name
        folder: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long, conflicts_with = "icon")]
        no_icon: bool,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        order: Option<i64>,
    },

    /// Delete a folder; its bookmarks become uncategorized
    Delete {
        /// Folder id or name
        folder: String,
    },

    /// Delete all folders
    Clear {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// List tags
    List,

    /// Add a tag
    Add {
        name: String,

        #[arg(long)]
        color: Option<String>,
    },

    /// Update a tag
    Update {
        /// Tag id or name
        tag: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a tag and remove it from every bookmark
    Delete {
        /// Tag id or name
        tag: String,
    },

    /// Delete all tags
    Clear {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings
    Show,

    /// Change one or more settings
    Set {
        /// Browser name (from the registered list) or executable path
        #[arg(long)]
        default_browser: Option<String>,

        #[arg(long)]
        view_mode: Option<ViewMode>,

        #[arg(long)]
        sidebar_collapsed: Option<bool>,

        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        language: Option<Language>,

        #[arg(long)]
        auto_fetch_icon: Option<bool>,
    },

    /// Register a browser
    AddBrowser {
        name: String,
        path: String,

        #[arg(long, default_value = "")]
        icon: String,
    },

    /// Unregister a browser
    RemoveBrowser { name: String },
}

/// Map parsed arguments onto a command and run it
pub fn handle_args(cli: Cli, ctx: &AppContext) -> Result<()> {
    let command = build_command(cli);
    command.execute(ctx)
}

fn build_command(cli: Cli) -> CommandEnum {
    let output = misc::OutputOptions {
        format: cli.format,
        nc: cli.nc,
    };

    match cli.command {
        Commands::List {
            folder,
            uncategorized,
            tag,
            sort,
            desc,
        } => CommandEnum::List(bookmark::ListCommand {
            folder: if uncategorized {
                Some(String::new())
            } else {
                folder
            },
            tag,
            sort,
            descending: desc,
            output,
        }),
        Commands::Add {
            url,
            title,
            description,
            favicon,
            color,
            folder,
            tag,
        } => CommandEnum::Add(bookmark::AddCommand {
            url,
            title,
            description,
            favicon,
            color,
            folder,
            tags: tag,
        }),
        Commands::Update {
            id,
            url,
            title,
            description,
            favicon,
            color,
            folder,
            tag,
            no_tags,
        } => CommandEnum::Update(bookmark::UpdateCommand {
            id,
            url,
            title,
            description,
            favicon,
            color,
            folder,
            tags: if no_tags { Some(Vec::new()) } else { tag },
        }),
        Commands::Delete { id } => CommandEnum::Delete(bookmark::DeleteCommand { id }),
        Commands::Visit { id } => CommandEnum::Visit(bookmark::VisitCommand { id }),
        Commands::Open { id, browser } => CommandEnum::Open(misc::OpenCommand { id, browser }),
        Commands::Clear { force } => CommandEnum::Clear(bookmark::ClearCommand { force }),
        Commands::Search {
            query,
            history,
            clear_history,
        } => CommandEnum::Search(if history {
            misc::SearchCommand::History
        } else if clear_history {
            misc::SearchCommand::ClearHistory
        } else {
            misc::SearchCommand::Query {
                query: query.join(" "),
                output,
            }
        }),
        Commands::Folder(sub) => CommandEnum::Folder(match sub {
            FolderCommands::List => folder::FolderCommand::List(output),
            FolderCommands::Add { name, icon, color } => {
                folder::FolderCommand::Add { name, icon, color }
            }
            FolderCommands::Update {
                folder,
                name,
                icon,
                no_icon,
                color,
                order,
            } => folder::FolderCommand::Update {
                folder,
                name,
                icon: if no_icon { Some(None) } else { icon.map(Some) },
                color,
                order,
            },
            FolderCommands::Delete { folder } => folder::FolderCommand::Delete { folder },
            FolderCommands::Clear { force } => folder::FolderCommand::Clear { force },
        }),
        Commands::Tag(sub) => CommandEnum::Tag(match sub {
            TagCommands::List => tag::TagCommand::List(output),
            TagCommands::Add { name, color } => tag::TagCommand::Add { name, color },
            TagCommands::Update { tag, name, color } => {
                tag::TagCommand::Update { tag, name, color }
            }
            TagCommands::Delete { tag } => tag::TagCommand::Delete { tag },
            TagCommands::Clear { force } => tag::TagCommand::Clear { force },
        }),
        Commands::Settings(sub) => CommandEnum::Settings(match sub {
            SettingsCommands::Show => settings::SettingsCommand::Show(output),
            SettingsCommands::Set {
                default_browser,
                view_mode,
                sidebar_collapsed,
                theme,
                language,
                auto_fetch_icon,
            } => settings::SettingsCommand::Set(linkcollection::models::SettingsPatch {
                default_browser,
                available_browsers: None,
                view_mode,
                sidebar_collapsed,
                theme,
                language,
                auto_fetch_icon,
            }),
            SettingsCommands::AddBrowser { name, path, icon } => {
                settings::SettingsCommand::AddBrowser { name, path, icon }
            }
            SettingsCommands::RemoveBrowser { name } => {
                settings::SettingsCommand::RemoveBrowser { name }
            }
        }),
        Commands::Export {
            export_format,
            output: path,
        } => CommandEnum::Export(import_export::ExportCommand {
            format: export_format,
            output: path,
        }),
        Commands::Import {
            file,
            import_format,
            mode,
        } => CommandEnum::Import(import_export::ImportCommand {
            file,
            format: import_format,
            mode,
        }),
    }
}
