use linkcollection::config::Config;
use linkcollection::error::Result;
use linkcollection::LinkStore;

pub struct AppContext<'a> {
    pub store: &'a LinkStore,
    pub config: &'a Config,
}

pub mod bookmark;
pub mod folder;
pub mod helpers;
pub mod import_export;
pub mod misc;
pub mod settings;
pub mod tag;

pub trait LinkCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn LinkCommand>)
pub enum CommandEnum {
    List(bookmark::ListCommand),
    Add(bookmark::AddCommand),
    Update(bookmark::UpdateCommand),
    Delete(bookmark::DeleteCommand),
    Visit(bookmark::VisitCommand),
    Clear(bookmark::ClearCommand),
    Open(misc::OpenCommand),
    Search(misc::SearchCommand),
    Folder(folder::FolderCommand),
    Tag(tag::TagCommand),
    Settings(settings::SettingsCommand),
    Export(import_export::ExportCommand),
    Import(import_export::ImportCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(ctx),
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Update(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Visit(cmd) => cmd.execute(ctx),
            Self::Clear(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Search(cmd) => cmd.execute(ctx),
            Self::Folder(cmd) => cmd.execute(ctx),
            Self::Tag(cmd) => cmd.execute(ctx),
            Self::Settings(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx),
        }
    }
}
