use super::helpers::{confirm, ensure_valid, resolve_folder};
use super::misc::OutputOptions;
use super::{AppContext, LinkCommand};
use linkcollection::error::Result;
use linkcollection::models::{FolderDraft, FolderPatch};
use linkcollection::validation;

#[derive(Debug, Clone)]
pub enum FolderCommand {
    List(OutputOptions),
    Add {
        name: String,
        icon: Option<String>,
        color: Option<String>,
    },
    Update {
        /// Id or name
        folder: String,
        name: Option<String>,
        /// `Some(None)` removes the icon
        icon: Option<Option<String>>,
        color: Option<String>,
        order: Option<i64>,
    },
    Delete {
        folder: String,
    },
    Clear {
        force: bool,
    },
}

fn check_color(color: Option<&str>, errors: &mut Vec<String>) {
    if let Some(color) = color {
        if !validation::is_valid_color(color) {
            errors.push("Invalid color format".to_string());
        }
    }
}

impl LinkCommand for FolderCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            FolderCommand::List(output) => {
                let mut folders = ctx.store.get_folders();
                if folders.is_empty() {
                    eprintln!("No folders.");
                    return Ok(());
                }
                folders.sort_by_key(|f| f.order);
                let bookmarks = ctx.store.get_bookmarks();
                output.output_format().print_folders(&folders, &bookmarks)
            }
            FolderCommand::Add { name, icon, color } => {
                let mut errors = validation::validate_folder_name(name);
                check_color(color.as_deref(), &mut errors);
                ensure_valid(errors)?;

                let folder = ctx.store.add_folder(FolderDraft {
                    name: Some(name.trim().to_string()),
                    icon: icon.clone(),
                    color: color.clone(),
                })?;
                eprintln!("✓ Added folder {}: {}", folder.id, folder.name);
                Ok(())
            }
            FolderCommand::Update {
                folder,
                name,
                icon,
                color,
                order,
            } => {
                let mut errors = Vec::new();
                if let Some(name) = name {
                    errors.extend(validation::validate_folder_name(name));
                }
                check_color(color.as_deref(), &mut errors);
                ensure_valid(errors)?;

                let target = resolve_folder(ctx.store, folder)?;
                let updated = ctx.store.update_folder(
                    &target.id,
                    FolderPatch {
                        name: name.as_ref().map(|n| n.trim().to_string()),
                        icon: icon.clone(),
                        color: color.clone(),
                        order: *order,
                    },
                )?;
                eprintln!("✓ Updated folder {}: {}", updated.id, updated.name);
                Ok(())
            }
            FolderCommand::Delete { folder } => {
                let target = resolve_folder(ctx.store, folder)?;
                let moved = ctx
                    .store
                    .get_bookmarks()
                    .iter()
                    .filter(|b| b.folder_id == target.id)
                    .count();
                ctx.store.delete_folder(&target.id)?;
                eprintln!(
                    "✓ Deleted folder {}; {} bookmark(s) moved to uncategorized",
                    target.name, moved
                );
                Ok(())
            }
            FolderCommand::Clear { force } => {
                let count = ctx.store.get_folders().len();
                if count == 0 {
                    eprintln!("No folders to delete.");
                    return Ok(());
                }
                let confirmed =
                    *force || confirm(&format!("\nDelete all {} folder(s)? [y/N]: ", count))?;
                if !confirmed {
                    eprintln!("Deletion cancelled.");
                    return Ok(());
                }
                ctx.store.clear_all_folders()?;
                eprintln!("✓ Deleted {} folder(s)", count);
                Ok(())
            }
        }
    }
}
