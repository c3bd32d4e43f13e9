use super::helpers::{confirm, ensure_valid, resolve_tag};
use super::misc::OutputOptions;
use super::{AppContext, LinkCommand};
use linkcollection::error::Result;
use linkcollection::models::{TagDraft, TagPatch};
use linkcollection::validation;

#[derive(Debug, Clone)]
pub enum TagCommand {
    List(OutputOptions),
    Add {
        name: String,
        color: Option<String>,
    },
    Update {
        /// Id or name
        tag: String,
        name: Option<String>,
        color: Option<String>,
    },
    Delete {
        tag: String,
    },
    Clear {
        force: bool,
    },
}

impl LinkCommand for TagCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            TagCommand::List(output) => {
                let tags = ctx.store.get_tags();
                if tags.is_empty() {
                    eprintln!("No tags.");
                    return Ok(());
                }
                let bookmarks = ctx.store.get_bookmarks();
                output.output_format().print_tags(&tags, &bookmarks)
            }
            TagCommand::Add { name, color } => {
                let draft = TagDraft {
                    name: Some(name.trim().to_string()),
                    color: color.clone(),
                };
                ensure_valid(validation::validate_tag_draft(&draft))?;

                let tag = ctx.store.add_tag(draft)?;
                eprintln!("✓ Added tag {}: {}", tag.id, tag.name);
                Ok(())
            }
            TagCommand::Update { tag, name, color } => {
                let target = resolve_tag(ctx.store, tag)?;
                let draft = TagDraft {
                    name: Some(
                        name.as_deref()
                            .map(str::trim)
                            .unwrap_or(&target.name)
                            .to_string(),
                    ),
                    color: color.clone(),
                };
                ensure_valid(validation::validate_tag_draft(&draft))?;

                let updated = ctx.store.update_tag(
                    &target.id,
                    TagPatch {
                        name: draft.name,
                        color: draft.color,
                    },
                )?;
                eprintln!("✓ Updated tag {}: {}", updated.id, updated.name);
                Ok(())
            }
            TagCommand::Delete { tag } => {
                let target = resolve_tag(ctx.store, tag)?;
                ctx.store.delete_tag(&target.id)?;
                eprintln!("✓ Deleted tag {}", target.name);
                Ok(())
            }
            TagCommand::Clear { force } => {
                let count = ctx.store.get_tags().len();
                if count == 0 {
                    eprintln!("No tags to delete.");
                    return Ok(());
                }
                let confirmed =
                    *force || confirm(&format!("\nDelete all {} tag(s)? [y/N]: ", count))?;
                if !confirmed {
                    eprintln!("Deletion cancelled.");
                    return Ok(());
                }
                ctx.store.clear_all_tags()?;
                eprintln!("✓ Deleted {} tag(s)", count);
                Ok(())
            }
        }
    }
}
