use super::{AppContext, LinkCommand};
use linkcollection::error::{LinkError, Result};
use linkcollection::import_export::{self, ExportFormat, MergeMode};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExportCommand {
    pub format: Option<ExportFormat>,
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    fn target(&self, ctx: &AppContext) -> Result<(ExportFormat, PathBuf)> {
        let format = self
            .format
            .or_else(|| self.output.as_deref().and_then(ExportFormat::from_path))
            .unwrap_or(ExportFormat::Json);

        let path = match &self.output {
            Some(path) => path.clone(),
            None => {
                let dir = ctx.config.resolve_export_dir();
                fs::create_dir_all(&dir)?;
                dir.join(import_export::default_export_file_name(format))
            }
        };
        Ok((format, path))
    }
}

impl LinkCommand for ExportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let (format, path) = self.target(ctx)?;
        let result = import_export::export_data(ctx.store, format, &path)?;
        eprintln!(
            "✓ Exported {} bookmark(s) to {}",
            ctx.store.get_bookmarks().len(),
            result.file_path.display()
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ImportCommand {
    pub file: PathBuf,
    pub format: Option<ExportFormat>,
    pub mode: MergeMode,
}

impl LinkCommand for ImportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let format = self
            .format
            .or_else(|| ExportFormat::from_path(&self.file))
            .ok_or_else(|| {
                LinkError::InvalidInput(format!(
                    "Cannot tell the format of {}; pass --as json or --as html",
                    self.file.display()
                ))
            })?;

        let summary = import_export::import_data(ctx.store, format, self.mode, &self.file)?;
        eprintln!(
            "✓ Imported {} bookmark(s), {} folder(s), {} tag(s) from {}",
            summary.bookmarks,
            summary.folders,
            summary.tags,
            self.file.display()
        );
        Ok(())
    }
}
