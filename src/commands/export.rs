use anyhow::Result;
use std::path::PathBuf;

use crate::cli::{ThemeArg, ValueArgs};
use crate::config::ScorecardConfig;
use crate::io::DirectoryDestination;

pub struct ExportCommand {
    pub values: ValueArgs,
    pub blank: bool,
    pub theme: Option<ThemeArg>,
    pub output_dir: Option<PathBuf>,
}

/// Export the image and return the status message.
pub fn export(config: &ScorecardConfig, export: ExportCommand) -> Result<String> {
    let mut session = super::build_session(config, &export.values)?;
    if let Some(theme) = export.theme {
        session.set_theme(theme.into());
    }

    let dir = export.output_dir.unwrap_or_else(|| config.output_dir());
    let mut destination = DirectoryDestination::new(dir);
    let message = session.export_image(export.blank, &mut destination);
    eprintln!("{message}");
    Ok(message)
}
