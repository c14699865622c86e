use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{CanvasError, Result};

/// Displays a saved image.
pub trait Viewer {
    /// Shows the image stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be displayed.
    fn show(&self, path: &Path) -> Result<()>;
}

/// Opens images with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CanvasError::Viewer(format!("{} does not exist", path.display())).into());
        }
        info!(path = %path.display(), "opening image viewer");
        Self::command(path).spawn().map_err(CanvasError::from)?;
        Ok(())
    }
}
