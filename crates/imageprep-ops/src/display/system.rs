// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform image viewer. The image is written to a PNG in the temp directory
// and handed to the desktop's opener. The file is persisted because most
// openers return before the viewer has read it.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use imageprep_core::error::{PrepError, Result};
use tracing::{info, instrument};

use super::Viewer;

/// Shows images through the operating system's default image viewer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl SystemViewer {
    /// Encode `image` as PNG into a fresh temp file and return its path.
    pub fn write_temp_png(image: &DynamicImage) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("imageprep-")
            .suffix(".png")
            .tempfile()
            .map_err(|err| PrepError::Display(format!("failed to create preview file: {err}")))?;
        image
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(|err| PrepError::Display(format!("failed to write preview: {err}")))?;
        file.into_temp_path()
            .keep()
            .map_err(|err| PrepError::Display(format!("failed to keep preview file: {err}")))
    }
}

impl Viewer for SystemViewer {
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    fn show(&self, title: &str, image: &DynamicImage) -> Result<()> {
        let path = Self::write_temp_png(image)?;
        info!(title, path = %path.display(), "Opening image in system viewer");

        let status = opener_command(&path)
            .status()
            .map_err(|err| PrepError::Display(format!("could not launch image viewer: {err}")))?;
        if !status.success() {
            return Err(PrepError::Display(format!("image viewer exited with {status}")));
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
