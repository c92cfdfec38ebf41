// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Module handlers, one per menu entry. Each is a straight line of prompts
// with early returns: a bad answer prints a message and ends the run, and any
// error bubbles up to the menu loop's guard.

pub mod color;
pub mod noise;
pub mod resize;

use std::io::{BufRead, Write};
use std::path::Path;

use image::DynamicImage;
use imageprep_core::Backend;
use imageprep_core::error::{PrepError, Result};
use tracing::debug;

use crate::console::Console;
use crate::services::toolkit::Toolkit;

/// Ask for an image path. `None` (after telling the user) when left empty.
pub fn prompt_path<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<String>> {
    let path = console.prompt("\nEnter image file path: ")?;
    if path.is_empty() {
        console.say("No path given.")?;
        return Ok(None);
    }
    Ok(Some(path))
}

/// Decode `path` with `backend`. An unreadable file is reported to the user
/// and yields `None`; other errors propagate.
pub fn load_image<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    toolkit: &dyn Toolkit,
    backend: Backend,
    path: &str,
) -> Result<Option<DynamicImage>> {
    match toolkit.load(backend, Path::new(path)) {
        Ok(image) => Ok(Some(image)),
        Err(PrepError::ImageRead { reason, .. }) => {
            debug!(path, reason, "Image not readable");
            console.say(&format!("Could not read image from '{path}'."))?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Prompt for a path and load it with the `image` backend.
pub fn load_image_from_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    toolkit: &dyn Toolkit,
) -> Result<Option<DynamicImage>> {
    match prompt_path(console)? {
        Some(path) => load_image(console, toolkit, Backend::Image, &path),
        None => Ok(None),
    }
}

/// Print a numbered option list.
pub fn print_options<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    heading: &str,
    labels: impl IntoIterator<Item = &'static str>,
) -> Result<()> {
    console.say(&format!("\n{heading}"))?;
    for (idx, label) in labels.into_iter().enumerate() {
        console.say(&format!("{}. {}", idx + 1, label))?;
    }
    Ok(())
}
