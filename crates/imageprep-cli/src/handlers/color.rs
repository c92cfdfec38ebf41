// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color space conversion module.

use std::io::{BufRead, Write};

use imageprep_core::error::Result;
use imageprep_core::{Backend, ColorMode};
use tracing::info;

use super::{load_image_from_user, print_options};
use crate::console::Console;
use crate::services::toolkit::Toolkit;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, toolkit: &dyn Toolkit) -> Result<()> {
    console.say("\n--- Color Space Conversion ---")?;

    let Some(image) = load_image_from_user(console, toolkit)? else {
        return Ok(());
    };

    print_options(
        console,
        "Target color space:",
        ColorMode::ALL.iter().map(|mode| mode.label()),
    )?;
    let key = console.prompt("Select target color space (1-4): ")?;
    let Some(mode) = ColorMode::from_key(&key) else {
        console.say("Invalid color space choice.")?;
        return Ok(());
    };

    let converted = toolkit.convert_color(&image, mode)?;
    info!(mode = %mode, "Color conversion finished");
    console.say(&format!(
        "Converted to {}: {}x{}",
        mode.label(),
        converted.width(),
        converted.height()
    ))?;

    let preview = toolkit.scale_for_display(&converted);
    toolkit.show(
        Backend::Image,
        &format!("Converted ({})", mode.label()),
        &preview,
    )
}
