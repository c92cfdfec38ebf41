// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Noise reduction module.

use std::io::{BufRead, Write};

use imageprep_core::error::Result;
use imageprep_core::{AppConfig, Backend, DenoiseFilter, FilterKind};
use tracing::info;

use super::{load_image_from_user, print_options};
use crate::console::Console;
use crate::services::toolkit::Toolkit;

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    toolkit: &dyn Toolkit,
    config: &AppConfig,
) -> Result<()> {
    console.say("\n--- Noise Reduction ---")?;

    let Some(image) = load_image_from_user(console, toolkit)? else {
        return Ok(());
    };

    print_options(
        console,
        "Filter type:",
        FilterKind::ALL.iter().map(|kind| kind.label()),
    )?;
    let key = console.prompt("Select filter (1-3): ")?;
    let Some(kind) = FilterKind::from_key(&key) else {
        console.say("Invalid filter choice.")?;
        return Ok(());
    };

    let filter = prompt_parameters(console, kind, config)?;
    let filtered = toolkit.denoise(&image, &filter)?;
    info!(filter = ?filter, "Noise reduction finished");
    console.say(&format!(
        "Applied {}: {}x{}",
        kind.label(),
        filtered.width(),
        filtered.height()
    ))?;

    toolkit.show(
        Backend::Image,
        &format!("Denoised ({})", kind.label()),
        &filtered,
    )
}

/// Ask for the parameters of `kind`, falling back to configured defaults on
/// empty answers.
fn prompt_parameters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: FilterKind,
    config: &AppConfig,
) -> Result<DenoiseFilter> {
    let filter = match kind {
        FilterKind::Gaussian => DenoiseFilter::Gaussian {
            kernel_size: console.prompt_number(
                "Kernel size (odd number)",
                "kernel size",
                config.default_kernel_size,
            )?,
        },
        FilterKind::Median => DenoiseFilter::Median {
            kernel_size: console.prompt_number(
                "Kernel size (odd number)",
                "kernel size",
                config.default_kernel_size,
            )?,
        },
        FilterKind::Bilateral => DenoiseFilter::Bilateral {
            diameter: console.prompt_number(
                "Diameter",
                "diameter",
                config.default_bilateral_diameter,
            )?,
            sigma_color: console.prompt_number(
                "Sigma color",
                "sigma color",
                config.default_sigma_color,
            )?,
            sigma_space: console.prompt_number(
                "Sigma space",
                "sigma space",
                config.default_sigma_space,
            )?,
        },
    };
    Ok(filter)
}
