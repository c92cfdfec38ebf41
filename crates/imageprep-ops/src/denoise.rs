// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Noise reduction: Gaussian, median and bilateral filtering via `imageproc`.
//
// Parameters use the kernel-size vocabulary users type at the prompt (odd
// window sides, a bilateral diameter) and are translated here into the
// radius/sigma arguments imageproc expects.

use image::DynamicImage;
use imageproc::filter::bilateral::GaussianEuclideanColorDistance;
use imageproc::filter::{bilateral_filter, gaussian_blur_f32, median_filter};
use imageprep_core::DenoiseFilter;
use imageprep_core::error::{PrepError, Result};
use tracing::{debug, info, instrument};

/// Largest accepted Gaussian/median kernel side. Keeps the median window
/// count and the padded image width well inside imageproc's integer ranges.
pub const MAX_KERNEL_SIZE: u32 = 255;

/// Largest bilateral diameter whose radius still fits imageproc's `u8`.
pub const MAX_BILATERAL_DIAMETER: u32 = 511;

/// Apply `filter` to `image`, returning a new three-channel image.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn denoise(image: &DynamicImage, filter: &DenoiseFilter) -> Result<DynamicImage> {
    validate(filter)?;
    let rgb = image.to_rgb8();

    let filtered = match *filter {
        DenoiseFilter::Gaussian { kernel_size } => {
            let sigma = gaussian_sigma(kernel_size);
            info!(kernel_size, sigma, "Applying Gaussian blur");
            gaussian_blur_f32(&rgb, sigma)
        }
        DenoiseFilter::Median { kernel_size } => {
            let radius = kernel_size / 2;
            info!(kernel_size, radius, "Applying median blur");
            median_filter(&rgb, radius, radius)
        }
        DenoiseFilter::Bilateral {
            diameter,
            sigma_color,
            sigma_space,
        } => {
            let radius = u8::try_from(diameter / 2).map_err(|_| PrepError::InvalidParameter {
                field: "diameter",
                reason: format!("must be at most {MAX_BILATERAL_DIAMETER}"),
            })?;
            info!(diameter, radius, sigma_color, sigma_space, "Applying bilateral filter");
            bilateral_filter(
                &rgb,
                radius,
                sigma_space,
                GaussianEuclideanColorDistance::new(sigma_color),
            )
        }
    };

    debug!(filter = filter.kind().label(), "Filter complete");
    Ok(DynamicImage::ImageRgb8(filtered))
}

/// Check filter parameters before handing them to imageproc, which panics
/// on non-positive sigmas and overflows on oversized windows.
pub fn validate(filter: &DenoiseFilter) -> Result<()> {
    match *filter {
        DenoiseFilter::Gaussian { kernel_size } | DenoiseFilter::Median { kernel_size } => {
            if kernel_size == 0 || kernel_size % 2 == 0 {
                return Err(PrepError::InvalidParameter {
                    field: "kernel size",
                    reason: format!("must be a positive odd number, got {kernel_size}"),
                });
            }
            if kernel_size > MAX_KERNEL_SIZE {
                return Err(PrepError::InvalidParameter {
                    field: "kernel size",
                    reason: format!("must be at most {MAX_KERNEL_SIZE}, got {kernel_size}"),
                });
            }
        }
        DenoiseFilter::Bilateral {
            diameter,
            sigma_color,
            sigma_space,
        } => {
            if diameter == 0 || diameter > MAX_BILATERAL_DIAMETER {
                return Err(PrepError::InvalidParameter {
                    field: "diameter",
                    reason: format!("must be between 1 and {MAX_BILATERAL_DIAMETER}, got {diameter}"),
                });
            }
            for (field, sigma) in [("sigma color", sigma_color), ("sigma space", sigma_space)] {
                if !(sigma.is_finite() && sigma > 0.0) {
                    return Err(PrepError::InvalidParameter {
                        field,
                        reason: format!("must be a positive number, got {sigma}"),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Standard deviation of a `kernel_size` Gaussian when no sigma is given,
/// matching OpenCV's `getGaussianKernel` rule.
pub fn gaussian_sigma(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}
