// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend module: two independent image libraries, each with its own
// decoding, resizing and display path.

pub mod fast;
pub mod image_rs;

use std::path::Path;

use image::DynamicImage;
use imageprep_core::error::{PrepError, Result};
use imageprep_core::{AppConfig, Backend};

pub use fast::FastResizeBackend;
pub use image_rs::ImageRsBackend;

/// Load, resize and show through one image library.
pub trait ImageBackend {
    /// Which backend this is.
    fn kind(&self) -> Backend;

    /// Decode the image at `path` using this backend's own reader.
    fn load(&self, path: &Path) -> Result<DynamicImage>;

    /// Resize to exactly `width` x `height`, ignoring aspect ratio.
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage>;

    /// Display `image`, returning once the user is done with it.
    fn show(&self, title: &str, image: &DynamicImage) -> Result<()>;
}

/// The backend implementation for `kind`, configured from `config`.
pub fn backend_for(kind: Backend, config: &AppConfig) -> Box<dyn ImageBackend> {
    match kind {
        Backend::Image => Box::new(ImageRsBackend::new(config)),
        Backend::FastResize => Box::new(FastResizeBackend::new(config)),
    }
}

/// Reject zero-sized and oversized resize targets before any library
/// allocates for them.
pub(crate) fn check_dimensions(width: u32, height: u32, max_pixels: u64) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PrepError::InvalidParameter {
            field: "size",
            reason: format!("width and height must be positive, got {width}x{height}"),
        });
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > max_pixels {
        return Err(PrepError::InvalidParameter {
            field: "size",
            reason: format!("{width}x{height} exceeds the limit of {max_pixels} pixels"),
        });
    }
    Ok(())
}

pub(crate) fn read_error(path: &Path, err: impl std::fmt::Display) -> PrepError {
    PrepError::ImageRead {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::{Path, PathBuf};

    use image::{ImageFormat, Rgb, RgbImage};

    /// Write a small gradient image to `dir/name` in `format`.
    pub fn write_gradient(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
        let img = RgbImage::from_fn(32, 24, |x, y| Rgb([(x * 8) as u8, (y * 10) as u8, 128]));
        let path = dir.join(name);
        img.save_with_format(&path, format).unwrap();
        path
    }
}
