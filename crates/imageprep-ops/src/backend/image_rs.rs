// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `image` crate backend. Decoding picks the format from the file extension,
// resizing uses triangle (bilinear) filtering, and results are shown in the
// native popup window.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use imageprep_core::{AppConfig, Backend};
use imageprep_core::error::Result;
use tracing::{debug, info, instrument};

use super::{ImageBackend, check_dimensions, read_error};
use crate::display::{Viewer, WindowViewer};

#[derive(Debug)]
pub struct ImageRsBackend {
    viewer: WindowViewer,
    max_pixels: u64,
}

impl ImageRsBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            viewer: WindowViewer,
            max_pixels: config.max_resize_pixels,
        }
    }
}

impl Default for ImageRsBackend {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl ImageBackend for ImageRsBackend {
    fn kind(&self) -> Backend {
        Backend::Image
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let img = image::open(path).map_err(|err| read_error(path, err))?;
        info!(
            width = img.width(),
            height = img.height(),
            "Image loaded"
        );
        Ok(img)
    }

    #[instrument(skip(self, image))]
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        check_dimensions(width, height, self.max_pixels)?;
        info!(
            from_w = image.width(),
            from_h = image.height(),
            width,
            height,
            "Resizing image"
        );
        let resized = image.resize_exact(width, height, FilterType::Triangle);
        debug!("Resize complete");
        Ok(resized)
    }

    fn show(&self, title: &str, image: &DynamicImage) -> Result<()> {
        self.viewer.show(title, image)
    }
}
