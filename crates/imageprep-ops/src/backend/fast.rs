// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `fast_image_resize` backend. Decoding sniffs the format from the file
// contents rather than trusting the extension, resizing runs a Catmull-Rom
// convolution over RGBA8, and results go to the system image viewer.

use std::path::Path;

use fast_image_resize as fr;
use image::{DynamicImage, ImageBuffer, ImageReader, Rgba};
use imageprep_core::{AppConfig, Backend};
use imageprep_core::error::{PrepError, Result};
use tracing::{debug, info, instrument};

use super::{ImageBackend, check_dimensions, read_error};
use crate::display::{SystemViewer, Viewer};

#[derive(Debug)]
pub struct FastResizeBackend {
    viewer: SystemViewer,
    max_pixels: u64,
}

impl FastResizeBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            viewer: SystemViewer,
            max_pixels: config.max_resize_pixels,
        }
    }
}

impl Default for FastResizeBackend {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl ImageBackend for FastResizeBackend {
    fn kind(&self) -> Backend {
        Backend::FastResize
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| read_error(path, err))?
            .decode()
            .map_err(|err| read_error(path, err))?;
        info!(
            width = img.width(),
            height = img.height(),
            "Image decoded"
        );
        Ok(img)
    }

    #[instrument(skip(self, image))]
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        check_dimensions(width, height, self.max_pixels)?;
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();
        info!(src_width, src_height, width, height, "Resizing image");

        let src_image =
            fr::images::Image::from_vec_u8(src_width, src_height, src.into_raw(), fr::PixelType::U8x4)
                .map_err(|err| {
                    PrepError::ImageProcessing(format!("failed to wrap source buffer: {err}"))
                })?;
        let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x4);

        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom));
        fr::Resizer::new()
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|err| PrepError::ImageProcessing(format!("fast_image_resize failed: {err}")))?;

        let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, dst_image.into_vec())
            .ok_or_else(|| {
                PrepError::ImageProcessing("resized buffer has unexpected length".to_string())
            })?;
        debug!("Resize complete");
        Ok(DynamicImage::ImageRgba8(rgba))
    }

    fn show(&self, title: &str, image: &DynamicImage) -> Result<()> {
        self.viewer.show(title, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fixtures::write_gradient;
    use image::{GenericImageView, ImageFormat, Rgb, RgbImage};
    use imageprep_core::PrepError;

    #[test]
    fn loads_despite_misleading_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_gradient(dir.path(), "actually_png.jpg", ImageFormat::Png);

        let img = FastResizeBackend::default().load(&path).unwrap();
        assert_eq!((img.width(), img.height()), (32, 24));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FastResizeBackend::default()
            .load(&dir.path().join("nope.png"))
            .unwrap_err();
        assert!(matches!(err, PrepError::ImageRead { .. }));
    }

    #[test]
    fn garbage_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not pixels").unwrap();
        assert!(FastResizeBackend::default().load(&path).is_err());
    }

    #[test]
    fn resize_is_exact_and_keeps_solid_color() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 40, Rgb([200, 100, 50])));
        let out = FastResizeBackend::default().resize(&img, 17, 9).unwrap();
        assert_eq!(out.dimensions(), (17, 9));
        let px = out.get_pixel(8, 4).0;
        for (got, want) in px.iter().zip([200u8, 100, 50, 255]) {
            assert!(got.abs_diff(want) <= 1, "got {:?}", px);
        }
    }

    #[test]
    fn zero_target_is_rejected() {
        let img = DynamicImage::new_rgb8(4, 4);
        let err = FastResizeBackend::default().resize(&img, 0, 4).unwrap_err();
        assert!(matches!(err, PrepError::InvalidParameter { .. }));
    }
}
