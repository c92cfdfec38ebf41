// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display module: downscaling for on-screen presentation and the two ways a
// result can be shown.

pub mod system;
pub mod window;

use image::DynamicImage;
use image::imageops::FilterType;
use imageprep_core::error::Result;
use tracing::debug;

pub use system::SystemViewer;
pub use window::WindowViewer;

/// Something that can put an image in front of the user.
///
/// `show` returns once the user is done looking at the image.
pub trait Viewer {
    fn show(&self, title: &str, image: &DynamicImage) -> Result<()>;
}

/// Return a copy of `image` that fits within `max_width` x `max_height`,
/// preserving aspect ratio. Images that already fit are never upscaled.
pub fn scale_for_display(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if image.width() <= max_width && image.height() <= max_height {
        return image.clone();
    }
    let scaled = image.resize(max_width, max_height, FilterType::Lanczos3);
    debug!(
        from_w = image.width(),
        from_h = image.height(),
        to_w = scaled.width(),
        to_h = scaled.height(),
        "Scaled for display"
    );
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn gray(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([90])))
    }

    #[test]
    fn small_image_is_left_alone() {
        let out = scale_for_display(&gray(320, 200), 800, 600);
        assert_eq!((out.width(), out.height()), (320, 200));
    }

    #[test]
    fn wide_image_is_limited_by_width() {
        let out = scale_for_display(&gray(1600, 400), 800, 600);
        assert_eq!((out.width(), out.height()), (800, 200));
    }

    #[test]
    fn tall_image_is_limited_by_height() {
        let out = scale_for_display(&gray(1000, 1200), 800, 600);
        assert_eq!((out.width(), out.height()), (500, 600));
    }
}
