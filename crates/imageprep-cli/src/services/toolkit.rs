// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The image primitives the handlers are allowed to call, gathered behind one
// trait. `NativeToolkit` forwards to imageprep-ops; tests substitute a
// recording fake.

use std::path::Path;

use image::DynamicImage;
use imageprep_core::error::{PrepError, Result};
use imageprep_core::{AppConfig, Backend, ColorMode, DenoiseFilter};
use imageprep_ops::{ImageBackend, backend_for};

pub trait Toolkit {
    /// Decode the image at `path` with `backend`'s reader.
    fn load(&self, backend: Backend, path: &Path) -> Result<DynamicImage>;

    fn convert_color(&self, image: &DynamicImage, mode: ColorMode) -> Result<DynamicImage>;

    fn denoise(&self, image: &DynamicImage, filter: &DenoiseFilter) -> Result<DynamicImage>;

    fn resize(
        &self,
        backend: Backend,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage>;

    /// Downscaled copy for on-screen presentation.
    fn scale_for_display(&self, image: &DynamicImage) -> DynamicImage;

    /// Show `image` through `backend`'s display path; blocks until dismissed.
    fn show(&self, backend: Backend, title: &str, image: &DynamicImage) -> Result<()>;
}

/// Toolkit backed by the real image libraries.
pub struct NativeToolkit {
    backends: Vec<Box<dyn ImageBackend>>,
    display_max: (u32, u32),
}

impl NativeToolkit {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backends: Backend::ALL
                .iter()
                .map(|&kind| backend_for(kind, config))
                .collect(),
            display_max: (config.display_max_width, config.display_max_height),
        }
    }

    fn backend(&self, kind: Backend) -> Result<&dyn ImageBackend> {
        self.backends
            .iter()
            .find(|backend| backend.kind() == kind)
            .map(|backend| &**backend)
            .ok_or_else(|| PrepError::ImageProcessing(format!("no {} backend", kind.library_name())))
    }
}

impl Toolkit for NativeToolkit {
    fn load(&self, backend: Backend, path: &Path) -> Result<DynamicImage> {
        self.backend(backend)?.load(path)
    }

    fn convert_color(&self, image: &DynamicImage, mode: ColorMode) -> Result<DynamicImage> {
        Ok(imageprep_ops::convert_color(image, mode))
    }

    fn denoise(&self, image: &DynamicImage, filter: &DenoiseFilter) -> Result<DynamicImage> {
        imageprep_ops::denoise(image, filter)
    }

    fn resize(
        &self,
        backend: Backend,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage> {
        self.backend(backend)?.resize(image, width, height)
    }

    fn scale_for_display(&self, image: &DynamicImage) -> DynamicImage {
        let (max_width, max_height) = self.display_max;
        imageprep_ops::scale_for_display(image, max_width, max_height)
    }

    fn show(&self, backend: Backend, title: &str, image: &DynamicImage) -> Result<()> {
        self.backend(backend)?.show(title, image)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage, Luma};

    #[test]
    fn native_toolkit_scales_with_configured_maximum() {
        let config = AppConfig {
            display_max_width: 100,
            display_max_height: 100,
            ..AppConfig::default()
        };
        let toolkit = NativeToolkit::new(&config);
        let big = DynamicImage::ImageLuma8(GrayImage::from_pixel(400, 200, Luma([1])));
        assert_eq!(toolkit.scale_for_display(&big).dimensions(), (100, 50));
    }

    #[test]
    fn native_toolkit_routes_resize_to_backend() {
        let toolkit = NativeToolkit::new(&AppConfig::default());
        let img = DynamicImage::new_rgb8(10, 10);
        for backend in Backend::ALL {
            let out = toolkit.resize(backend, &img, 3, 7).unwrap();
            assert_eq!(out.dimensions(), (3, 7), "backend {backend:?}");
        }
    }

    #[test]
    fn native_toolkit_rejects_oversized_kernel() {
        let toolkit = NativeToolkit::new(&AppConfig::default());
        let img = DynamicImage::new_rgb8(8, 8);
        for filter in [
            DenoiseFilter::Median { kernel_size: 99_999 },
            DenoiseFilter::Gaussian { kernel_size: u32::MAX },
        ] {
            let err = toolkit.denoise(&img, &filter).unwrap_err();
            assert!(
                matches!(err, PrepError::InvalidParameter { field: "kernel size", .. }),
                "{filter:?}"
            );
        }
    }

    #[test]
    fn native_toolkit_rejects_oversized_resize() {
        let toolkit = NativeToolkit::new(&AppConfig::default());
        let img = DynamicImage::new_rgb8(4, 4);
        for backend in Backend::ALL {
            let err = toolkit.resize(backend, &img, u32::MAX, u32::MAX).unwrap_err();
            assert!(
                matches!(err, PrepError::InvalidParameter { field: "size", .. }),
                "backend {backend:?}"
            );
        }
    }

    #[test]
    fn native_toolkit_honours_configured_pixel_limit() {
        let config = AppConfig {
            max_resize_pixels: 100,
            ..AppConfig::default()
        };
        let toolkit = NativeToolkit::new(&config);
        let img = DynamicImage::new_rgb8(4, 4);
        for backend in Backend::ALL {
            assert!(toolkit.resize(backend, &img, 10, 10).is_ok());
            assert!(toolkit.resize(backend, &img, 11, 10).is_err());
        }
    }

    #[test]
    fn native_toolkit_reports_unreadable_path() {
        let toolkit = NativeToolkit::new(&AppConfig::default());
        let err = toolkit
            .load(Backend::Image, Path::new("/definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, PrepError::ImageRead { .. }));
    }
}
