// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color-space conversion. RGB and GRAY come straight from the `image` crate;
// HSV and LAB are computed per pixel and stored in 8-bit, three-channel
// buffers using the OpenCV encodings (H halved, L scaled to 0..=255, a/b
// offset by 128).

use image::{DynamicImage, Rgb};
use imageprep_core::ColorMode;
use tracing::{debug, instrument};

/// Convert `image` into the requested color space.
#[instrument(skip_all, fields(mode = %mode, width = image.width(), height = image.height()))]
pub fn convert_color(image: &DynamicImage, mode: ColorMode) -> DynamicImage {
    let converted = match mode {
        ColorMode::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorMode::Gray => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorMode::Hsv => map_rgb_pixels(image, hsv_pixel),
        ColorMode::Lab => map_rgb_pixels(image, lab_pixel),
    };
    debug!(color = ?converted.color(), "Color conversion complete");
    converted
}

fn map_rgb_pixels(image: &DynamicImage, convert: fn(Rgb<u8>) -> Rgb<u8>) -> DynamicImage {
    let mut rgb = image.to_rgb8();
    for pixel in rgb.pixels_mut() {
        *pixel = convert(*pixel);
    }
    DynamicImage::ImageRgb8(rgb)
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

fn hsv_pixel(Rgb([r, g, b]): Rgb<u8>) -> Rgb<u8> {
    let (h, s, v) = rgb_to_hsv(r, g, b);
    Rgb([
        to_u8(h / 2.0),
        to_u8(s * 255.0),
        to_u8(v * 255.0),
    ])
}

// D65 white point, sRGB primaries.
const XYZ_FROM_RGB: [[f32; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];
const WHITE_X: f32 = 0.950456;
const WHITE_Z: f32 = 1.088754;
const LAB_EPSILON: f32 = 0.008856;

/// CIE L*a*b* of an sRGB pixel: L in [0, 100], a and b roughly [-128, 127].
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
    let dot = |row: [f32; 3]| row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2];

    let x = dot(XYZ_FROM_RGB[0]) / WHITE_X;
    let y = dot(XYZ_FROM_RGB[1]);
    let z = dot(XYZ_FROM_RGB[2]) / WHITE_Z;

    let l = if y > LAB_EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        903.3 * y
    };
    let a = 500.0 * (lab_f(x) - lab_f(y));
    let b = 200.0 * (lab_f(y) - lab_f(z));

    (l, a, b)
}

fn lab_pixel(Rgb([r, g, b]): Rgb<u8>) -> Rgb<u8> {
    let (l, a, b) = rgb_to_lab(r, g, b);
    Rgb([to_u8(l * 255.0 / 100.0), to_u8(a + 128.0), to_u8(b + 128.0)])
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage, Rgba, RgbaImage};

    fn solid(r: u8, g: u8, b: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([r, g, b])))
    }

    fn first_rgb(image: &DynamicImage) -> [u8; 3] {
        let Rgba([r, g, b, _]) = image.get_pixel(0, 0);
        [r, g, b]
    }

    fn assert_close(actual: [u8; 3], expected: [u8; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (*a as i16 - *e as i16).abs() <= 1,
                "expected {:?}, got {:?}",
                expected,
                actual
            );
        }
    }

    #[test]
    fn gray_produces_single_channel() {
        let out = convert_color(&solid(200, 10, 10), ColorMode::Gray);
        assert_eq!(out.color(), image::ColorType::L8);
        assert_eq!(out.dimensions(), (4, 3));
    }

    #[test]
    fn rgb_drops_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])));
        let out = convert_color(&rgba, ColorMode::Rgb);
        assert_eq!(out.color(), image::ColorType::Rgb8);
        assert_eq!(first_rgb(&out), [1, 2, 3]);
    }

    #[test]
    fn hsv_primaries_use_halved_hue() {
        assert_close(first_rgb(&convert_color(&solid(255, 0, 0), ColorMode::Hsv)), [0, 255, 255]);
        assert_close(first_rgb(&convert_color(&solid(0, 255, 0), ColorMode::Hsv)), [60, 255, 255]);
        assert_close(first_rgb(&convert_color(&solid(0, 0, 255), ColorMode::Hsv)), [120, 255, 255]);
    }

    #[test]
    fn hsv_of_gray_has_no_saturation() {
        assert_close(first_rgb(&convert_color(&solid(128, 128, 128), ColorMode::Hsv)), [0, 0, 128]);
    }

    #[test]
    fn lab_of_white_and_black() {
        assert_close(first_rgb(&convert_color(&solid(255, 255, 255), ColorMode::Lab)), [255, 128, 128]);
        assert_close(first_rgb(&convert_color(&solid(0, 0, 0), ColorMode::Lab)), [0, 128, 128]);
    }

    #[test]
    fn lab_of_red_is_positive_a() {
        let (l, a, b) = rgb_to_lab(255, 0, 0);
        assert!((l - 53.2).abs() < 0.5, "L = {l}");
        assert!((a - 80.1).abs() < 1.0, "a = {a}");
        assert!((b - 67.2).abs() < 1.0, "b = {b}");
    }

    #[test]
    fn conversion_keeps_dimensions() {
        for mode in ColorMode::ALL {
            let out = convert_color(&solid(12, 34, 56), mode);
            assert_eq!(out.dimensions(), (4, 3), "mode {mode}");
        }
    }
}
