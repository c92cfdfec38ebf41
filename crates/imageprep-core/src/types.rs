// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: menu selections, color modes, filters and backends.
//
// Every selectable enum maps to the digit the user types at its prompt via
// `from_key`, and exposes `ALL` in menu order so the listing and the parser
// cannot drift apart.

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ColorConversion,
    NoiseReduction,
    Resize,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 4] = [
        Self::ColorConversion,
        Self::NoiseReduction,
        Self::Resize,
        Self::Exit,
    ];

    /// Parse the trimmed digit typed at the main prompt.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::ColorConversion),
            "2" => Some(Self::NoiseReduction),
            "3" => Some(Self::Resize),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu line text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ColorConversion => "Color Space Conversion (RGB/GRAY/HSV/LAB)",
            Self::NoiseReduction => "Noise Reduction (Gaussian/Median/Bilateral filters)",
            Self::Resize => "Image Resizing (image & fast_image_resize)",
            Self::Exit => "Exit Program",
        }
    }
}

/// Target color space for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Gray,
    Hsv,
    Lab,
}

impl ColorMode {
    pub const ALL: [Self; 4] = [Self::Rgb, Self::Gray, Self::Hsv, Self::Lab];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::Rgb),
            "2" => Some(Self::Gray),
            "3" => Some(Self::Hsv),
            "4" => Some(Self::Lab),
            _ => None,
        }
    }

    /// Lowercase mode name handed to the conversion primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Gray => "gray",
            Self::Hsv => "hsv",
            Self::Lab => "lab",
        }
    }

    /// Uppercase name for menus and window titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Gray => "GRAY",
            Self::Hsv => "HSV",
            Self::Lab => "LAB",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denoising filter family, as picked from the filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Gaussian,
    Median,
    Bilateral,
}

impl FilterKind {
    pub const ALL: [Self; 3] = [Self::Gaussian, Self::Median, Self::Bilateral];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::Gaussian),
            "2" => Some(Self::Median),
            "3" => Some(Self::Bilateral),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gaussian => "Gaussian Blur",
            Self::Median => "Median Blur",
            Self::Bilateral => "Bilateral Filter",
        }
    }
}

/// A fully parameterised denoising filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DenoiseFilter {
    /// Square Gaussian kernel of side `kernel_size` (odd).
    Gaussian { kernel_size: u32 },
    /// Square median window of side `kernel_size` (odd).
    Median { kernel_size: u32 },
    /// Edge-preserving filter over a `diameter`-wide neighbourhood.
    Bilateral {
        diameter: u32,
        sigma_color: f32,
        sigma_space: f32,
    },
}

impl DenoiseFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Gaussian { .. } => FilterKind::Gaussian,
            Self::Median { .. } => FilterKind::Median,
            Self::Bilateral { .. } => FilterKind::Bilateral,
        }
    }
}

/// The two independent image libraries used for file I/O, resizing and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The `image` crate: extension-based decoding, triangle (bilinear)
    /// resampling, native popup window.
    Image,
    /// `fast_image_resize`: content-sniffed decoding, Catmull-Rom (bicubic)
    /// convolution, platform image viewer.
    FastResize,
}

impl Backend {
    pub const ALL: [Self; 2] = [Self::Image, Self::FastResize];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::Image),
            "2" => Some(Self::FastResize),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image (Triangle/bilinear)",
            Self::FastResize => "fast_image_resize (Catmull-Rom/bicubic)",
        }
    }

    /// Short library name used in result lines and logs.
    pub fn library_name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::FastResize => "fast_image_resize",
        }
    }
}
