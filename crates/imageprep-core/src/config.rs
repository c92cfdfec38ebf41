// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

/// Built-in settings for the interactive toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Largest width a converted image is shown at.
    pub display_max_width: u32,
    /// Largest height a converted image is shown at.
    pub display_max_height: u32,
    /// Kernel size used by Gaussian and median blur when the prompt is left empty.
    pub default_kernel_size: u32,
    /// Bilateral filter neighbourhood diameter default.
    pub default_bilateral_diameter: u32,
    /// Bilateral filter color sigma default.
    pub default_sigma_color: f32,
    /// Bilateral filter spatial sigma default.
    pub default_sigma_space: f32,
    /// Largest resize target, in pixels, either backend will allocate.
    pub max_resize_pixels: u64,
    /// Width of the `=` and `-` rules around the menu.
    pub rule_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_max_width: 800,
            display_max_height: 600,
            default_kernel_size: 11,
            default_bilateral_diameter: 15,
            default_sigma_color: 100.0,
            default_sigma_space: 100.0,
            max_resize_pixels: 1 << 28,
            rule_width: 70,
        }
    }
}
