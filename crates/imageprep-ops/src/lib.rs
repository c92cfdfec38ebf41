// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imageprep-ops: the image primitives behind the toolkit menu.
//
// Provides color-space conversion (RGB, GRAY, HSV, LAB), noise reduction
// (Gaussian, median, bilateral), two independent load/resize/show backends,
// and display helpers (downscaling and popup viewers).

pub mod backend;
pub mod color;
pub mod denoise;
pub mod display;

pub use backend::{FastResizeBackend, ImageBackend, ImageRsBackend, backend_for};
pub use color::convert_color;
pub use denoise::denoise;
pub use display::{SystemViewer, Viewer, WindowViewer, scale_for_display};
