// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native popup window built on eframe. The window is sized to the image and
// closes on any key press or when the user closes it; `show` blocks until
// then.

use eframe::egui;
use image::DynamicImage;
use imageprep_core::error::{PrepError, Result};
use tracing::{info, instrument};

use super::Viewer;

/// Blocking popup window viewer.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowViewer;

impl Viewer for WindowViewer {
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    fn show(&self, title: &str, image: &DynamicImage) -> Result<()> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            rgba.as_raw(),
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([width as f32, height as f32]),
            ..Default::default()
        };

        info!("Opening image window (press any key to close)");
        let texture_name = title.to_string();
        eframe::run_native(
            title,
            options,
            Box::new(move |cc| {
                let texture =
                    cc.egui_ctx
                        .load_texture(texture_name, pixels, egui::TextureOptions::LINEAR);
                Ok(Box::new(ImagePopup { texture }))
            }),
        )
        .map_err(|err| PrepError::Display(err.to_string()))
    }
}

struct ImagePopup {
    texture: egui::TextureHandle,
}

impl eframe::App for ImagePopup {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_pressed = ctx.input(|input| {
            input
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                ui.add(egui::Image::new(&self.texture).shrink_to_fit());
            });
    }
}
