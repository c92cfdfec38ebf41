// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image resizing module. Both target dimensions are read and checked before
// the image is loaded, so a typo never costs a decode.

use std::io::{BufRead, Write};

use imageprep_core::Backend;
use imageprep_core::error::Result;
use tracing::info;

use super::{load_image, print_options, prompt_path};
use crate::console::Console;
use crate::services::toolkit::Toolkit;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, toolkit: &dyn Toolkit) -> Result<()> {
    console.say("\n--- Image Resizing ---")?;

    print_options(
        console,
        "Backend:",
        Backend::ALL.iter().map(|backend| backend.label()),
    )?;
    let key = console.prompt("Select backend (1-2): ")?;
    let Some(backend) = Backend::from_key(&key) else {
        console.say("Invalid backend choice.")?;
        return Ok(());
    };

    let Some(path) = prompt_path(console)? else {
        return Ok(());
    };

    let width = console.prompt("Target width: ")?;
    let height = console.prompt("Target height: ")?;
    let Some((width, height)) = parse_dimensions(&width, &height) else {
        console.say("Width and height must be integers.")?;
        return Ok(());
    };
    if width <= 0 || height <= 0 {
        console.say("Width and height must be positive.")?;
        return Ok(());
    }
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        console.say("Width and height are too large.")?;
        return Ok(());
    };

    let Some(image) = load_image(console, toolkit, backend, &path)? else {
        return Ok(());
    };
    let (from_w, from_h) = (image.width(), image.height());

    let resized = toolkit.resize(backend, &image, width, height)?;
    info!(backend = backend.library_name(), width, height, "Resize finished");
    console.say(&format!(
        "Resized with {}: {}x{} -> {}x{}",
        backend.library_name(),
        from_w,
        from_h,
        resized.width(),
        resized.height()
    ))?;

    toolkit.show(
        backend,
        &format!("Resized ({})", backend.library_name()),
        &resized,
    )
}

/// Both answers as integers, or `None` if either is not one.
fn parse_dimensions(width: &str, height: &str) -> Option<(i64, i64)> {
    Some((width.parse().ok()?, height.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{scripted, transcript};
    use crate::services::toolkit::fake::{Call, FakeToolkit};

    fn run_script(input: &str, toolkit: &FakeToolkit) -> String {
        let mut console = scripted(input);
        run(&mut console, toolkit).unwrap();
        transcript(&console)
    }

    #[test]
    fn resizes_with_selected_backend() {
        let toolkit = FakeToolkit::default();
        let out = run_script("2\nphoto.png\n320\n240\n", &toolkit);

        assert_eq!(
            toolkit.calls(),
            vec![
                Call::Load(Backend::FastResize, "photo.png".into()),
                Call::Resize(Backend::FastResize, 320, 240),
                Call::Show(Backend::FastResize, "Resized (fast_image_resize)".into()),
            ]
        );
        assert!(out.contains("Resized with fast_image_resize: 64x48 -> 320x240"));
    }

    #[test]
    fn non_integer_dimensions_skip_load_and_resize() {
        for (w, h) in [("wide", "240"), ("320", "12.5"), ("", "")] {
            let toolkit = FakeToolkit::default();
            let out = run_script(&format!("1\nphoto.png\n{w}\n{h}\n"), &toolkit);

            assert!(out.contains("Width and height must be integers."), "{w:?}x{h:?}");
            assert!(toolkit.calls().is_empty(), "{w:?}x{h:?}");
        }
    }

    #[test]
    fn non_positive_dimensions_skip_load() {
        for (w, h) in [("0", "240"), ("-5", "10")] {
            let toolkit = FakeToolkit::default();
            let out = run_script(&format!("1\nphoto.png\n{w}\n{h}\n"), &toolkit);

            assert!(out.contains("Width and height must be positive."), "{w:?}x{h:?}");
            assert!(toolkit.calls().is_empty());
        }
    }

    #[test]
    fn oversized_dimensions_skip_load() {
        let toolkit = FakeToolkit::default();
        let out = run_script("1\nphoto.png\n5000000000\n10\n", &toolkit);

        assert!(out.contains("Width and height are too large."));
        assert!(toolkit.calls().is_empty());
    }

    #[test]
    fn invalid_backend_aborts() {
        let toolkit = FakeToolkit::default();
        let out = run_script("3\n", &toolkit);

        assert!(out.contains("Invalid backend choice."));
        assert!(toolkit.calls().is_empty());
    }

    #[test]
    fn missing_file_stops_before_resize() {
        let toolkit = FakeToolkit::default();
        let out = run_script("1\nmissing.png\n100\n100\n", &toolkit);

        assert!(out.contains("Could not read image from 'missing.png'."));
        assert_eq!(
            toolkit.calls(),
            vec![Call::Load(Backend::Image, "missing.png".into())]
        );
    }
}
