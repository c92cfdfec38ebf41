// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image Preprocessing Toolkit
//
// Entry point. Initialises logging on stderr, wires the native image toolkit
// to the console, and runs the main menu until the user exits.

mod console;
mod handlers;
mod menu;
mod services;

use std::io;
use std::process::ExitCode;

use imageprep_core::AppConfig;
use imageprep_core::error::Result;

use console::Console;
use menu::MenuLoop;
use services::toolkit::NativeToolkit;

fn main() -> ExitCode {
    // stdout belongs to the menu; keep log lines out of it.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::info!("imageprep starting");

    let config = AppConfig::default();
    let toolkit = NativeToolkit::new(&config);
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());

    ExitCode::from(exit_status(MenuLoop::new(console, &toolkit, config).run()))
}

fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "Console failure, exiting");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageprep_core::PrepError;

    #[test]
    fn clean_exit_is_success() {
        assert_eq!(exit_status(Ok(())), 0);
    }

    #[test]
    fn console_failure_is_failure() {
        let err = PrepError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(exit_status(Err(err)), 1);
    }
}
